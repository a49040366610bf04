//! Guided walk through the questionnaire.
//!
//! The wizard asks every question that is currently visible, in layout order,
//! and commits each answer to the session immediately. Visibility is recomputed
//! after every answer, so follow-up questions appear (or disappear) as soon as
//! their controlling answer changes.

use dialoguer::theme::ColorfulTheme;

use crate::cli::core::CommandError;
use crate::cli::io;
use crate::core::IntakeSession;
use crate::domain::{FormRecord, ItemField, ListKind};
use crate::form::layout::{self, Control, LayoutEntry, FORM_LAYOUT};
use crate::locale::LocaleTable;

/// Typed at a text prompt to return to the previous question.
pub const BACK_KEYWORD: &str = ":back";
/// Typed at a text prompt to stop the wizard.
pub const QUIT_KEYWORD: &str = ":q";

/// Describes how prompts can be answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptResponse {
    Value(String),
    /// Leave the stored answer as it is.
    Keep,
    Back,
    Cancel,
}

/// One question the wizard can ask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Field(crate::domain::Field, Control),
    Item {
        index: usize,
        field: ItemField,
        control: Control,
    },
}

impl Step {
    pub fn control(self) -> Control {
        match self {
            Step::Field(_, control) => control,
            Step::Item { control, .. } => control,
        }
    }

    fn label(self, locale: &LocaleTable) -> String {
        let labels = &locale.labels;
        match self {
            Step::Field(field, _) => labels.field(field).to_string(),
            Step::Item { index, field, .. } => match field {
                ItemField::Family(inner) => format!(
                    "{} · {}",
                    labels.family_member_title(index + 1),
                    labels.family(inner)
                ),
                ItemField::Helper(inner) => format!(
                    "{} · {}",
                    labels.helper_title(index + 1),
                    labels.helper(inner)
                ),
            },
        }
    }

    fn current(self, record: &FormRecord) -> String {
        match self {
            Step::Field(field, _) => record.get(field).to_string(),
            Step::Item { index, field, .. } => match field {
                ItemField::Family(inner) => record
                    .family_members
                    .get(index)
                    .map(|member| member.get(inner).to_string())
                    .unwrap_or_default(),
                ItemField::Helper(inner) => record
                    .old_helpers
                    .get(index)
                    .map(|helper| helper.get(inner).to_string())
                    .unwrap_or_default(),
            },
        }
    }
}

/// Questions visible for `record`, in presentation order.
pub fn visible_steps(record: &FormRecord, locale: &LocaleTable) -> Vec<Step> {
    let mut steps = Vec::new();
    for entry in FORM_LAYOUT {
        match *entry {
            LayoutEntry::Field(field, control) => {
                if crate::form::visibility::is_visible(field, record, locale) {
                    steps.push(Step::Field(field, control));
                }
            }
            LayoutEntry::List(list) => {
                if layout::list_visible(list, record, locale) {
                    push_list_steps(&mut steps, list, record, locale);
                }
            }
            LayoutEntry::Divider => {}
        }
    }
    steps
}

fn push_list_steps(steps: &mut Vec<Step>, list: ListKind, record: &FormRecord, locale: &LocaleTable) {
    match list {
        ListKind::FamilyMembers => {
            for (index, member) in record.family_members.iter().enumerate() {
                for (field, control) in layout::visible_family_fields(member, locale) {
                    steps.push(Step::Item {
                        index,
                        field: ItemField::Family(field),
                        control,
                    });
                }
            }
        }
        ListKind::OldHelpers => {
            for (index, helper) in record.old_helpers.iter().enumerate() {
                for (field, control) in layout::visible_helper_fields(helper, locale) {
                    steps.push(Step::Item {
                        index,
                        field: ItemField::Helper(field),
                        control,
                    });
                }
            }
        }
    }
}

/// Everything an interaction needs to ask one question.
pub struct PromptContext<'a> {
    pub label: &'a str,
    pub current: &'a str,
    pub control: Control,
    /// Choices for select controls; empty otherwise.
    pub options: &'a [String],
    pub index: usize,
    pub total: usize,
}

pub trait FormInteraction {
    fn prompt(&mut self, context: &PromptContext<'_>) -> PromptResponse;

    /// Called when an answer fails its input-type check.
    fn reject(&mut self, message: &str) {
        io::print_warning(message);
    }
}

/// Outcome of a wizard run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillOutcome {
    Completed { answered: usize },
    Cancelled { answered: usize },
}

/// Walks every visible question, committing answers to `session` as they arrive.
pub fn run_fill(
    session: &mut IntakeSession,
    interaction: &mut dyn FormInteraction,
) -> Result<FillOutcome, CommandError> {
    let mut cursor = 0usize;
    let mut answered = 0usize;

    loop {
        let steps = visible_steps(session.record(), session.locale());
        let Some(step) = steps.get(cursor).copied() else {
            return Ok(FillOutcome::Completed { answered });
        };

        let locale = session.locale();
        let label = step.label(locale);
        let current = step.current(session.record());
        let options = match step.control() {
            Control::Select(list) => locale.options.list(list),
            _ => Vec::new(),
        };
        let context = PromptContext {
            label: &label,
            current: &current,
            control: step.control(),
            options: &options,
            index: cursor,
            total: steps.len(),
        };

        match interaction.prompt(&context) {
            PromptResponse::Cancel => return Ok(FillOutcome::Cancelled { answered }),
            PromptResponse::Back => {
                cursor = cursor.saturating_sub(1);
                continue;
            }
            PromptResponse::Keep => {}
            PromptResponse::Value(value) => {
                if !step.control().accepts(&value) {
                    interaction.reject(&invalid_message(step.control(), &value));
                    continue;
                }
                if value != current {
                    apply(session, step, &value)?;
                    answered += 1;
                }
            }
        }

        // The answer may have shown or hidden later questions.
        let refreshed = visible_steps(session.record(), session.locale());
        cursor = refreshed
            .iter()
            .position(|candidate| *candidate == step)
            .map(|pos| pos + 1)
            .unwrap_or(cursor + 1);
    }
}

fn apply(session: &mut IntakeSession, step: Step, value: &str) -> Result<(), CommandError> {
    match step {
        Step::Field(field, _) => session.set_field(field, value)?,
        Step::Item { index, field, .. } => session.update_item(index, field, value)?,
    }
    Ok(())
}

fn invalid_message(control: Control, value: &str) -> String {
    match control {
        Control::Number => format!("`{}` is not a number.", value),
        Control::Date => format!("`{}` is not a date in YYYY-MM-DD form.", value),
        _ => format!("`{}` is not accepted here.", value),
    }
}

/// Dialoguer-backed prompts for the interactive shell.
pub struct WizardInteraction<'t> {
    theme: &'t ColorfulTheme,
}

impl<'t> WizardInteraction<'t> {
    pub fn new(theme: &'t ColorfulTheme) -> Self {
        Self { theme }
    }

    fn title(context: &PromptContext<'_>) -> String {
        format!("[{}/{}] {}", context.index + 1, context.total, context.label)
    }

    fn prompt_select(&mut self, context: &PromptContext<'_>) -> PromptResponse {
        let mut items = context.options.to_vec();
        let back = if context.index > 0 {
            items.push("← Back".into());
            Some(items.len() - 1)
        } else {
            None
        };
        let current = context
            .options
            .iter()
            .position(|option| option == context.current);

        match io::select_option(self.theme, &Self::title(context), &items, current) {
            Ok(Some(choice)) if Some(choice) == back => PromptResponse::Back,
            Ok(Some(choice)) if Some(choice) == current => PromptResponse::Keep,
            Ok(Some(choice)) => PromptResponse::Value(items[choice].clone()),
            Ok(None) | Err(_) => PromptResponse::Cancel,
        }
    }

    fn prompt_input(&mut self, context: &PromptContext<'_>) -> PromptResponse {
        match io::prompt_text(self.theme, &Self::title(context), context.current) {
            Ok(value) => match value.trim() {
                BACK_KEYWORD => PromptResponse::Back,
                QUIT_KEYWORD => PromptResponse::Cancel,
                _ if value == context.current => PromptResponse::Keep,
                _ => PromptResponse::Value(value),
            },
            Err(_) => PromptResponse::Cancel,
        }
    }
}

impl FormInteraction for WizardInteraction<'_> {
    fn prompt(&mut self, context: &PromptContext<'_>) -> PromptResponse {
        match context.control {
            Control::Select(_) => self.prompt_select(context),
            _ => self.prompt_input(context),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FamilyField, Field, HelperField};
    use crate::locale::Language;
    use crate::storage::JsonFormStore;
    use std::collections::VecDeque;
    use tempfile::tempdir;

    /// Answers questions by label lookup, keeping everything else.
    struct MockInteraction {
        script: VecDeque<(Step, PromptResponse)>,
        asked: Vec<String>,
        rejected: usize,
        locale: &'static LocaleTable,
    }

    impl MockInteraction {
        fn new(script: Vec<(Step, PromptResponse)>) -> Self {
            Self {
                script: script.into(),
                asked: Vec::new(),
                rejected: 0,
                locale: LocaleTable::builtin(Language::En),
            }
        }
    }

    impl FormInteraction for MockInteraction {
        fn prompt(&mut self, context: &PromptContext<'_>) -> PromptResponse {
            self.asked.push(context.label.to_string());
            match self.script.front() {
                Some((step, _)) if step.label(self.locale) == context.label => {
                    self.script.pop_front().map(|(_, response)| response).unwrap()
                }
                _ => PromptResponse::Keep,
            }
        }

        fn reject(&mut self, _message: &str) {
            self.rejected += 1;
        }
    }

    fn field(field: Field) -> Step {
        Step::Field(field, layout::control_for(field))
    }

    fn session_in(dir: &std::path::Path) -> IntakeSession {
        let store = JsonFormStore::new(Some(dir.to_path_buf()));
        IntakeSession::open(Box::new(store), Language::En, None)
    }

    #[test]
    fn empty_record_starts_with_unconditional_questions() {
        let locale = LocaleTable::builtin(Language::En);
        let steps = visible_steps(&FormRecord::new(), locale);
        assert_eq!(steps[0], field(Field::EmployerName));
        assert!(!steps.contains(&field(Field::DogCount)));
        assert!(!steps.iter().any(|step| matches!(step, Step::Item { .. })));
    }

    #[test]
    fn answers_reveal_follow_up_questions_live() {
        let dir = tempdir().unwrap();
        let mut session = session_in(dir.path());
        let mut interaction = MockInteraction::new(vec![
            (field(Field::EmployerName), PromptResponse::Value("Chan".into())),
            (field(Field::HasDogs), PromptResponse::Value("Yes".into())),
            (field(Field::DogCount), PromptResponse::Value("2".into())),
        ]);

        let outcome = run_fill(&mut session, &mut interaction).unwrap();
        assert_eq!(outcome, FillOutcome::Completed { answered: 3 });
        assert_eq!(session.record().dog_count, "2");
        assert!(interaction.script.is_empty());
    }

    #[test]
    fn count_answer_adds_item_questions() {
        let dir = tempdir().unwrap();
        let mut session = session_in(dir.path());
        let name_step = Step::Item {
            index: 0,
            field: ItemField::Family(FamilyField::Name),
            control: Control::Text,
        };
        let mut interaction = MockInteraction::new(vec![
            (field(Field::FamilyCount), PromptResponse::Value("1 (employer +1)".into())),
            (name_step, PromptResponse::Value("Ann".into())),
        ]);

        run_fill(&mut session, &mut interaction).unwrap();
        assert_eq!(session.record().family_members.len(), 1);
        assert_eq!(session.record().family_members[0].name, "Ann");
    }

    #[test]
    fn malformed_numbers_are_asked_again() {
        let dir = tempdir().unwrap();
        let mut session = session_in(dir.path());
        let mut interaction = MockInteraction::new(vec![
            (field(Field::HouseSize), PromptResponse::Value("big".into())),
            (field(Field::HouseSize), PromptResponse::Value("650".into())),
        ]);

        run_fill(&mut session, &mut interaction).unwrap();
        assert_eq!(interaction.rejected, 1);
        assert_eq!(session.record().house_size, "650");
    }

    #[test]
    fn cancel_keeps_answers_given_so_far() {
        let dir = tempdir().unwrap();
        let mut session = session_in(dir.path());
        let mut interaction = MockInteraction::new(vec![
            (field(Field::EmployerName), PromptResponse::Value("Chan".into())),
            (field(Field::Address), PromptResponse::Cancel),
        ]);

        let outcome = run_fill(&mut session, &mut interaction).unwrap();
        assert_eq!(outcome, FillOutcome::Cancelled { answered: 1 });
        assert_eq!(session_in(dir.path()).record().employer_name, "Chan");
    }

    #[test]
    fn back_returns_to_previous_question() {
        let dir = tempdir().unwrap();
        let mut session = session_in(dir.path());
        let mut interaction = MockInteraction::new(vec![
            (field(Field::EmployerName), PromptResponse::Value("Chan".into())),
            (field(Field::Address), PromptResponse::Back),
            (field(Field::EmployerName), PromptResponse::Value("Wong".into())),
        ]);

        run_fill(&mut session, &mut interaction).unwrap();
        assert_eq!(session.record().employer_name, "Wong");
        assert_eq!(
            interaction
                .asked
                .iter()
                .filter(|label| label.as_str() == "Employer's full name")
                .count(),
            2
        );
    }

    #[test]
    fn helper_questions_follow_the_helper_answer() {
        let mut record = FormRecord::new();
        record.has_other_helpers = "Yes".into();
        record.old_helper_count = "1".into();
        record.old_helpers.push(crate::domain::OldHelper::new());
        let steps = visible_steps(&record, LocaleTable::builtin(Language::En));
        assert!(steps.contains(&Step::Item {
            index: 0,
            field: ItemField::Helper(HelperField::VisaExpiry),
            control: Control::Date,
        }));
        assert!(!steps.iter().any(|step| matches!(
            step,
            Step::Item {
                field: ItemField::Helper(HelperField::HandoverDays),
                ..
            }
        )));
    }
}
