use crate::cli::core::{usage_error, CommandError, CommandResult, ShellContext};
use crate::cli::forms::{self, FillOutcome, WizardInteraction};
use crate::cli::io;
use crate::cli::output::{section as output_section, separator};
use crate::cli::registry::CommandEntry;
use crate::domain::Field;
use crate::form::{layout, visibility, Control};

use super::resolve_value;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "show",
            "Show current answers, or one field with its options",
            "show [field]",
            cmd_show,
        ),
        CommandEntry::new(
            "set",
            "Answer a question (`#n` picks the n-th option of a select)",
            "set <field> <value>",
            cmd_set,
        ),
        CommandEntry::new(
            "commit-income",
            "Format the income answer with thousands separators",
            "commit-income",
            cmd_commit_income,
        ),
        CommandEntry::new(
            "fields",
            "List field names and whether they are currently shown",
            "fields",
            cmd_fields,
        ),
        CommandEntry::new(
            "fill",
            "Walk through every visible question",
            "fill",
            cmd_fill,
        ),
        CommandEntry::new(
            "clear",
            "Erase all answers",
            "clear [--yes]",
            cmd_clear,
        )
        .with_aliases(&["reset"]),
    ]
}

fn control_name(control: Control) -> &'static str {
    match control {
        Control::Text => "text",
        Control::TextArea => "text area",
        Control::Number => "number",
        Control::Date => "date (YYYY-MM-DD)",
        Control::Select(_) => "select",
    }
}

fn cmd_show(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let locale = context.session.locale();
    let record = context.session.record();

    if let Some(name) = args.first() {
        let field: Field = name.parse()?;
        let control = layout::control_for(field);
        output_section(locale.labels.field(field));
        io::print_info(format!("  Key     : {}", field));
        io::print_info(format!("  Input   : {}", control_name(control)));
        io::print_info(format!("  Value   : {}", record.get(field)));
        if !visibility::is_visible(field, record, locale) {
            io::print_hint("Hidden by the current answers; it will not be sent.");
        }
        if let Control::Select(list) = control {
            for (idx, option) in locale.options.list(list).iter().enumerate() {
                let marker = if option == record.get(field) { "*" } else { " " };
                io::print_info(format!("  {} #{:<3} {}", marker, idx + 1, option));
            }
        }
        return Ok(());
    }

    output_section(&locale.ui.preview);
    for (field, _) in layout::visible_fields(record, locale) {
        let value = record.get(field);
        if value.trim().is_empty() {
            continue;
        }
        io::print_info(format!("  {:<26} {}", field.key(), value));
    }
    io::print_info(format!(
        "  family members: {}, current helpers: {}",
        record.family_members.len(),
        record.old_helpers.len()
    ));
    Ok(())
}

fn cmd_set(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        return Err(usage_error("set <field> <value>"));
    }
    let field: Field = args[0].parse()?;
    let raw = args[1..].join(" ");
    let value = resolve_value(layout::control_for(field), &raw, context.session.locale())?;

    context.session.set_field(field, &value)?;

    let session = &context.session;
    if visibility::is_visible(field, session.record(), session.locale()) {
        io::print_success(format!("{} = {}", field, value));
    } else {
        io::print_warning(format!(
            "{} saved, but it is hidden by the current answers and will not be sent.",
            field
        ));
    }
    Ok(())
}

fn cmd_commit_income(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.session.commit_income()?;
    io::print_success(format!("income = {}", context.session.record().income));
    Ok(())
}

fn cmd_fields(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let locale = context.session.locale();
    let record = context.session.record();
    output_section("Fields");
    for entry in layout::FORM_LAYOUT {
        match entry {
            layout::LayoutEntry::Field(field, control) => {
                let shown = if visibility::is_visible(*field, record, locale) {
                    " "
                } else {
                    "-"
                };
                io::print_info(format!(
                    "{} {:<26} {:<18} {}",
                    shown,
                    field.key(),
                    control_name(*control),
                    locale.labels.field(*field)
                ));
            }
            layout::LayoutEntry::List(list) => {
                io::print_info(format!("  ({} entries, see `help {}`)", list, list_command(*list)));
            }
            layout::LayoutEntry::Divider => separator(),
        }
    }
    io::print_hint("Fields marked `-` are hidden by the current answers.");
    Ok(())
}

fn list_command(list: crate::domain::ListKind) -> &'static str {
    match list {
        crate::domain::ListKind::FamilyMembers => "member",
        crate::domain::ListKind::OldHelpers => "helper",
    }
}

fn cmd_fill(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if !context.can_prompt() {
        return Err(CommandError::Message(
            "`fill` needs an interactive terminal; use `set` in scripts.".into(),
        ));
    }

    io::print_info(&context.session.locale().ui.intro);
    io::print_hint(format!(
        "Type `{}` to go back, `{}` to stop. Answers are saved as you go.",
        forms::BACK_KEYWORD,
        forms::QUIT_KEYWORD
    ));

    let mut interaction = WizardInteraction::new(&context.theme);
    match forms::run_fill(&mut context.session, &mut interaction)? {
        FillOutcome::Completed { answered } => {
            io::print_success(format!("Questionnaire complete ({} answers changed).", answered));
            io::print_hint("Use `preview` to review or `send` to export.");
        }
        FillOutcome::Cancelled { answered } => {
            io::print_info(format!("Stopped. {} answers changed and saved.", answered));
        }
    }
    Ok(())
}

fn cmd_clear(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let forced = args.iter().any(|arg| *arg == "--yes" || *arg == "-y");
    if !forced {
        if !context.can_prompt() {
            return Err(usage_error("clear --yes"));
        }
        let prompt = context.session.locale().ui.clear_confirm.clone();
        if !io::confirm_action(&context.theme, &prompt, false)? {
            io::print_info("Operation cancelled.");
            return Ok(());
        }
    }

    context.session.clear()?;
    io::print_success("All answers cleared.");
    Ok(())
}
