use std::{
    borrow::Cow,
    io::{self, BufRead},
};

use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::{ValidationContext, ValidationResult, Validator},
    Cmd, Context as ReadlineContext, Editor, Helper, KeyEvent,
};

use crate::cli::core::{CliError, CliMode, CommandError, LoopControl, ShellContext};
use crate::cli::output::info as output_info;
use crate::config::CONFIG_KEYS;
use crate::domain::{FamilyField, Field, HelperField};
use crate::locale::Language;
use crate::utils::app_data_dir;

/// Set to any value to read commands from stdin without prompts or colors.
pub const SCRIPT_ENV: &str = "INTAKE_CORE_CLI_SCRIPT";

const HISTORY_FILE: &str = "history.txt";

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os(SCRIPT_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut context = ShellContext::new(mode)?;

    match mode {
        CliMode::Interactive => run_interactive(&mut context),
        CliMode::Script => run_script(&mut context),
    }
}

/// Feeds one line to the context; `false` once the shell should stop.
fn step(context: &mut ShellContext, line: &str) -> Result<bool, CliError> {
    match handle_line(context, line) {
        Ok(LoopControl::Continue) => Ok(context.running),
        Ok(LoopControl::Exit) => Ok(false),
        Err(err) => {
            context.report_error(err)?;
            Ok(true)
        }
    }
}

fn run_interactive(context: &mut ShellContext) -> Result<(), CliError> {
    let mut editor = Editor::<IntakeHelper, DefaultHistory>::new()?;
    editor.set_helper(Some(IntakeHelper::new(context.command_names())));
    editor.bind_sequence(KeyEvent::from('?'), Cmd::Complete);

    let history = app_data_dir().join(HISTORY_FILE);
    if editor.load_history(&history).is_err() {
        tracing::debug!("no shell history at {}", history.display());
    }

    output_info(&context.session.locale().ui.intro);
    output_info("Type `help` for commands or `fill` to start the questionnaire.");

    loop {
        match editor.readline(&context.prompt()) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                editor.add_history_entry(trimmed).ok();
                if !step(context, trimmed)? {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => {
                if context.confirm_exit()? {
                    break;
                }
            }
            Err(ReadlineError::Eof) => {
                output_info("Answers are saved. Bye.");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    if let Err(err) = editor.save_history(&history) {
        tracing::debug!("could not save shell history: {err}");
    }
    Ok(())
}

fn run_script(context: &mut ShellContext) -> Result<(), CliError> {
    for line in io::stdin().lock().lines() {
        if !step(context, &line?)? {
            break;
        }
    }
    Ok(())
}

/// Tokenizes and dispatches one line. Blank lines and `#` comments are skipped.
pub(crate) fn handle_line(
    context: &mut ShellContext,
    line: &str,
) -> Result<LoopControl, CommandError> {
    let tokens = parse_command_line(line)?;
    let Some((raw, rest)) = tokens.split_first() else {
        return Ok(LoopControl::Continue);
    };
    if raw.starts_with('#') {
        return Ok(LoopControl::Continue);
    }

    let command = raw.to_lowercase();
    let args: Vec<&str> = rest.iter().map(String::as_str).collect();
    context.last_command = Some(line.trim().to_string());

    let control = context.dispatch(&command, raw, &args)?;
    if control == LoopControl::Exit {
        context.running = false;
    }
    Ok(control)
}

pub(crate) fn parse_command_line(input: &str) -> Result<Vec<String>, CommandError> {
    shell_words::split(input)
        .map_err(|err| CommandError::InvalidArguments(format!("could not parse line: {err}")))
}

/// Completes command names, then field keys and values for the commands that take them.
struct IntakeHelper {
    commands: Vec<String>,
}

impl IntakeHelper {
    fn new(names: Vec<&'static str>) -> Self {
        let mut commands: Vec<String> = names
            .into_iter()
            .map(|name| name.to_ascii_lowercase())
            .collect();
        commands.sort();
        commands.dedup();
        Self { commands }
    }

    /// Candidates for the word at `position` (0 is the command) after `words`.
    fn candidates(&self, words: &[&str], position: usize) -> Vec<String> {
        if position == 0 {
            return self.commands.clone();
        }
        match (words[0].to_ascii_lowercase().as_str(), position) {
            ("set" | "show", 1) => keys(Field::ALL, Field::key),
            ("member", 2) => keys(FamilyField::ALL, FamilyField::key),
            ("helper", 2) => keys(HelperField::ALL, HelperField::key),
            ("lang" | "language", 1) => keys(&Language::ALL, Language::code),
            ("config", 1) => vec!["show".into(), "set".into()],
            ("config", 2) => CONFIG_KEYS.iter().map(|key| key.to_string()).collect(),
            ("help", 1) => self.commands.clone(),
            _ => Vec::new(),
        }
    }
}

fn keys<T: Copy>(all: &[T], key: fn(T) -> &'static str) -> Vec<String> {
    all.iter().map(|item| key(*item).to_string()).collect()
}

impl Helper for IntakeHelper {}

impl Completer for IntakeHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];
        let start = prefix
            .rfind(char::is_whitespace)
            .map(|idx| idx + 1)
            .unwrap_or(0);
        let words: Vec<&str> = prefix[..start].split_whitespace().collect();

        let needle = prefix[start..].to_ascii_lowercase();
        let candidates = self
            .candidates(&words, words.len())
            .into_iter()
            .filter(|candidate| candidate.to_ascii_lowercase().starts_with(&needle))
            .map(|candidate| Pair {
                display: candidate.clone(),
                replacement: candidate,
            })
            .collect();
        Ok((start, candidates))
    }
}

impl Hinter for IntakeHelper {
    type Hint = String;
}

impl Highlighter for IntakeHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Borrowed(line)
    }
}

impl Validator for IntakeHelper {
    fn validate(&self, _ctx: &mut ValidationContext) -> rustyline::Result<ValidationResult> {
        Ok(ValidationResult::Valid(None))
    }
}
