pub mod config;
pub mod export;
pub mod form;
pub mod lists;
pub mod system;

use crate::cli::core::CommandError;
use crate::cli::registry::CommandRegistry;
use crate::form::Control;
use crate::locale::LocaleTable;

pub(crate) fn register_all(registry: &mut CommandRegistry) {
    let groups = [
        system::definitions(),
        form::definitions(),
        lists::definitions(),
        export::definitions(),
        config::definitions(),
    ];
    for entry in groups.into_iter().flatten() {
        registry.register(entry);
    }
}

/// Parses a 1-based position typed by the user into a list index.
pub(crate) fn parse_position(input: &str) -> Result<usize, CommandError> {
    match input.trim().parse::<usize>() {
        Ok(position) if position > 0 => Ok(position - 1),
        _ => Err(CommandError::InvalidArguments(format!(
            "`{}` is not a position (use 1, 2, ...)",
            input
        ))),
    }
}

/// Resolves the value typed for a control.
///
/// Select controls accept `#n` as a shortcut for their n-th option. Numbers and
/// dates must pass the input-type check.
pub(crate) fn resolve_value(
    control: Control,
    raw: &str,
    locale: &LocaleTable,
) -> Result<String, CommandError> {
    if let Control::Select(list) = control {
        if let Some(position) = raw.strip_prefix('#') {
            let options = locale.options.list(list);
            let index = parse_position(position)?;
            return options.get(index).cloned().ok_or_else(|| {
                CommandError::InvalidArguments(format!(
                    "option #{} does not exist ({} options)",
                    index + 1,
                    options.len()
                ))
            });
        }
    }

    if !control.accepts(raw) {
        let expected = match control {
            Control::Date => "a date in YYYY-MM-DD form",
            _ => "a number",
        };
        return Err(CommandError::InvalidArguments(format!(
            "`{}` is not {}",
            raw, expected
        )));
    }
    Ok(raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::{Language, OptionList};

    #[test]
    fn positions_are_one_based() {
        assert_eq!(parse_position("1").unwrap(), 0);
        assert!(parse_position("0").is_err());
        assert!(parse_position("x").is_err());
    }

    #[test]
    fn select_shortcut_picks_option_text() {
        let locale = LocaleTable::builtin(Language::En);
        let value = resolve_value(Control::Select(OptionList::YesNo), "#1", locale).unwrap();
        assert_eq!(value, locale.options.yes);
        assert!(resolve_value(Control::Select(OptionList::YesNo), "#3", locale).is_err());
    }

    #[test]
    fn typed_controls_reject_malformed_values() {
        let locale = LocaleTable::builtin(Language::En);
        assert!(resolve_value(Control::Number, "many", locale).is_err());
        assert!(resolve_value(Control::Date, "31/01/2025", locale).is_err());
        assert_eq!(resolve_value(Control::Number, "3", locale).unwrap(), "3");
    }
}
