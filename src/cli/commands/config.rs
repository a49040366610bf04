use crate::cli::core::{usage_error, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::CommandEntry;
use crate::config::CONFIG_KEYS;
use crate::locale::Language;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "config",
            "View and change CLI preferences",
            "config [show|set <language|recipient|segment_limit|locale_dir> <value>]",
            cmd_config,
        ),
        CommandEntry::new(
            "lang",
            "Switch the presentation language (zh or en)",
            "lang [zh|en]",
            cmd_lang,
        )
        .with_aliases(&["language"]),
    ]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() || args[0].eq_ignore_ascii_case("show") {
        output_section("Configuration");
        for key in CONFIG_KEYS {
            io::print_info(format!("  {:<14}: {}", key, context.config.get(key)?));
        }
        io::print_info(format!(
            "  {:<14}: {}",
            "file",
            context.config_manager.path().display()
        ));
        return Ok(());
    }

    if !args[0].eq_ignore_ascii_case("set") || args.len() < 3 {
        return Err(usage_error(
            "config set <language|recipient|segment_limit|locale_dir> <value>",
        ));
    }

    let key = args[1];
    let value = args[2..].join(" ");
    let mut updated = context.config.clone();
    updated.set(key, &value)?;

    if updated.locale_dir != context.config.locale_dir {
        context.session.set_locale_dir(updated.locale_dir.clone());
    }
    if updated.language != context.config.language {
        context.session.set_language(updated.language);
    }
    context.config = updated;
    context.persist_config()?;
    io::print_success(format!("{} = {}", key, context.config.get(key)?));
    Ok(())
}

fn cmd_lang(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let language = match args.first() {
        Some(code) => code.parse::<Language>()?,
        None => match context.session.language() {
            Language::Zh => Language::En,
            Language::En => Language::Zh,
        },
    };

    context.session.set_language(language);
    context.config.language = language;
    context.persist_config()?;
    io::print_success(format!("Language: {}", language.display_name()));
    Ok(())
}
