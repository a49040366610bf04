use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::{section as output_section, separator};
use crate::cli::registry::CommandEntry;
use crate::message::PreviewEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "preview",
            "Review the answers with full question labels",
            "preview [--json]",
            cmd_preview,
        ),
        CommandEntry::new(
            "message",
            "Print the WhatsApp message, split into sendable parts",
            "message",
            cmd_message,
        )
        .with_aliases(&["transcript"]),
        CommandEntry::new(
            "send",
            "Print one WhatsApp link per message part",
            "send [--json]",
            cmd_send,
        )
        .with_aliases(&["export"]),
    ]
}

fn wants_json(args: &[&str]) -> Result<bool, CommandError> {
    match args {
        [] => Ok(false),
        ["--json"] => Ok(true),
        _ => Err(CommandError::InvalidArguments(format!(
            "unexpected arguments: {}",
            args.join(" ")
        ))),
    }
}

fn cmd_preview(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let entries = context.session.preview();
    if wants_json(args)? {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    let locale = context.session.locale();
    output_section(&locale.ui.preview);
    for entry in entries {
        match entry {
            PreviewEntry::Item { label, value } => {
                let shown = if value.trim().is_empty() {
                    locale.empty.as_str()
                } else {
                    value.as_str()
                };
                io::print_info(format!("  {}: {}", label, shown));
            }
            PreviewEntry::Section { title } => io::print_info(format!("  [{}]", title)),
            PreviewEntry::Divider => separator(),
        }
    }
    Ok(())
}

fn cmd_message(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let segments = context.session.segments(context.config.segment_limit);
    let total = segments.len();
    for (idx, segment) in segments.iter().enumerate() {
        if total > 1 {
            output_section(format!("{}/{}", idx + 1, total));
        }
        println!("{}", segment);
    }
    Ok(())
}

fn cmd_send(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let links = context
        .session
        .export_links(&context.config.recipient, context.config.segment_limit);
    if wants_json(args)? {
        println!("{}", serde_json::to_string_pretty(&links)?);
        return Ok(());
    }

    let ui = &context.session.locale().ui;
    if links.len() > 1 {
        io::print_hint(&ui.export_tip);
    }
    for link in &links {
        output_section(link.label(&ui.export_btn));
        println!("{}", link.url);
    }
    tracing::info!(parts = links.len(), "export links generated");
    Ok(())
}
