use crate::cli::core::{usage_error, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::CommandEntry;
use crate::domain::{ItemField, ListKind};
use crate::form::{layout, visibility};

use super::{parse_position, resolve_value};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "family",
            "Show family members, or set how many live with the employer",
            "family [count]",
            cmd_family,
        ),
        CommandEntry::new(
            "member",
            "Answer a question for one family member",
            "member <n> <name|yob|relation|relationOther|hkid> <value>",
            cmd_member,
        ),
        CommandEntry::new(
            "helpers",
            "Show current helpers, or set how many there are",
            "helpers [count]",
            cmd_helpers,
        ),
        CommandEntry::new(
            "helper",
            "Answer a question for one current helper",
            "helper <n> <name|hkid|contractNo|visaExpiry|employer|arrangement|handoverDays> <value>",
            cmd_helper,
        ),
    ]
}

fn cmd_family(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    resize_or_show(context, ListKind::FamilyMembers, args)
}

fn cmd_helpers(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    resize_or_show(context, ListKind::OldHelpers, args)
}

fn cmd_member(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    update_item(context, ListKind::FamilyMembers, args, "member <n> <field> <value>")
}

fn cmd_helper(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    update_item(context, ListKind::OldHelpers, args, "helper <n> <field> <value>")
}

fn resize_or_show(context: &mut ShellContext, list: ListKind, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        show_list(context, list);
        return Ok(());
    }

    let desired = args.join(" ");
    context.session.resize_list(list, &desired)?;
    let session = &context.session;
    let len = crate::form::state::list_len(session.record(), list);
    io::print_success(format!("{} now has {} entries.", list, len));
    if list == ListKind::OldHelpers && !visibility::shows_helper_list(session.record(), session.locale()) {
        io::print_hint(format!(
            "Helpers are only sent when `{}` is answered yes.",
            crate::domain::Field::HasOtherHelpers
        ));
    }
    Ok(())
}

fn show_list(context: &ShellContext, list: ListKind) {
    let locale = context.session.locale();
    let record = context.session.record();
    let labels = &locale.labels;

    match list {
        ListKind::FamilyMembers => {
            if record.family_members.is_empty() {
                io::print_info("No family members.");
            }
            for (idx, member) in record.family_members.iter().enumerate() {
                output_section(labels.family_member_title(idx + 1));
                for (field, _) in layout::visible_family_fields(member, locale) {
                    io::print_info(format!("  {:<14} {}", field.key(), member.get(field)));
                }
            }
        }
        ListKind::OldHelpers => {
            if record.old_helpers.is_empty() {
                io::print_info("No current helpers.");
            }
            for (idx, helper) in record.old_helpers.iter().enumerate() {
                output_section(labels.helper_title(idx + 1));
                for (field, _) in layout::visible_helper_fields(helper, locale) {
                    io::print_info(format!("  {:<14} {}", field.key(), helper.get(field)));
                }
            }
        }
    }
}

fn update_item(
    context: &mut ShellContext,
    list: ListKind,
    args: &[&str],
    usage: &str,
) -> CommandResult {
    if args.len() < 2 {
        return Err(usage_error(usage));
    }
    let index = parse_position(args[0])?;
    let field = ItemField::parse(list, args[1])?;
    let control = match field {
        ItemField::Family(inner) => layout::family_control_for(inner),
        ItemField::Helper(inner) => layout::helper_control_for(inner),
    };
    let raw = args[2..].join(" ");
    let value = resolve_value(control, &raw, context.session.locale())?;

    context.session.update_item(index, field, &value)?;
    io::print_success(format!("{} #{} {} = {}", list, index + 1, field, value));
    Ok(())
}
