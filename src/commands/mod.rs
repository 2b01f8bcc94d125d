mod registry;

pub use registry::{all_commands, CommandInvocation};

use crate::core::app::App;
use crate::core::membership::Membership;
use crate::core::message::{DocumentRef, ImageHandle};
use crate::core::session::{AttachmentError, SubmitOutcome};
use crate::core::smart_match::MatchKind;

pub enum CommandResult {
    Continue,
    ProcessAsMessage,
    /// The command sent something; the outcome still needs scheduling.
    Turn(SubmitOutcome),
}

pub fn process_input(app: &mut App, input: &str) -> CommandResult {
    let trimmed = input.trim();

    let Some(rest) = trimmed.strip_prefix('/') else {
        return CommandResult::ProcessAsMessage;
    };

    let mut parts = rest.splitn(2, ' ');
    let command_name = match parts.next() {
        Some(name) if !name.is_empty() => name,
        _ => return CommandResult::ProcessAsMessage,
    };
    let args = parts.next().unwrap_or("").trim();

    match registry::find_command(command_name) {
        Some(command) => {
            let invocation = CommandInvocation {
                input: trimmed,
                args,
            };
            (command.handler)(app, invocation)
        }
        None => {
            app.ui.set_status(format!("Unknown command: /{command_name} (try /help)"));
            CommandResult::Continue
        }
    }
}

pub(super) fn handle_help(app: &mut App, _invocation: CommandInvocation<'_>) -> CommandResult {
    let usages: Vec<&str> = all_commands().iter().map(|command| command.usage).collect();
    app.ui.set_status(usages.join("  "));
    CommandResult::Continue
}

pub(super) fn handle_image(app: &mut App, invocation: CommandInvocation<'_>) -> CommandResult {
    attach(app, invocation, "/image <name>", |app, name| {
        app.session.attach_camera_image(ImageHandle(name))
    })
}

pub(super) fn handle_photo(app: &mut App, invocation: CommandInvocation<'_>) -> CommandResult {
    attach(app, invocation, "/photo <name>", |app, name| {
        app.session.attach_photo(ImageHandle(name))
    })
}

pub(super) fn handle_file(app: &mut App, invocation: CommandInvocation<'_>) -> CommandResult {
    attach(app, invocation, "/file <path>", |app, name| {
        app.session.attach_document(DocumentRef(name))
    })
}

fn attach(
    app: &mut App,
    invocation: CommandInvocation<'_>,
    usage: &str,
    add: impl FnOnce(&mut App, String) -> Result<(), AttachmentError>,
) -> CommandResult {
    if invocation.args.is_empty() {
        app.ui.set_status(format!("Usage: {usage}"));
        return CommandResult::Continue;
    }
    let label = invocation.args.to_string();
    match add(app, label.clone()) {
        Ok(()) => app.ui.set_status(format!("Attached {label}")),
        Err(err) => app.ui.set_status(err.to_string()),
    }
    CommandResult::Continue
}

pub(super) fn handle_remove(app: &mut App, invocation: CommandInvocation<'_>) -> CommandResult {
    match invocation.args.parse::<usize>() {
        Ok(position) if position > 0 => {
            let removed = app.session.remove_attachment(position - 1);
            if removed == 0 {
                app.ui.set_status(format!("No attachment at position {position}"));
            } else {
                app.ui.set_status(format!("Removed {removed} attachment(s)"));
            }
        }
        _ => app.ui.set_status("Usage: /remove <n>"),
    }
    CommandResult::Continue
}

pub(super) fn handle_match(app: &mut App, invocation: CommandInvocation<'_>) -> CommandResult {
    match MatchKind::from_name(invocation.args) {
        Some(kind) => CommandResult::Turn(app.session.request_smart_match(kind)),
        None => {
            app.ui.set_status("Usage: /match <session|circle|digital>");
            CommandResult::Continue
        }
    }
}

pub(super) fn handle_new(app: &mut App, _invocation: CommandInvocation<'_>) -> CommandResult {
    app.session.start_new_chat();
    app.ui.scroll_to_bottom();
    CommandResult::Continue
}

pub(super) fn handle_buy(app: &mut App, _invocation: CommandInvocation<'_>) -> CommandResult {
    app.session.purchase_credits();
    CommandResult::Continue
}

pub(super) fn handle_tier(app: &mut App, invocation: CommandInvocation<'_>) -> CommandResult {
    let tier = if invocation.args.is_empty() {
        Some(app.session.membership().cycle())
    } else {
        Membership::from_name(invocation.args)
    };
    match tier {
        Some(tier) => {
            app.set_membership(tier);
            app.ui.set_status(format!("Switched to {}", tier.title()));
        }
        None => app.ui.set_status("Usage: /tier [lite|plus|pro|max]"),
    }
    CommandResult::Continue
}

pub(super) fn handle_deep(app: &mut App, _invocation: CommandInvocation<'_>) -> CommandResult {
    if app.session.toggle_deep_research() {
        let state = if app.session.deep_research() {
            "on"
        } else {
            "off"
        };
        app.ui.set_status(format!("Deep research {state}"));
    } else {
        app.ui.set_status("Deep research needs AliveGPT Plus or higher");
    }
    CommandResult::Continue
}

pub(super) fn handle_quit(app: &mut App, _invocation: CommandInvocation<'_>) -> CommandResult {
    app.request_exit();
    CommandResult::Continue
}

#[cfg(test)]
mod tests;
