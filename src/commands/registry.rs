use super::CommandResult;
use crate::core::app::App;

pub type CommandHandler = fn(&mut App, CommandInvocation<'_>) -> CommandResult;

pub struct Command {
    pub name: &'static str,
    pub usage: &'static str,
    pub help: &'static str,
    pub handler: CommandHandler,
}

#[derive(Clone, Copy)]
pub struct CommandInvocation<'a> {
    pub input: &'a str,
    pub args: &'a str,
}

pub fn all_commands() -> &'static [Command] {
    COMMANDS
}

pub fn find_command(name: &str) -> Option<&'static Command> {
    all_commands()
        .iter()
        .find(|command| command.name.eq_ignore_ascii_case(name))
}

const COMMANDS: &[Command] = &[
    Command {
        name: "help",
        usage: "/help",
        help: "List the available commands.",
        handler: super::handle_help,
    },
    Command {
        name: "image",
        usage: "/image <name>",
        help: "Attach a camera image.",
        handler: super::handle_image,
    },
    Command {
        name: "photo",
        usage: "/photo <name>",
        help: "Attach a photo from the library.",
        handler: super::handle_photo,
    },
    Command {
        name: "file",
        usage: "/file <path>",
        help: "Attach a document.",
        handler: super::handle_file,
    },
    Command {
        name: "remove",
        usage: "/remove <n>",
        help: "Remove the n-th attachment from each list.",
        handler: super::handle_remove,
    },
    Command {
        name: "match",
        usage: "/match <session|circle|digital>",
        help: "Ask for a smart match.",
        handler: super::handle_match,
    },
    Command {
        name: "new",
        usage: "/new",
        help: "Start a new chat.",
        handler: super::handle_new,
    },
    Command {
        name: "buy",
        usage: "/buy",
        help: "Purchase more credits.",
        handler: super::handle_buy,
    },
    Command {
        name: "tier",
        usage: "/tier [lite|plus|pro|max]",
        help: "Switch membership tier, or cycle to the next one.",
        handler: super::handle_tier,
    },
    Command {
        name: "deep",
        usage: "/deep",
        help: "Toggle deep research.",
        handler: super::handle_deep,
    },
    Command {
        name: "quit",
        usage: "/quit",
        help: "Leave AliveGPT.",
        handler: super::handle_quit,
    },
];
