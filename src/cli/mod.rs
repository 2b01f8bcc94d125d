//! Command-line interface parsing and handling
//!
//! With no subcommand the interactive session starts. `match` and `config`
//! are one-shot helpers that print and exit.

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;

use crate::core::app::App;
use crate::core::config::Config;
use crate::core::membership::Membership;
use crate::core::random::SeededRandom;
use crate::core::smart_match::{self, MatchCard, MatchKind};
use crate::ui::chat_loop::run_chat;
use crate::utils::logging::{init_file_logging, init_stderr_logging};

#[derive(Parser)]
#[command(name = "alivegpt")]
#[command(about = "A terminal wellness companion with a credit-metered chat")]
#[command(
    long_about = "AliveGPT is a full-screen terminal chat with a simulated companion. Every \
message costs credits, replies can surface smart-match cards for sessions, circles and \
digital content, and matching preferences are set through a short quiz.\n\n\
Controls:\n\
  Enter             Send the message\n\
  F1-F4             Chat, preferences quiz, chat history, settings\n\
  Ctrl+N            Start a new chat\n\
  Ctrl+D            Toggle deep research (Plus and above)\n\
  Ctrl+T            Cycle membership tier\n\
  Ctrl+B            Buy credits\n\
  Ctrl+C            Quit\n\n\
Commands:\n\
  /help             List chat commands\n\
  /image, /photo, /file <name>   Attach an item\n\
  /match <session|circle|digital> Ask for a smart match\n\n\
Environment Variables:\n\
  ALIVEGPT_LOG      Tracing filter directives (default: info)"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Seed the random source for a reproducible session
    #[arg(short = 's', long, global = true)]
    pub seed: Option<u64>,

    /// Write diagnostic logs to the given file
    #[arg(short = 'l', long, global = true, value_name = "FILE")]
    pub log: Option<PathBuf>,

    /// Membership tier to start with (lite, plus, pro, max)
    #[arg(short = 'm', long, global = true, value_parser = parse_membership)]
    pub membership: Option<Membership>,

    /// Read configuration from this file instead of the default location
    #[arg(short = 'c', long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the chat interface (default)
    Chat,
    /// Print one generated smart-match card
    Match {
        /// Kind of match: session, circle or digital
        #[arg(value_parser = parse_match_kind)]
        kind: MatchKind,
        /// Print the card as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the effective configuration
    Config,
}

fn parse_membership(value: &str) -> Result<Membership, String> {
    Membership::from_name(value)
        .ok_or_else(|| format!("unknown membership '{value}' (expected lite, plus, pro or max)"))
}

fn parse_match_kind(value: &str) -> Result<MatchKind, String> {
    MatchKind::from_name(value)
        .ok_or_else(|| format!("unknown match kind '{value}' (expected session, circle or digital)"))
}

pub fn main() -> Result<(), Box<dyn Error>> {
    tokio::runtime::Runtime::new()?.block_on(async_main())
}

async fn async_main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let command = args.command.unwrap_or(Commands::Chat);

    match (&command, &args.log) {
        (_, Some(path)) => init_file_logging(path)?,
        (Commands::Chat, None) => {}
        (_, None) => init_stderr_logging()?,
    }

    let mut config = Config::load(args.config.as_deref())?;
    if let Some(tier) = args.membership {
        config.membership = Some(tier);
    }
    debug!(seed = ?args.seed, tier = config.membership().title(), "configuration resolved");

    match command {
        Commands::Chat => {
            let app = App::new(&config, Box::new(SeededRandom::new(args.seed)));
            run_chat(app).await
        }
        Commands::Match { kind, json } => {
            println!("{}", match_preview(kind, args.seed, json)?);
            Ok(())
        }
        Commands::Config => {
            let path = args.config.clone().or_else(Config::get_config_path);
            config.print_all(path.as_deref());
            Ok(())
        }
    }
}

/// Generates one card for `kind`, as pretty JSON or as plain text.
pub fn match_preview(
    kind: MatchKind,
    seed: Option<u64>,
    json: bool,
) -> Result<String, serde_json::Error> {
    let mut rng = SeededRandom::new(seed);
    let card = smart_match::generate(kind, &mut rng);
    if json {
        serde_json::to_string_pretty(&card)
    } else {
        Ok(format_card(&card))
    }
}

fn format_card(card: &MatchCard) -> String {
    let mut lines = vec![
        format!(
            "{} ({}) - {}% match",
            card.category.label(),
            card.matching_label(),
            card.match_percentage
        ),
        card.title.clone(),
        format!(
            "with {} ({}), rated {:.1} from {} reviews",
            card.instructor_name, card.instructor_tier, card.rating, card.review_count
        ),
    ];
    if let Some(date) = &card.date {
        lines.push(format!("Date: {date}"));
    }
    if let Some(minutes) = card.duration_minutes {
        lines.push(format!("Duration: {minutes} min"));
    }
    if let Some(attendees) = &card.attendees {
        lines.push(format!("Attendees: {attendees}"));
    }
    if let Some(period) = &card.access_period {
        lines.push(format!("Access: {period}"));
    }
    if let Some(members) = card.member_count {
        lines.push(format!("Members: {members}"));
    }
    if let Some(bought) = card.bought_count {
        lines.push(format!("Bought: {bought}"));
    }
    lines.push(card.description.clone());
    lines.push(format!("{} credits", card.credits));
    lines.join("\n")
}
