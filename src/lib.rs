//! AliveGPT is a terminal wellness companion with a simulated assistant, a
//! credit economy and a matching-preferences quiz.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`core`] owns the chat session state machine (credits, turns, alerts,
//!   attachments), the two-handle range selector, the preference quiz, chat
//!   history, settings and configuration.
//! - [`ui`] renders the terminal interface and runs the interactive event loop
//!   that turns key and mouse input into actions and drives turn timers.
//! - [`commands`] implements slash-command parsing and execution used by the
//!   chat input.
//!
//! Runtime entrypoints live in the binary crate (`src/main.rs`) and route
//! through [`crate::cli::main`], which loads configuration and dispatches into
//! [`core::app`] and [`ui::chat_loop`] for interactive sessions.

pub mod cli;
pub mod commands;
pub mod core;
pub mod ui;
pub mod utils;
