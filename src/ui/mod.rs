//! Terminal front-end for the interactive session.
//!
//! - [`chat_loop`]: event loop, key and mouse mapping, turn timers.
//! - [`renderer`] and [`layout`]: frame composition for each screen.
//! - [`slider`]: the two-handle price range widget.
//!
//! This layer only presents state and captures input; [`crate::core`] owns
//! every rule about credits, turns and preferences.

pub mod chat_loop;
pub mod layout;
pub mod renderer;
pub mod slider;
