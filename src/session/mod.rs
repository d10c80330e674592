//! Interactive chat sessions.
//!
//! Provides a REPL-style interface with slash commands for conversation
//! and model management.

/// Slash command parsing and autocomplete.
pub mod command;
mod session;
mod state;
mod transcript;
mod ui;

/// Pure rendering of transcript entries and server replies.
pub mod view;

pub use session::{ChatSession, SessionConfig};
pub use state::{SELECTABLE_MODELS, SessionModelState, is_selectable};
pub use transcript::{ChatMessage, Origin, Transcript};
