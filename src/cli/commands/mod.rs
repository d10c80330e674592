//! Subcommand implementations.

/// Chat session command handler.
pub mod chat;

/// Configure command handler.
pub mod configure;

/// Model availability command handler.
pub mod models;
