//! # convo - Terminal Chat Client
//!
//! `convo` is a command-line client for chatbot servers that route messages
//! to one of several AI models. It keeps a conversation going over a plain
//! HTTP/JSON API and lets you inspect and switch the active model without
//! leaving the session.
//!
//! ## Features
//!
//! - **Interactive sessions**: REPL-style chat with slash commands
//! - **Model switching**: Change the server's active model mid-conversation
//! - **Availability checks**: See which providers the server has configured
//! - **Conversation reset**: Start over without restarting the client
//!
//! ## Quick Start
//!
//! ```bash
//! # Start a chat session
//! convo --server http://localhost:5000
//!
//! # Check which models the server offers
//! convo models
//!
//! # Start with a specific model selected
//! convo --model gemini
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/convo/config.toml`:
//!
//! ```toml
//! [convo]
//! server = "http://localhost:5000"
//! model = "auto"
//! ```

/// HTTP client for the chat server API.
pub mod api;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management.
pub mod config;

/// Global output configuration (quiet mode, colors).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Interactive chat sessions: transcript, model state, and the REPL.
pub mod session;

/// Terminal UI components (spinner, colors).
pub mod ui;
