//! XDG-style path utilities for the configuration directory.
//!
//! This module provides consistent path resolution across platforms,
//! preferring XDG Base Directory Specification conventions over
//! OS-specific locations.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Returns the configuration directory for convo.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/convo` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/convo` otherwise
pub fn config_dir() -> Result<PathBuf> {
    let base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => home_dir()?.join(".config"),
    };
    Ok(base.join("convo"))
}

/// Returns the user's home directory.
fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("Failed to determine home directory")
}
