//! Consistent styling utilities for CLI output.
//!
//! Provides color and formatting helpers using owo-colors. All helpers
//! return plain text when colors are disabled (flag or NO_COLOR).

use owo_colors::{OwoColorize, Style as ColorStyle};
use std::fmt::Display;

use crate::output;

/// Styles for different semantic elements.
pub struct Style;

impl Style {
    fn apply<T: Display>(text: T, style: ColorStyle) -> String {
        if output::is_no_color() {
            text.to_string()
        } else {
            format!("{}", text.style(style))
        }
    }

    /// Style for section headers (e.g., "Configuration", "Available commands")
    pub fn header<T: Display>(text: T) -> String {
        Self::apply(text, ColorStyle::new().bold())
    }

    /// Style for labels/keys (e.g., "server", "model")
    pub fn label<T: Display>(text: T) -> String {
        Self::apply(text, ColorStyle::new().dimmed())
    }

    /// Style for primary values (e.g., server URLs, model names)
    pub fn value<T: Display>(text: T) -> String {
        Self::apply(text, ColorStyle::new().cyan())
    }

    /// Style for secondary/supplementary info (e.g., descriptions, paths)
    pub fn secondary<T: Display>(text: T) -> String {
        Self::apply(text, ColorStyle::new().dimmed())
    }

    /// Style for success messages
    pub fn success<T: Display>(text: T) -> String {
        Self::apply(text, ColorStyle::new().green())
    }

    /// Style for error messages
    pub fn error<T: Display>(text: T) -> String {
        Self::apply(text, ColorStyle::new().red().bold())
    }

    /// Style for commands (e.g., "/models", "/help")
    pub fn command<T: Display>(text: T) -> String {
        Self::apply(text, ColorStyle::new().green())
    }

    /// Style for the operator's own transcript entries
    pub fn user<T: Display>(text: T) -> String {
        Self::apply(text, ColorStyle::new().blue().bold())
    }

    /// Style for assistant transcript entries
    pub fn assistant<T: Display>(text: T) -> String {
        Self::apply(text, ColorStyle::new().magenta().bold())
    }

    /// Style for system transcript entries
    pub fn system<T: Display>(text: T) -> String {
        Self::apply(text, ColorStyle::new().yellow())
    }

    /// Style for version info
    pub fn version<T: Display>(text: T) -> String {
        Self::apply(text, ColorStyle::new().dimmed())
    }
}
