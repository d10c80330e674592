//! Chat mode UI components.

use crate::ui::Style;

use super::session::SessionConfig;
use super::state::{SELECTABLE_MODELS, SessionModelState};
use super::transcript::{ChatMessage, Origin};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header(config: &SessionConfig) {
    println!(
        "{} {} - Interactive Chat",
        Style::header("convo"),
        Style::version(format!("v{VERSION}"))
    );
    println!("{}", Style::secondary(format!("Server: {}", config.server)));
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

/// Prints one transcript entry, styled by origin.
pub fn print_message(message: &ChatMessage) {
    match message.origin {
        Origin::User => println!("{} {}", Style::user("You:"), message.text),
        Origin::Assistant => println!("{} {}", Style::assistant("AI:"), message.text),
        Origin::System => println!("{}", Style::system(&message.text)),
    }
    println!();
}

pub fn print_config(config: &SessionConfig, state: &SessionModelState) {
    let available = state.available_providers();

    println!("{}", Style::header("Configuration"));
    println!(
        "  {}      {}",
        Style::label("server"),
        Style::secondary(&config.server)
    );
    println!(
        "  {}       {}",
        Style::label("model"),
        Style::value(state.display_model())
    );
    println!(
        "  {}   {}",
        Style::label("available"),
        if available.is_empty() {
            Style::secondary("(none)")
        } else {
            Style::value(available.join(", "))
        }
    );
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    println!(
        "  {}   {}",
        Style::command("/models"),
        Style::secondary("Show which models the server has available")
    );
    println!(
        "  {}    {}",
        Style::command("/model"),
        Style::secondary(format!(
            "Switch to a model ({})",
            SELECTABLE_MODELS.join(", ")
        ))
    );
    println!(
        "  {}    {}",
        Style::command("/reset"),
        Style::secondary("Start a fresh conversation")
    );
    println!(
        "  {}   {}",
        Style::command("/config"),
        Style::secondary("Show current configuration")
    );
    println!(
        "  {}     {}",
        Style::command("/help"),
        Style::secondary("Show this help")
    );
    println!(
        "  {}     {}",
        Style::command("/quit"),
        Style::secondary("Exit chat")
    );
    println!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}
