//! Pure rendering of transcript entries and server replies.
//!
//! Everything here maps data to plain display text; styling and printing
//! live in the session UI. Keeping this side-effect free makes the exact
//! message wording testable.

use super::state::SessionModelState;
use super::transcript::{ChatMessage, Origin};

/// Greeting shown after a successful conversation reset.
pub const GREETING: &str = "Hello! I'm your AI assistant. How can I help you today?";

const RESET_FAILURE: &str = "Error resetting chat. Please try again.";
const STATUS_FAILURE: &str = "Error checking available models. Please try again.";
const SWITCH_FAILURE: &str = "Error changing model. Please try again.";

/// The fresh system greeting that starts a reset conversation.
pub fn greeting_message() -> ChatMessage {
    ChatMessage::new(Origin::System, GREETING)
}

/// An assistant answer.
pub fn answer_message(text: String) -> ChatMessage {
    ChatMessage::new(Origin::Assistant, text)
}

/// An application-level error reported by the server for one exchange.
pub fn application_error_message(error: &str) -> ChatMessage {
    ChatMessage::new(Origin::Assistant, format!("Error: {error}"))
}

/// A synthesized assistant entry for a message that never got through.
pub fn send_failure_message(reason: &str) -> ChatMessage {
    ChatMessage::new(
        Origin::Assistant,
        format!("Sorry, there was an error processing your request: {reason}"),
    )
}

/// System notice for a failed availability check.
pub fn status_failure_message() -> ChatMessage {
    ChatMessage::new(Origin::System, STATUS_FAILURE)
}

/// System notice for a failed model switch.
pub fn switch_failure_message() -> ChatMessage {
    ChatMessage::new(Origin::System, SWITCH_FAILURE)
}

/// Standalone notice for a failed reset. Not a transcript entry; a failed
/// reset leaves the transcript untouched.
pub const fn reset_failure_text() -> &'static str {
    RESET_FAILURE
}

/// System confirmation after the server switched models.
pub fn switch_confirmation(current_model: &str) -> ChatMessage {
    ChatMessage::new(
        Origin::System,
        format!("Model switched to: {}", current_model.to_uppercase()),
    )
}

/// Multi-line availability summary: one marked line per provider, then the
/// active model in upper-case.
pub fn availability_summary(state: &SessionModelState) -> ChatMessage {
    ChatMessage::new(Origin::System, availability_text(state))
}

/// Plain text of the availability summary, shared with the one-shot
/// `convo models` command.
pub fn availability_text(state: &SessionModelState) -> String {
    let lines = [
        "Available AI models:".to_string(),
        provider_line(
            state.openai_available(),
            "OpenAI (GPT-4o)",
            "OpenAI (API key not configured)",
        ),
        provider_line(
            state.gemini_available(),
            "Google Gemini",
            "Google Gemini (API key not configured)",
        ),
        provider_line(
            state.fallback_available(),
            "NLTK (Rule-Based Fallback)",
            "NLTK (Rule-Based Fallback)",
        ),
        String::new(),
        format!("Current model: {}", state.selected_model().to_uppercase()),
    ];
    lines.join("\n")
}

fn provider_line(available: bool, available_label: &str, unavailable_label: &str) -> String {
    if available {
        format!("✓ {available_label}")
    } else {
        format!("✗ {unavailable_label}")
    }
}
