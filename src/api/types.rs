use anyhow::{Result, bail};
use serde::Deserialize;

/// Model availability as reported by the server's `GET /model` endpoint.
///
/// Unknown fields (such as the server's `available_models` list) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ModelStatus {
    /// The model the server is currently routing messages to.
    pub current_model: String,
    /// Whether the OpenAI provider is configured on the server.
    #[serde(default)]
    pub openai_available: bool,
    /// Whether the Gemini provider is configured on the server.
    #[serde(default)]
    pub gemini_available: bool,
    /// Whether the rule-based fallback is installed on the server.
    #[serde(default)]
    pub nltk_available: bool,
}

/// Outcome of a successfully delivered chat message.
///
/// The server answers `POST /chat` with HTTP success in both cases; an
/// `error` field signals an application-level failure for this one exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendReply {
    /// The assistant's answer text.
    Answer(String),
    /// An application-level error reported by the server.
    Error(String),
}

/// Raw wire shape of a `POST /chat` reply body.
#[derive(Debug, Deserialize)]
pub(crate) struct RawSendReply {
    response: Option<String>,
    error: Option<String>,
}

impl RawSendReply {
    /// Interprets the reply body. An `error` field wins over `response`;
    /// a body carrying neither is a protocol violation.
    pub(crate) fn into_reply(self) -> Result<SendReply> {
        if let Some(error) = self.error {
            return Ok(SendReply::Error(error));
        }
        match self.response {
            Some(response) => Ok(SendReply::Answer(response)),
            None => bail!("Chat reply carried neither a response nor an error field"),
        }
    }
}

/// Confirmation from the server's `POST /model` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SwitchReply {
    /// The model the server actually selected.
    pub current_model: String,
}

/// Error body the server attaches to non-success statuses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub(crate) error: String,
}
