use anyhow::{Context, Result};
use reqwest::{Client, Response};
use serde::Serialize;

use super::types::{ErrorBody, ModelStatus, RawSendReply, SendReply, SwitchReply};

// Borrowed structs to avoid cloning strings that only live for serialization
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    message: &'a str,
}

#[derive(Debug, Serialize)]
struct SwitchRequest<'a> {
    model: &'a str,
}

/// HTTP client for the chat server's four endpoints.
///
/// The server keys conversation history off a session cookie, so a single
/// client (and its cookie jar) must live for the whole session.
pub struct ChatApiClient {
    client: Client,
    base_url: String,
}

impl ChatApiClient {
    /// Creates a client for the given server base URL.
    pub fn new(server: &str) -> Result<Self> {
        let client = Client::builder()
            .cookie_store(true)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: server.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Queries the current model and provider availability (`GET /model`).
    pub async fn model_status(&self) -> Result<ModelStatus> {
        let url = self.url("/model");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to connect to chat server: {url}"))?;

        let response = expect_success(response).await?;

        response
            .json::<ModelStatus>()
            .await
            .context("Failed to parse model status reply")
    }

    /// Delivers one chat message (`POST /chat`).
    ///
    /// An `Ok` result means the exchange reached the server; the reply still
    /// distinguishes an answer from an application-level error.
    pub async fn send_message(&self, message: &str) -> Result<SendReply> {
        let url = self.url("/chat");
        let response = self
            .client
            .post(&url)
            .json(&SendRequest { message })
            .send()
            .await
            .with_context(|| format!("Failed to connect to chat server: {url}"))?;

        let response = expect_success(response).await?;

        let raw = response
            .json::<RawSendReply>()
            .await
            .context("Failed to parse chat reply")?;

        raw.into_reply()
    }

    /// Starts a fresh conversation on the server (`POST /reset`).
    ///
    /// The reply body is ignored beyond HTTP success.
    pub async fn reset(&self) -> Result<()> {
        let url = self.url("/reset");
        let response = self
            .client
            .post(&url)
            .send()
            .await
            .with_context(|| format!("Failed to connect to chat server: {url}"))?;

        expect_success(response).await?;
        Ok(())
    }

    /// Asks the server to route messages to a different model (`POST /model`).
    pub async fn switch_model(&self, model: &str) -> Result<SwitchReply> {
        let url = self.url("/model");
        let response = self
            .client
            .post(&url)
            .json(&SwitchRequest { model })
            .send()
            .await
            .with_context(|| format!("Failed to connect to chat server: {url}"))?;

        let response = expect_success(response).await?;

        response
            .json::<SwitchReply>()
            .await
            .context("Failed to parse model switch reply")
    }
}

/// Turns a non-success status into an error carrying the server's reason.
async fn expect_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();

    // The server reports failures as {"error": "..."} bodies
    match serde_json::from_str::<ErrorBody>(&body) {
        Ok(parsed) => anyhow::bail!("Server request failed with status {status}: {}", parsed.error),
        Err(_) => anyhow::bail!("Server request failed with status {status}: {body}"),
    }
}
