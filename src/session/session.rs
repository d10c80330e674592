use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::state::{SELECTABLE_MODELS, SessionModelState, is_selectable};
use super::transcript::{ChatMessage, Origin, Transcript};
use super::{ui, view};
use crate::api::{ChatApiClient, ModelStatus, SendReply, SwitchReply};
use crate::ui::Spinner;

/// Configuration for a chat session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// The chat server base URL.
    pub server: String,
    /// Model to select right after the session starts.
    pub initial_model: Option<String>,
}

/// An interactive session against a chat server.
///
/// Owns the transcript and the model selection state, and translates
/// operator input into server calls. Requests are issued one at a time from
/// the prompt loop; no timeout is applied, so a hung server keeps the
/// spinner visible until the request settles.
pub struct ChatSession {
    config: SessionConfig,
    client: ChatApiClient,
    transcript: Transcript,
    model_state: SessionModelState,
}

impl ChatSession {
    /// Creates a new chat session with the given configuration.
    pub fn new(config: SessionConfig) -> Result<Self> {
        let client = ChatApiClient::new(&config.server)?;
        Ok(Self {
            config,
            client,
            transcript: Transcript::new(),
            model_state: SessionModelState::default(),
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header(&self.config);

        self.refresh_model_availability().await;
        if let Some(model) = self.config.initial_model.clone() {
            self.switch_model(&model).await;
        }

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_help_message("Type a message, /help for commands, Ctrl+C to quit")
                .prompt();

            match input {
                Ok(line) => match parse_input(&line) {
                    Input::Empty => {}
                    Input::Command(cmd) => {
                        if !self.handle_command(cmd).await {
                            break;
                        }
                    }
                    Input::Text(text) => {
                        self.submit_message(&text).await;
                    }
                },
                Err(
                    inquire::InquireError::OperationCanceled
                    | inquire::InquireError::OperationInterrupted,
                ) => {
                    println!(); // Clear line before goodbye message
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    async fn handle_command(&mut self, cmd: SlashCommand) -> bool {
        match cmd {
            SlashCommand::Models => {
                self.refresh_model_availability().await;
                true
            }
            SlashCommand::Model { name: Some(name) } => {
                self.switch_model(&name).await;
                true
            }
            SlashCommand::Model { name: None } => {
                println!("Usage: /model <name>");
                println!("Models: {}", SELECTABLE_MODELS.join(", "));
                true
            }
            SlashCommand::Reset => {
                self.reset_session().await;
                true
            }
            SlashCommand::Config => {
                ui::print_config(&self.config, &self.model_state);
                true
            }
            SlashCommand::Help => {
                ui::print_help();
                true
            }
            SlashCommand::Quit => false,
            SlashCommand::Unknown(cmd) => {
                ui::print_error(&format!("Unknown command: /{cmd}"));
                true
            }
        }
    }

    /// Delivers one operator message and renders the reply.
    ///
    /// Blank input is discarded silently: no transcript entry, no request.
    pub async fn submit_message(&mut self, raw: &str) {
        let Some(text) = submission_text(raw) else {
            return;
        };
        let text = text.to_string();
        self.transcript
            .append(ChatMessage::new(Origin::User, text.clone()));

        let spinner = Spinner::new("Thinking...");
        let result = self.client.send_message(&text).await;
        spinner.stop();

        let message = self.apply_send_result(result);
        ui::print_message(message);
    }

    /// Starts a fresh conversation.
    ///
    /// Only an HTTP failure keeps the transcript; the success body is not
    /// inspected for an application-level error field.
    pub async fn reset_session(&mut self) {
        let spinner = Spinner::new("Resetting conversation...");
        let result = self.client.reset().await;
        spinner.stop();

        match result {
            Ok(()) => {
                let message = self.apply_reset_success();
                ui::print_message(message);
            }
            Err(reason) => {
                crate::status!("Reset request failed: {reason:#}");
                ui::print_error(view::reset_failure_text());
            }
        }
    }

    /// Queries provider availability and renders the summary.
    pub async fn refresh_model_availability(&mut self) {
        let spinner = Spinner::new("Checking available models...");
        let result = self.client.model_status().await;
        spinner.stop();

        if let Err(reason) = &result {
            crate::status!("Model status request failed: {reason:#}");
        }
        let message = self.apply_status_result(result);
        ui::print_message(message);
    }

    /// Asks the server to switch models and renders the confirmation.
    pub async fn switch_model(&mut self, name: &str) {
        if !is_selectable(name) {
            ui::print_error(&format!(
                "Unknown model: {name}\nModels: {}",
                SELECTABLE_MODELS.join(", ")
            ));
            return;
        }

        let spinner = Spinner::new("Switching model...");
        let result = self.client.switch_model(name).await;
        spinner.stop();

        if let Err(reason) = &result {
            crate::status!("Model switch request failed: {reason:#}");
        }
        let message = self.apply_switch_result(result);
        ui::print_message(message);
    }

    fn apply_send_result(&mut self, result: Result<SendReply>) -> &ChatMessage {
        let message = match result {
            Ok(SendReply::Answer(text)) => view::answer_message(text),
            Ok(SendReply::Error(error)) => view::application_error_message(&error),
            Err(reason) => view::send_failure_message(&format!("{reason:#}")),
        };
        self.transcript.append(message)
    }

    fn apply_reset_success(&mut self) -> &ChatMessage {
        self.transcript.clear();
        self.transcript.append(view::greeting_message())
    }

    fn apply_status_result(&mut self, result: Result<ModelStatus>) -> &ChatMessage {
        match result {
            Ok(status) => {
                self.model_state.apply_status(&status);
                self.transcript
                    .append(view::availability_summary(&self.model_state))
            }
            Err(_) => self.transcript.append(view::status_failure_message()),
        }
    }

    fn apply_switch_result(&mut self, result: Result<SwitchReply>) -> &ChatMessage {
        match result {
            Ok(reply) => {
                // The confirmation names the server's value, not the request's
                self.model_state.confirm_switch(&reply);
                self.transcript
                    .append(view::switch_confirmation(self.model_state.selected_model()))
            }
            Err(_) => self.transcript.append(view::switch_failure_message()),
        }
    }
}

/// Trims the operator's input; `None` means nothing should be sent.
fn submission_text(raw: &str) -> Option<&str> {
    let text = raw.trim();
    if text.is_empty() { None } else { Some(text) }
}
