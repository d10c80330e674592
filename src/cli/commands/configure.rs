//! Configure command handler for editing default settings.

use anyhow::{Result, bail};
use inquire::{InquireError, Select, Text};

use crate::config::{ConfigFile, ConfigManager, ConvoConfig};
use crate::session::SELECTABLE_MODELS;
use crate::ui::Style;

const NO_MODEL: &str = "(none)";

/// Runs the configure command to edit default settings.
///
/// Allows the user to interactively set the server URL and the model
/// selected at session start. Cancelling a prompt (Ctrl+C or Escape)
/// leaves the config untouched and exits cleanly.
pub fn run_configure() -> Result<()> {
    match run_configure_inner() {
        Err(e)
            if matches!(
                e.downcast_ref::<InquireError>(),
                Some(InquireError::OperationCanceled | InquireError::OperationInterrupted)
            ) =>
        {
            println!(); // Clear line after the abandoned prompt
            Ok(())
        }
        result => result,
    }
}

fn run_configure_inner() -> Result<()> {
    let manager = ConfigManager::new()?;
    let mut config = manager.load_or_default();

    print_current_defaults(&config);

    let server = prompt_server(config.convo.server.as_deref())?;
    let model = select_model(config.convo.model.as_deref())?;

    config.convo = ConvoConfig {
        server: Some(server),
        model,
    };

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display().to_string())
    );

    Ok(())
}

fn print_current_defaults(config: &ConfigFile) {
    println!("{}", Style::header("Current defaults"));
    println!(
        "  {}  {}",
        Style::label("server"),
        config
            .convo
            .server
            .as_deref()
            .map_or_else(|| Style::secondary("(not set)"), Style::value)
    );
    println!(
        "  {}   {}",
        Style::label("model"),
        config
            .convo
            .model
            .as_deref()
            .map_or_else(|| Style::secondary("(not set)"), Style::value)
    );
    println!();
}

fn prompt_server(default: Option<&str>) -> Result<String> {
    let mut prompt = Text::new("Chat server URL:")
        .with_help_message("Base URL of the chat server, e.g. http://localhost:5000");

    if let Some(d) = default {
        prompt = prompt.with_default(d);
    }

    let server = prompt.prompt()?;

    if server.trim().is_empty() {
        bail!("Server URL cannot be empty");
    }

    Ok(server.trim().to_string())
}

fn select_model(default: Option<&str>) -> Result<Option<String>> {
    let mut options: Vec<String> = vec![NO_MODEL.to_string()];
    options.extend(SELECTABLE_MODELS.iter().map(|m| (*m).to_string()));

    let default_index = default
        .and_then(|d| SELECTABLE_MODELS.iter().position(|m| *m == d))
        .map_or(0, |idx| idx + 1); // +1 for "(none)"

    let selection = Select::new("Model at session start:", options)
        .with_starting_cursor(default_index)
        .prompt()?;

    if selection == NO_MODEL {
        Ok(None)
    } else {
        Ok(Some(selection))
    }
}
