//! Model availability command handler.

use anyhow::Result;

use crate::api::ChatApiClient;
use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::session::{SessionModelState, view};
use crate::ui::Spinner;

pub struct ModelsOptions {
    pub server: Option<String>,
}

/// Prints the server's model availability summary to stdout.
pub async fn run_models(options: ModelsOptions) -> Result<()> {
    let manager = ConfigManager::new()?;
    let file_config = manager.load_or_default();

    let resolved = resolve_config(
        &ResolveOptions {
            server: options.server,
            model: None,
        },
        &file_config,
    )?;

    let client = ChatApiClient::new(&resolved.server)?;

    let spinner = Spinner::new("Checking available models...");
    let result = client.model_status().await;
    spinner.stop();

    let mut state = SessionModelState::default();
    state.apply_status(&result?);
    println!("{}", view::availability_text(&state));

    Ok(())
}
