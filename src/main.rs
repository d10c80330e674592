use anyhow::Result;
use clap::Parser;

use convo_cli::cli::commands::{chat, configure, models};
use convo_cli::cli::{Args, Command};
use convo_cli::output::{self, OutputConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    output::init(OutputConfig {
        quiet: args.quiet,
        no_color: args.no_color || std::env::var("NO_COLOR").is_ok(),
    });

    match args.command {
        Some(Command::Models { server }) => {
            models::run_models(models::ModelsOptions { server }).await?;
        }
        Some(Command::Configure) => {
            configure::run_configure()?;
        }
        Some(Command::Chat { server, model }) => {
            let options = chat::ChatOptions { server, model };
            chat::run_chat(options).await?;
        }
        None => {
            let options = chat::ChatOptions {
                server: args.server,
                model: args.model,
            };
            chat::run_chat(options).await?;
        }
    }

    Ok(())
}
