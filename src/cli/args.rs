use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "convo")]
#[command(about = "Terminal chat client for multi-model chatbot servers")]
#[command(version)]
pub struct Args {
    /// Chat server base URL (e.g., http://localhost:5000)
    #[arg(short = 's', long)]
    pub server: Option<String>,

    /// Model to select at session start (auto, openai, gemini, nltk)
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// Suppress non-essential output
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive chat session (the default when no subcommand is given)
    Chat {
        /// Chat server base URL (e.g., http://localhost:5000)
        #[arg(short = 's', long)]
        server: Option<String>,

        /// Model to select at session start (auto, openai, gemini, nltk)
        #[arg(short = 'm', long)]
        model: Option<String>,
    },
    /// Show which models the server has available
    Models {
        /// Chat server base URL (e.g., http://localhost:5000)
        #[arg(short = 's', long)]
        server: Option<String>,
    },
    /// Configure convo settings
    Configure,
}
