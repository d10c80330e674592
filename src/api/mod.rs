mod client;
mod types;

pub use client::ChatApiClient;
pub use types::{ModelStatus, SendReply, SwitchReply};
