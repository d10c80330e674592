//! Configuration file management.

mod manager;

pub use manager::{
    ConfigFile, ConfigManager, ConvoConfig, ResolveOptions, ResolvedConfig, resolve_config,
};
