use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::paths;
use crate::session::{SELECTABLE_MODELS, is_selectable};

/// Default settings in the `[convo]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConvoConfig {
    /// Chat server base URL.
    pub server: Option<String>,
    /// Model to select when a session starts.
    pub model: Option<String>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/convo/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Default settings.
    #[serde(default)]
    pub convo: ConvoConfig,
}

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// The chat server base URL.
    pub server: String,
    /// Model to select when a session starts, if any.
    pub model: Option<String>,
}

/// Options for resolving configuration.
///
/// Contains CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Server URL override.
    pub server: Option<String>,
    /// Startup model override.
    pub model: Option<String>,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// CLI options take precedence over config file values. The server URL is
/// required; the startup model is optional but must name a selectable model.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> Result<ResolvedConfig> {
    let server = options
        .server
        .as_ref()
        .or(config_file.convo.server.as_ref())
        .cloned()
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Missing required configuration: 'server'\n\n\
                 Please provide it via:\n  \
                 - CLI option: convo --server <url>\n  \
                 - Config file: Run 'convo configure' to set up configuration"
            )
        })?;

    let model = options
        .model
        .as_ref()
        .or(config_file.convo.model.as_ref())
        .cloned();

    if let Some(name) = &model
        && !is_selectable(name)
    {
        bail!(
            "Unknown model: '{name}'\n\n\
             Selectable models:\n  \
             - {}",
            SELECTABLE_MODELS.join("\n  - ")
        );
    }

    Ok(ResolvedConfig { server, model })
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/convo/config.toml`
    /// or `~/.config/convo/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile =
            toml::from_str(&contents).with_context(|| "Failed to parse config file")?;

        Ok(config_file)
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }

    pub fn load_or_default(&self) -> ConfigFile {
        self.load().unwrap_or_default()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_manager(temp_dir: &TempDir) -> ConfigManager {
        ConfigManager {
            config_path: temp_dir.path().join("config.toml"),
        }
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        let config = ConfigFile {
            convo: ConvoConfig {
                server: Some("http://localhost:5000".to_string()),
                model: Some("auto".to_string()),
            },
        };

        manager.save(&config).unwrap();
        let loaded = manager.load().unwrap();

        assert_eq!(
            loaded.convo.server,
            Some("http://localhost:5000".to_string())
        );
        assert_eq!(loaded.convo.model, Some("auto".to_string()));
    }

    #[test]
    fn test_load_nonexistent_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        let result = manager.load();
        assert!(result.is_err());
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        let config = manager.load_or_default();
        assert!(config.convo.server.is_none());
        assert!(config.convo.model.is_none());
    }

    #[test]
    fn test_empty_file_parses_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        fs::write(manager.config_path(), "").unwrap();

        let loaded = manager.load().unwrap();
        assert!(loaded.convo.server.is_none());
    }

    // resolve_config tests

    fn create_test_config() -> ConfigFile {
        ConfigFile {
            convo: ConvoConfig {
                server: Some("http://config.local:5000".to_string()),
                model: Some("gemini".to_string()),
            },
        }
    }

    #[test]
    fn test_resolve_config_with_cli_options() {
        let options = ResolveOptions {
            server: Some("http://cli.local:5000".to_string()),
            model: Some("openai".to_string()),
        };
        let config = create_test_config();

        let resolved = resolve_config(&options, &config).unwrap();

        assert_eq!(resolved.server, "http://cli.local:5000");
        assert_eq!(resolved.model, Some("openai".to_string()));
    }

    #[test]
    fn test_resolve_config_falls_back_to_file() {
        let options = ResolveOptions::default();
        let config = create_test_config();

        let resolved = resolve_config(&options, &config).unwrap();

        assert_eq!(resolved.server, "http://config.local:5000");
        assert_eq!(resolved.model, Some("gemini".to_string()));
    }

    #[test]
    fn test_resolve_config_missing_server() {
        let options = ResolveOptions::default();
        let config = ConfigFile::default();

        let result = resolve_config(&options, &config);

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("server"));
    }

    #[test]
    fn test_resolve_config_model_is_optional() {
        let options = ResolveOptions {
            server: Some("http://cli.local:5000".to_string()),
            model: None,
        };
        let config = ConfigFile {
            convo: ConvoConfig {
                server: None,
                model: None,
            },
        };

        let resolved = resolve_config(&options, &config).unwrap();

        assert!(resolved.model.is_none());
    }

    #[test]
    fn test_resolve_config_rejects_unknown_model() {
        let options = ResolveOptions {
            server: Some("http://cli.local:5000".to_string()),
            model: Some("gpt-4o".to_string()),
        };
        let config = ConfigFile::default();

        let result = resolve_config(&options, &config);

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown model"));
    }
}
