//! Global CLI options shared across all commands

use crate::cli::{Cli, OutputFormat};
use crate::config::Config;

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// CLI flag > environment variable > config file > default. This struct
/// captures the CLI/env layer; config file values are resolved against it in
/// `CommandContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format override
    pub format: Option<OutputFormat>,

    /// Custom config file path (defaults to ~/.nutriview/config.yaml)
    pub config: Option<String>,

    /// API base URL override
    pub api_url: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            api_url: cli.api_url.clone(),
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Get API URL override as `Option<&str>`.
    pub fn api_url_ref(&self) -> Option<&str> {
        self.api_url.as_deref()
    }

    /// Output format after applying the config preference
    pub fn resolve_format(&self, config: &Config) -> OutputFormat {
        self.format
            .or_else(|| {
                config
                    .preferences
                    .format
                    .as_deref()
                    .and_then(OutputFormat::from_preference)
            })
            .unwrap_or_default()
    }
}
