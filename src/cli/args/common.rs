//! Common CLI types shared across commands

use clap::ValueEnum;

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty format - human-optimized rich formatting (default)
    #[default]
    Pretty,
    /// Table format - one row per entry
    Table,
    /// JSON format - structured for scripts
    Json,
}

impl OutputFormat {
    /// Parse a format stored in the config file. Unknown names are ignored.
    pub fn from_preference(name: &str) -> Option<Self> {
        Self::from_str(name.trim(), true).ok()
    }
}
