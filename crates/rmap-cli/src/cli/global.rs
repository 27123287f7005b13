use std::path::PathBuf;

use clap::ValueEnum;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Raw,
}

impl OutputFormat {
    /// Parse a format name from configuration.
    pub fn from_config(value: &str) -> anyhow::Result<Self> {
        Self::from_str(value, true)
            .map_err(|error| anyhow::anyhow!("invalid general.default_format '{value}': {error}"))
    }
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub quiet: bool,
    pub verbose: bool,
    pub state: Option<PathBuf>,
}
