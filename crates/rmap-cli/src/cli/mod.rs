use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `rmap` binary.
#[derive(Debug, Parser)]
#[command(name = "rmap", version, about = "rmap - skills roadmap and learning-time estimator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw (defaults to general.default_format)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Snapshot file (defaults to session.state_path)
    #[arg(long, global = true)]
    pub state: Option<PathBuf>,
}

impl Cli {
    /// Extract global flags, falling back to `default_format` when
    /// `--format` was not given.
    #[must_use]
    pub fn global_flags(&self, default_format: OutputFormat) -> GlobalFlags {
        GlobalFlags {
            format: self.format.unwrap_or(default_format),
            quiet: self.quiet,
            verbose: self.verbose,
            state: self.state.clone(),
        }
    }
}
