//! Command implementations for the lootlog CLI.
//!
//! This module contains the actual command handlers that are invoked by the CLI.

pub mod category;
pub mod check;
pub mod completions;
pub mod config;
pub mod filters;
pub mod items;
pub mod matching;
pub mod price;
pub mod rates;

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::cli::Cli;
use config::Config;

/// Error type for command execution.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Saved filter or price history store error.
    #[error("storage error: {0}")]
    Store(#[from] lootlog_engine::StoreError),

    /// Filter matching error.
    #[error("filter error: {0}")]
    Filter(#[from] lootlog_engine::FilterError),

    /// A filter document has parse errors.
    #[error("{} has {errors} error(s)", .path.display())]
    InvalidFilter { path: PathBuf, errors: usize },

    /// No filter version is in effect for a profile.
    #[error("no saved filter for profile '{profile}' (use 'lootlog filters save')")]
    NoFilter { profile: String },

    /// Snapshot service error.
    #[error("rates error: {0}")]
    Rates(#[from] lootlog_data::error::Error),

    /// No stored snapshot applies to a date.
    #[error("no price snapshot on or before {date} (use 'lootlog rates fetch')")]
    NoRates { date: NaiveDate },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for command execution.
pub type Result<T> = std::result::Result<T, CommandError>;

/// Context for command execution, containing common dependencies.
pub struct CommandContext {
    /// Whether to output JSON.
    pub json_output: bool,
    /// Whether to use colors.
    pub use_colors: bool,
    /// Whether to be quiet (errors only).
    pub quiet: bool,
    /// Whether to be verbose.
    pub verbose: bool,
}

impl CommandContext {
    /// Creates a new command context from CLI arguments.
    ///
    /// Colors are off if `--no-color` is given, `NO_COLOR` is set, or the
    /// config disables them.
    pub fn from_cli(cli: &Cli, config: Option<&Config>) -> Self {
        let config_color = config.and_then(|c| c.output.color).unwrap_or(true);
        let no_color_env = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());

        Self {
            json_output: cli.json,
            use_colors: !cli.no_color && !no_color_env && config_color,
            quiet: cli.quiet,
            verbose: cli.verbose,
        }
    }
}
