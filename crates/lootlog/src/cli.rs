//! CLI argument parsing using clap derive macros.
//!
//! This module defines the command-line interface for the lootlog CLI.

use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, Utc};
use clap::{Parser, Subcommand, ValueEnum};

/// lootlog - Loot filter checker and item valuation
#[derive(Parser, Debug)]
#[command(name = "lootlog")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output (show debug information)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Force JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile a filter document and report its diagnostics
    #[command(alias = "c")]
    Check {
        /// Filter document to check
        file: PathBuf,
    },

    /// Match items against a filter
    #[command(alias = "m")]
    Match {
        /// Items as a JSON array (`-` for stdin)
        items: PathBuf,

        /// Level of the area the items dropped in
        #[arg(short, long)]
        area_level: u32,

        /// Filter document to use instead of the saved archive
        #[arg(short, long, conflicts_with_all = ["profile", "at"])]
        filter: Option<PathBuf>,

        /// Saved filter profile (default: from config)
        #[arg(short, long)]
        profile: Option<String>,

        /// Use the filter in effect at this time (RFC 3339, default: now)
        #[arg(long)]
        at: Option<DateTime<Utc>>,

        /// Only list items the filter shows
        #[arg(long)]
        shown: bool,
    },

    /// Resolve item categories
    Category {
        /// Items as a JSON array (`-` for stdin)
        items: PathBuf,

        /// Report subcategories where known
        #[arg(short, long)]
        sub: bool,
    },

    /// Price items against stored rates
    #[command(alias = "p")]
    Price {
        /// Items as a JSON array (`-` for stdin)
        items: PathBuf,

        /// Use the snapshot in effect on this date (default: today)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// Manage price snapshots
    Rates {
        #[command(subcommand)]
        command: RatesCommands,
    },

    /// Manage saved filter versions
    Filters {
        #[command(subcommand)]
        command: FiltersCommands,
    },

    /// Manage CLI configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

/// Shell types for completions
#[derive(ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

/// Rates subcommands
#[derive(Subcommand, Debug)]
pub enum RatesCommands {
    /// Fetch a snapshot and add it to the history
    Fetch {
        /// League to fetch (default: from config)
        #[arg(short, long)]
        league: Option<String>,

        /// Snapshot date (default: today)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// List stored snapshots
    List,
}

/// Filters subcommands
#[derive(Subcommand, Debug)]
pub enum FiltersCommands {
    /// Save a new version of a filter document
    Save {
        /// Filter document to save
        file: PathBuf,

        /// Profile to save under (default: from config)
        #[arg(short, long)]
        profile: Option<String>,

        /// Save even if the document has errors
        #[arg(long)]
        force: bool,
    },

    /// List saved versions
    List {
        /// Only list this profile
        #[arg(short, long)]
        profile: Option<String>,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g. rates.league)
        key: String,

        /// Configuration value
        value: String,
    },

    /// Print config file path
    Path,
}
