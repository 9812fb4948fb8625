//! Command dispatch module for routing CLI commands to their handlers.
//!
//! Commands are split by what they need: standalone commands run on their
//! arguments alone, while configured commands need the loaded config for
//! store locations, defaults and the snapshot service.

use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, Utc};

use crate::cli::{Cli, Commands, ConfigCommands, FiltersCommands, RatesCommands, Shell};
use crate::commands::config::Config;
use crate::commands::{self, CommandContext, CommandError, Result};

/// Trait for commands that run without loading the config.
pub trait StandaloneCommand {
    /// Execute the command.
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// Trait for commands that need the loaded config.
#[allow(async_fn_in_trait)]
pub trait ConfiguredCommand {
    /// Execute the command with the provided config.
    async fn execute(&self, ctx: &CommandContext, config: &Config) -> Result<()>;
}

/// Commands that don't need the config.
pub enum StandaloneDispatch<'a> {
    Check { file: &'a PathBuf },
    Category { items: &'a PathBuf, sub: bool },
    Config(&'a Option<ConfigCommands>),
    Completions(&'a Shell),
    Help,
}

impl<'a> StandaloneDispatch<'a> {
    /// Try to create a standalone dispatch from the CLI command.
    /// Returns None if the command needs the config.
    pub fn try_from_cli(cli: &'a Cli) -> Option<Self> {
        match &cli.command {
            Some(Commands::Check { file }) => Some(Self::Check { file }),
            Some(Commands::Category { items, sub }) => Some(Self::Category { items, sub: *sub }),
            Some(Commands::Config { command }) => Some(Self::Config(command)),
            Some(Commands::Completions { shell }) => Some(Self::Completions(shell)),
            None => Some(Self::Help),
            _ => None,
        }
    }
}

impl StandaloneCommand for StandaloneDispatch<'_> {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Self::Check { file } => {
                let opts = commands::check::CheckOptions {
                    file: (*file).clone(),
                };
                commands::check::execute(ctx, &opts)
            }
            Self::Category { items, sub } => {
                let opts = commands::category::CategoryOptions {
                    items: (*items).clone(),
                    subcategories: *sub,
                };
                commands::category::execute(ctx, &opts)
            }
            Self::Config(command) => dispatch_config(ctx, command),
            Self::Completions(shell) => {
                commands::completions::execute(shell).map_err(CommandError::Io)
            }
            Self::Help => {
                if !ctx.quiet {
                    println!("lootlog - Loot filter checker and item valuation");
                    println!("Use --help for usage information");
                }
                Ok(())
            }
        }
    }
}

/// Dispatch config subcommands.
fn dispatch_config(ctx: &CommandContext, command: &Option<ConfigCommands>) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::execute_show(ctx),
        Some(ConfigCommands::Set { key, value }) => {
            let opts = commands::config::ConfigSetOptions {
                key: key.clone(),
                value: value.clone(),
            };
            commands::config::execute_set(ctx, &opts)
        }
        Some(ConfigCommands::Path) => commands::config::execute_path(ctx),
    }
}

/// Commands that need the config.
pub enum ConfiguredDispatch<'a> {
    Match {
        items: &'a PathBuf,
        area_level: u32,
        filter: &'a Option<PathBuf>,
        profile: &'a Option<String>,
        at: Option<DateTime<Utc>>,
        shown: bool,
    },
    Price {
        items: &'a PathBuf,
        date: Option<NaiveDate>,
    },
    Rates(&'a RatesCommands),
    Filters(&'a FiltersCommands),
}

impl<'a> ConfiguredDispatch<'a> {
    /// Create a configured dispatch from the CLI command.
    /// Returns None for standalone commands (use StandaloneDispatch first).
    pub fn from_cli(cli: &'a Cli) -> Option<Self> {
        match &cli.command {
            Some(Commands::Match {
                items,
                area_level,
                filter,
                profile,
                at,
                shown,
            }) => Some(Self::Match {
                items,
                area_level: *area_level,
                filter,
                profile,
                at: *at,
                shown: *shown,
            }),
            Some(Commands::Price { items, date }) => Some(Self::Price { items, date: *date }),
            Some(Commands::Rates { command }) => Some(Self::Rates(command)),
            Some(Commands::Filters { command }) => Some(Self::Filters(command)),
            _ => None,
        }
    }
}

impl ConfiguredCommand for ConfiguredDispatch<'_> {
    async fn execute(&self, ctx: &CommandContext, config: &Config) -> Result<()> {
        match self {
            Self::Match {
                items,
                area_level,
                filter,
                profile,
                at,
                shown,
            } => {
                let opts = commands::matching::MatchOptions {
                    items: (*items).clone(),
                    area_level: *area_level,
                    filter: (*filter).clone(),
                    profile: (*profile).clone(),
                    at: *at,
                    shown: *shown,
                };
                commands::matching::execute(ctx, &opts, config)
            }
            Self::Price { items, date } => {
                let opts = commands::price::PriceOptions {
                    items: (*items).clone(),
                    date: *date,
                };
                commands::price::execute(ctx, &opts, config).await
            }
            Self::Rates(command) => dispatch_rates(ctx, command, config).await,
            Self::Filters(command) => dispatch_filters(ctx, command, config),
        }
    }
}

/// Dispatch rates subcommands.
async fn dispatch_rates(ctx: &CommandContext, command: &RatesCommands, config: &Config) -> Result<()> {
    match command {
        RatesCommands::Fetch { league, date } => {
            let opts = commands::rates::RatesFetchOptions {
                league: league.clone(),
                date: *date,
            };
            commands::rates::execute_fetch(ctx, &opts, config).await
        }
        RatesCommands::List => commands::rates::execute_list(ctx, config).await,
    }
}

/// Dispatch filters subcommands.
fn dispatch_filters(ctx: &CommandContext, command: &FiltersCommands, config: &Config) -> Result<()> {
    match command {
        FiltersCommands::Save {
            file,
            profile,
            force,
        } => {
            let opts = commands::filters::FiltersSaveOptions {
                file: file.clone(),
                profile: profile.clone(),
                force: *force,
            };
            commands::filters::execute_save(ctx, &opts, config)
        }
        FiltersCommands::List { profile } => {
            let opts = commands::filters::FiltersListOptions {
                profile: profile.clone(),
            };
            commands::filters::execute_list(ctx, &opts, config)
        }
    }
}
