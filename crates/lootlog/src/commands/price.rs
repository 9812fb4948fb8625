//! Price command implementation.
//!
//! Values items against the stored snapshot in effect on a date.

use std::path::PathBuf;

use chrono::{NaiveDate, Utc};
use lootlog_engine::value_items;

use super::config::Config;
use super::items::load_items;
use super::{CommandContext, CommandError, Result};
use crate::output::{format_prices_json, format_prices_table};

/// Options for the price command.
#[derive(Debug)]
pub struct PriceOptions {
    /// Items file (`-` for stdin).
    pub items: PathBuf,
    /// Snapshot date (default: today).
    pub date: Option<NaiveDate>,
}

/// Executes the price command.
///
/// # Errors
///
/// Returns `CommandError::NoRates` if no stored snapshot is dated on or
/// before the requested date.
pub async fn execute(ctx: &CommandContext, opts: &PriceOptions, config: &Config) -> Result<()> {
    let date = opts.date.unwrap_or_else(|| Utc::now().date_naive());
    let history = config.rates_store()?.load_or_default_async().await?;
    let table = history
        .table_at(date)
        .ok_or(CommandError::NoRates { date })?;

    if ctx.verbose {
        eprintln!("Using snapshot of {}", table.date);
    }

    let items = load_items(&opts.items)?;
    let run = value_items(&items, table);

    if ctx.json_output {
        println!("{}", format_prices_json(&items, &run, table.date)?);
    } else if !ctx.quiet {
        print!("{}", format_prices_table(&items, &run, ctx.use_colors));
    }

    Ok(())
}
