//! Rates command implementation.
//!
//! Fetches dated price snapshots into the local history and lists them.

use chrono::{NaiveDate, Utc};
use lootlog_data::client::RatesClient;

use super::config::Config;
use super::{CommandContext, Result};
use crate::output::{
    format_fetch_json, format_fetch_summary, format_rates_json, format_rates_table,
};

/// Outcome of a fetch, for output.
#[derive(Debug)]
pub struct FetchResult {
    /// League fetched.
    pub league: String,
    /// Snapshot date.
    pub date: NaiveDate,
    /// Number of categories in the snapshot.
    pub categories: usize,
    /// Number of priced identifiers in the snapshot.
    pub entries: usize,
    /// Whether a stored snapshot for the same date was replaced.
    pub replaced: bool,
}

/// Options for the rates fetch command.
#[derive(Debug, Default)]
pub struct RatesFetchOptions {
    /// League to fetch (default: from config).
    pub league: Option<String>,
    /// Snapshot date (default: today).
    pub date: Option<NaiveDate>,
}

/// Executes the rates fetch command.
///
/// A snapshot already stored for the same date is replaced.
///
/// # Errors
///
/// Returns an error if the service call fails or the history cannot be saved.
pub async fn execute_fetch(
    ctx: &CommandContext,
    opts: &RatesFetchOptions,
    config: &Config,
) -> Result<()> {
    let league = opts.league.as_deref().unwrap_or(config.league());
    let date = opts.date.unwrap_or_else(|| Utc::now().date_naive());
    let client = RatesClient::with_base_url(config.base_url());

    if ctx.verbose {
        eprintln!("Fetching {} rates for {} from {}...", league, date, client.base_url());
    }

    let table = client.fetch_rates(league, date).await?;

    let store = config.rates_store()?;
    let mut history = store.load_or_default_async().await?;
    tracing::debug!(%date, entries = table.len(), "storing snapshot");
    let result = FetchResult {
        league: league.to_string(),
        date,
        categories: table.categories.len(),
        entries: table.len(),
        replaced: history.get(date).is_some(),
    };
    history.insert(table);
    store.save_async(&history).await?;

    if ctx.json_output {
        println!("{}", format_fetch_json(&result)?);
    } else if !ctx.quiet {
        println!("{}", format_fetch_summary(&result, ctx.use_colors));
    }

    Ok(())
}

/// Executes the rates list command.
pub async fn execute_list(ctx: &CommandContext, config: &Config) -> Result<()> {
    let history = config.rates_store()?.load_or_default_async().await?;
    let tables: Vec<_> = history.iter().collect();

    if ctx.json_output {
        println!("{}", format_rates_json(&tables)?);
    } else if !ctx.quiet {
        print!("{}", format_rates_table(&tables, ctx.use_colors));
    }

    Ok(())
}
