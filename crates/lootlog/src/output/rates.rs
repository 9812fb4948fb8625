//! Price snapshot output formatting.

use chrono::NaiveDate;
use lootlog_data::models::PriceTable;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::commands::rates::FetchResult;

use super::helpers::header_line;

/// JSON output structure for the rates list command.
#[derive(Serialize)]
pub struct RatesListOutput {
    pub snapshots: Vec<SnapshotOutput>,
}

/// JSON output structure for one stored snapshot.
#[derive(Serialize)]
pub struct SnapshotOutput {
    pub date: NaiveDate,
    pub categories: usize,
    pub entries: usize,
}

/// Formats stored snapshots as JSON.
pub fn format_rates_json(tables: &[&PriceTable]) -> Result<String, serde_json::Error> {
    let snapshots = tables
        .iter()
        .map(|t| SnapshotOutput {
            date: t.date,
            categories: t.categories.len(),
            entries: t.len(),
        })
        .collect();

    serde_json::to_string_pretty(&RatesListOutput { snapshots })
}

/// Formats stored snapshots as a table.
pub fn format_rates_table(tables: &[&PriceTable], use_colors: bool) -> String {
    if tables.is_empty() {
        return "No snapshots stored.\n".to_string();
    }

    let mut output = header_line(
        &format!("{:<12} {:>10} {:>8}", "Date", "Categories", "Entries"),
        use_colors,
    );
    for table in tables {
        output.push_str(&format!(
            "{:<12} {:>10} {:>8}\n",
            table.date.to_string(),
            table.categories.len(),
            table.len()
        ));
    }
    output
}

/// Formats a fetch result as JSON.
pub fn format_fetch_json(result: &FetchResult) -> Result<String, serde_json::Error> {
    let output = serde_json::json!({
        "status": if result.replaced { "replaced" } else { "added" },
        "league": result.league,
        "date": result.date,
        "categories": result.categories,
        "entries": result.entries,
    });
    serde_json::to_string_pretty(&output)
}

/// Formats a fetch result as one line.
pub fn format_fetch_summary(result: &FetchResult, use_colors: bool) -> String {
    let verb = if result.replaced { "Replaced" } else { "Stored" };
    let verb = if use_colors {
        verb.green().to_string()
    } else {
        verb.to_string()
    };
    format!(
        "{} {} snapshot for {} ({} entries in {} categories)",
        verb, result.league, result.date, result.entries, result.categories
    )
}
