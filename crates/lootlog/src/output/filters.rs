//! Saved filter output formatting.

use chrono::{DateTime, Utc};
use lootlog_engine::SavedFilter;
use serde::Serialize;

use crate::commands::filters::SaveResult;

use super::helpers::{format_datetime, header_line, truncate_str};

/// JSON output structure for the filters list command.
#[derive(Serialize)]
pub struct FiltersListOutput<'a> {
    pub filters: Vec<FilterOutput<'a>>,
}

/// JSON output structure for one saved version.
#[derive(Serialize)]
pub struct FilterOutput<'a> {
    pub profile: &'a str,
    pub version: String,
    pub saved_at: DateTime<Utc>,
    pub lines: usize,
}

/// Formats saved versions as JSON.
pub fn format_filters_json(filters: &[&SavedFilter]) -> Result<String, serde_json::Error> {
    let filters = filters
        .iter()
        .map(|f| FilterOutput {
            profile: &f.profile,
            version: f.version(),
            saved_at: f.saved_at,
            lines: f.text.lines().count(),
        })
        .collect();

    serde_json::to_string_pretty(&FiltersListOutput { filters })
}

/// Formats saved versions as a table.
pub fn format_filters_table(filters: &[&SavedFilter], use_colors: bool) -> String {
    if filters.is_empty() {
        return "No saved filters.\n".to_string();
    }

    let mut output = header_line(
        &format!("{:<16} {:<15} {:<17} {:>6}", "Profile", "Version", "Saved", "Lines"),
        use_colors,
    );

    for filter in filters {
        output.push_str(&format!(
            "{:<16} {:<15} {:<17} {:>6}\n",
            truncate_str(&filter.profile, 16),
            filter.version(),
            format_datetime(filter.saved_at),
            filter.text.lines().count()
        ));
    }

    output
}

/// Formats a save result as JSON.
pub fn format_saved_filter(result: &SaveResult) -> Result<String, serde_json::Error> {
    let output = serde_json::json!({
        "status": "saved",
        "profile": result.profile,
        "version": result.version,
        "saved_at": result.saved_at,
        "rules": result.rules,
        "errors": result.errors,
    });
    serde_json::to_string_pretty(&output)
}
