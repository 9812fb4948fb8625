//! Common helper functions for output formatting.

use chrono::{DateTime, Local, Utc};
use lootlog_engine::filter::Rgba;
use owo_colors::OwoColorize;

/// Truncates a string to a maximum number of characters.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        s.to_string()
    }
}

/// Formats a chaos value with two decimals, trimming trailing zeros.
pub fn format_chaos(value: f64) -> String {
    let rendered = format!("{value:.2}");
    rendered
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Formats a chaos value for a table cell, dimming zeros.
pub fn format_value_cell(value: f64, width: usize, use_colors: bool) -> String {
    let cell = format!("{:>width$}", format_chaos(value));
    if !use_colors {
        cell
    } else if value == 0.0 {
        cell.dimmed().to_string()
    } else {
        cell.yellow().to_string()
    }
}

/// Formats a colour as `r,g,b,a`.
pub fn format_rgba(color: &Rgba) -> String {
    format!("{},{},{},{}", color.r, color.g, color.b, color.a)
}

/// Formats a save time in local time.
pub fn format_datetime(datetime: DateTime<Utc>) -> String {
    datetime
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}

/// Renders a table header line.
pub fn header_line(header: &str, use_colors: bool) -> String {
    if use_colors {
        format!("{}\n", header.dimmed())
    } else {
        format!("{header}\n")
    }
}
