//! Filter match output formatting.

use lootlog_engine::filter::Style;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::commands::items::display_name;
use crate::commands::matching::MatchRow;

use super::helpers::{format_rgba, header_line, truncate_str};

/// JSON output structure for the match command.
#[derive(Serialize)]
pub struct MatchesOutput<'a> {
    pub filter_version: &'a str,
    pub area_level: u32,
    pub items: Vec<MatchOutput>,
}

/// JSON output structure for one matched item.
#[derive(Serialize)]
pub struct MatchOutput {
    pub position: usize,
    pub name: String,
    pub shown: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,
}

/// Formats match results as JSON.
pub fn format_matches_json(
    version: &str,
    area_level: u32,
    rows: &[MatchRow<'_>],
) -> Result<String, serde_json::Error> {
    let items = rows
        .iter()
        .map(|row| MatchOutput {
            position: row.position,
            name: display_name(row.item),
            shown: row.is_shown(),
            rule: row.decision.as_ref().map(|d| d.rule),
            line: row.decision.as_ref().map(|d| d.line),
            style: row.decision.as_ref().map(|d| d.style),
        })
        .collect();

    serde_json::to_string_pretty(&MatchesOutput {
        filter_version: version,
        area_level,
        items,
    })
}

/// Formats match results as a table.
pub fn format_matches_table(rows: &[MatchRow<'_>], use_colors: bool) -> String {
    if rows.is_empty() {
        return "No items.\n".to_string();
    }

    let mut output = header_line(
        &format!("{:<4} {:<6} {:<6} {:<36} {}", "#", "Result", "Line", "Item", "Style"),
        use_colors,
    );

    for row in rows {
        let (result, line, style) = match &row.decision {
            Some(d) if d.shown => ("show", d.line.to_string(), format_style(&d.style)),
            Some(d) => ("hide", d.line.to_string(), format_style(&d.style)),
            None => ("-", "-".to_string(), String::new()),
        };
        let result_cell = format!("{result:<6}");
        let result_cell = match (use_colors, result) {
            (true, "show") => result_cell.green().to_string(),
            (true, _) => result_cell.dimmed().to_string(),
            (false, _) => result_cell,
        };

        output.push_str(&format!(
            "{:<4} {} {:<6} {:<36} {}\n",
            row.position + 1,
            result_cell,
            line,
            truncate_str(&display_name(row.item), 36),
            style
        ));
    }

    output
}

/// Renders the set parts of a style, e.g. `font=40 border=255,0,0,255`.
fn format_style(style: &Style) -> String {
    let mut parts = Vec::new();
    if let Some(size) = style.font_size {
        parts.push(format!("font={size}"));
    }
    if let Some(c) = &style.text {
        parts.push(format!("text={}", format_rgba(c)));
    }
    if let Some(c) = &style.border {
        parts.push(format!("border={}", format_rgba(c)));
    }
    if let Some(c) = &style.background {
        parts.push(format!("bg={}", format_rgba(c)));
    }
    parts.join(" ")
}
