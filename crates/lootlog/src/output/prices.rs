//! Valuation output formatting.

use chrono::NaiveDate;
use lootlog_data::models::Item;
use lootlog_engine::{RunValue, PRICE_UNIT};
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::commands::items::display_name;

use super::helpers::{format_value_cell, header_line, truncate_str};

/// JSON output structure for the price command.
#[derive(Serialize)]
pub struct PricesOutput {
    pub snapshot: NaiveDate,
    pub unit: &'static str,
    pub items: Vec<PriceOutput>,
    pub total: f64,
    pub failures: usize,
}

/// JSON output structure for one priced item.
#[derive(Serialize)]
pub struct PriceOutput {
    pub name: String,
    pub stack_size: u32,
    pub value: f64,
}

/// Formats item values as JSON.
pub fn format_prices_json(
    items: &[Item],
    run: &RunValue,
    snapshot: NaiveDate,
) -> Result<String, serde_json::Error> {
    let priced = items
        .iter()
        .zip(&run.values)
        .map(|(item, value)| PriceOutput {
            name: display_name(item),
            stack_size: item.stack_size,
            value: *value,
        })
        .collect();

    serde_json::to_string_pretty(&PricesOutput {
        snapshot,
        unit: PRICE_UNIT,
        items: priced,
        total: run.total,
        failures: run.failures,
    })
}

/// Formats item values as a table with a total line.
pub fn format_prices_table(items: &[Item], run: &RunValue, use_colors: bool) -> String {
    if items.is_empty() {
        return "No items.\n".to_string();
    }

    let mut output = header_line(&format!("{:<40} {:>6} {:>10}", "Item", "Stack", "Chaos"), use_colors);

    for (item, value) in items.iter().zip(&run.values) {
        output.push_str(&format!(
            "{:<40} {:>6} {}\n",
            truncate_str(&display_name(item), 40),
            item.stack_size,
            format_value_cell(*value, 10, use_colors)
        ));
    }

    let total = format!("{:<47} {}", "Total", format_value_cell(run.total, 10, false));
    if use_colors {
        output.push_str(&format!("{}\n", total.bold()));
    } else {
        output.push_str(&total);
        output.push('\n');
    }

    if run.failures > 0 {
        let note = format!("{} item(s) could not be priced", run.failures);
        if use_colors {
            output.push_str(&format!("{}\n", note.red()));
        } else {
            output.push_str(&note);
            output.push('\n');
        }
    }

    output
}
