//! Output formatting utilities for the lootlog CLI.
//!
//! This module provides functions for formatting data as tables or JSON.
//! It is organized into submodules by command:
//!
//! - [`diagnostics`] - Filter parse errors and warnings (check, filters save)
//! - [`matches`] - Filter match results (match)
//! - [`categories`] - Item categories (category)
//! - [`prices`] - Item values and run totals (price)
//! - [`rates`] - Stored price snapshots (rates)
//! - [`filters`] - Saved filter versions (filters)
//! - [`helpers`] - Common formatting utilities (truncation, chaos values, colours)

mod categories;
mod diagnostics;
mod filters;
pub mod helpers;
mod matches;
mod prices;
mod rates;

pub use categories::{format_categories_json, format_categories_table};
pub use diagnostics::{format_check_json, format_check_table};
pub use filters::{format_filters_json, format_filters_table, format_saved_filter};
pub use matches::{format_matches_json, format_matches_table};
pub use prices::{format_prices_json, format_prices_table};
pub use rates::{format_fetch_json, format_fetch_summary, format_rates_json, format_rates_table};
