//! Category command implementation.

use std::path::PathBuf;

use lootlog_data::models::Item;
use lootlog_engine::{classify, Classification};

use super::items::load_items;
use super::{CommandContext, Result};
use crate::output::{format_categories_json, format_categories_table};

/// Options for the category command.
#[derive(Debug)]
pub struct CategoryOptions {
    /// Items file (`-` for stdin).
    pub items: PathBuf,
    /// Report subcategories where known.
    pub subcategories: bool,
}

/// Executes the category command.
pub fn execute(ctx: &CommandContext, opts: &CategoryOptions) -> Result<()> {
    let items = load_items(&opts.items)?;
    let rows = classify_items(&items);

    if ctx.json_output {
        println!("{}", format_categories_json(&rows, opts.subcategories)?);
    } else if !ctx.quiet {
        print!(
            "{}",
            format_categories_table(&rows, opts.subcategories, ctx.use_colors)
        );
    }

    Ok(())
}

/// Pairs each item with its classification.
pub fn classify_items(items: &[Item]) -> Vec<(&Item, Option<Classification>)> {
    items.iter().map(|item| (item, classify(item))).collect()
}
