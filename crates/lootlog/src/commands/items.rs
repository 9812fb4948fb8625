//! Loading item lists from files or stdin.
//!
//! Accepts a bare JSON array of items or an object with an `items` array,
//! which is the shape stash and inventory API responses come in. Item
//! fields may use either the facade names or the API names.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use lootlog_data::models::Item;
use serde::Deserialize;

use super::Result;

/// Path that selects stdin.
pub const STDIN_PATH: &str = "-";

#[derive(Deserialize)]
#[serde(untagged)]
enum ItemsDocument {
    List(Vec<Item>),
    Wrapped { items: Vec<Item> },
}

/// Reads items from `path`, or stdin if `path` is `-`.
///
/// # Errors
///
/// Returns an I/O error if the input cannot be read and a JSON error if it
/// is not an item list.
pub fn load_items(path: &Path) -> Result<Vec<Item>> {
    let text = if path.as_os_str() == STDIN_PATH {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        text
    } else {
        fs::read_to_string(path)?
    };

    let items = parse_items(&text)?;
    tracing::debug!(count = items.len(), source = %path.display(), "loaded items");
    Ok(items)
}

/// Parses an item list document.
pub fn parse_items(text: &str) -> serde_json::Result<Vec<Item>> {
    Ok(match serde_json::from_str(text)? {
        ItemsDocument::List(items) | ItemsDocument::Wrapped { items } => items,
    })
}

/// Name shown for an item: `"{name} {type_line}"` for named items.
pub fn display_name(item: &Item) -> String {
    if item.name.is_empty() {
        item.type_line.clone()
    } else {
        format!("{} {}", item.name, item.type_line)
    }
}
