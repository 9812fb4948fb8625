//! Category output formatting.

use lootlog_data::models::Item;
use lootlog_engine::Classification;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::commands::items::display_name;

use super::helpers::{header_line, truncate_str};

/// JSON output structure for the category command.
#[derive(Serialize)]
pub struct CategoriesOutput {
    pub items: Vec<CategoryOutput>,
}

/// JSON output structure for one item's category.
#[derive(Serialize)]
pub struct CategoryOutput {
    pub name: String,
    /// `null` when the item could not be classified.
    pub category: Option<&'static str>,
}

fn resolved(classification: Option<Classification>, subcategories: bool) -> Option<&'static str> {
    classification.map(|c| c.resolve(subcategories))
}

/// Formats categories as JSON.
pub fn format_categories_json(
    rows: &[(&Item, Option<Classification>)],
    subcategories: bool,
) -> Result<String, serde_json::Error> {
    let items = rows
        .iter()
        .map(|(item, classification)| CategoryOutput {
            name: display_name(item),
            category: resolved(*classification, subcategories),
        })
        .collect();

    serde_json::to_string_pretty(&CategoriesOutput { items })
}

/// Formats categories as a table.
pub fn format_categories_table(
    rows: &[(&Item, Option<Classification>)],
    subcategories: bool,
    use_colors: bool,
) -> String {
    if rows.is_empty() {
        return "No items.\n".to_string();
    }

    let mut output = header_line(&format!("{:<40} {}", "Item", "Category"), use_colors);

    for (item, classification) in rows {
        let category = match resolved(*classification, subcategories) {
            Some(category) => category.to_string(),
            None if use_colors => "unknown".red().to_string(),
            None => "unknown".to_string(),
        };
        output.push_str(&format!(
            "{:<40} {}\n",
            truncate_str(&display_name(item), 40),
            category
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use lootlog_data::models::Rarity;
    use lootlog_engine::classify;

    #[test]
    fn test_categories_table_marks_unknown() {
        let items = [
            Item::new("Exalted Orb", Rarity::Currency),
            Item::new("Unheard Of Thing", Rarity::Normal),
        ];
        let rows: Vec<_> = items.iter().map(|i| (i, classify(i))).collect();
        let table = format_categories_table(&rows, false, false);

        assert!(table.contains("Exalted Orb"));
        assert!(table.lines().nth(2).unwrap().ends_with("unknown"));
    }

    #[test]
    fn test_categories_json_uses_subcategory_on_request() {
        let mut scarab = Item::new("Gilded Ambush Scarab", Rarity::Normal);
        scarab.item_class = "Map Fragments".into();
        let rows = vec![(&scarab, classify(&scarab))];

        let plain: serde_json::Value =
            serde_json::from_str(&format_categories_json(&rows, false).unwrap()).unwrap();
        let sub: serde_json::Value =
            serde_json::from_str(&format_categories_json(&rows, true).unwrap()).unwrap();

        assert_eq!(plain["items"][0]["category"], "Map Fragments");
        assert_eq!(sub["items"][0]["category"], "Scarab");
    }
}
