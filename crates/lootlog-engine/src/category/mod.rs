//! Item category resolution.
//!
//! [`classify`] walks a fixed decision chain and stops at the first step that
//! recognises the item:
//!
//! 1. type-line markers (heist contracts and blueprints),
//! 2. exact "other base types" (fragments, splinters, watchstones),
//! 3. rarity-driven cases (gems, cards, quest items, prophecies, souls,
//!    seeds, trinkets, currency kinds),
//! 4. name and icon heuristics (scarabs, maps, incubators, beasts),
//! 5. equipment base types, exact first and then by substring.
//!
//! Anything left is unknown. That is an expected outcome; it is logged at
//! debug level and `None` is returned.
//!
//! # Example
//!
//! ```
//! use lootlog_data::models::{Item, Rarity};
//! use lootlog_engine::category::{self, resolve_category};
//!
//! let scarab = Item::new("Gilded Ambush Scarab", Rarity::Normal);
//! assert_eq!(resolve_category(&scarab, false), Some(category::MAP_FRAGMENTS));
//! assert_eq!(resolve_category(&scarab, true), Some("Scarab"));
//! ```

mod tables;

#[cfg(test)]
mod tests;

use lootlog_data::models::{Item, Rarity};
use serde::Serialize;

pub use names::*;

use tables::{
    CURRENCY_PREFIXES, CURRENCY_SUFFIXES, EQUIPMENT_BASE_TYPES, ESSENCE_MARKER, GEM_BASE_TYPES,
    OTHER_BASE_TYPES, QUALITY_PREFIXES, SEED_KINDS, SEED_TIERS, TYPE_MARKERS,
};

pub(crate) use tables::{MAP_BASES, MAP_PREFIX_WORDS};

/// Category names produced by the resolver.
pub mod names {
    pub const CURRENCY: &str = "Currency";
    pub const OIL: &str = "Oil";
    pub const FOSSIL: &str = "Fossil";
    pub const RESONATOR: &str = "Resonator";
    pub const ESSENCE: &str = "Essence";
    pub const DELIRIUM_ORB: &str = "Delirium Orb";
    pub const CATALYST: &str = "Catalyst";
    pub const VIAL: &str = "Vial";
    pub const INCUBATOR: &str = "Incubator";
    pub const HARVEST_SEED: &str = "Harvest Seed";
    pub const WATCHSTONE: &str = "Watchstone";

    pub const MAP_FRAGMENTS: &str = "Map Fragments";
    pub const MAPS: &str = "Maps";
    pub const DIVINATION_CARD: &str = "Divination Card";
    pub const PROPHECY: &str = "Prophecy";
    pub const QUEST_ITEMS: &str = "Quest Items";
    pub const ACTIVE_GEMS: &str = "Active Skill Gems";
    pub const SUPPORT_GEMS: &str = "Support Skill Gems";
    pub const PANTHEON_SOUL: &str = "Pantheon Soul";
    pub const TRINKETS: &str = "Trinkets";
    pub const CAPTURED_BEAST: &str = "Captured Beast";
    pub const METAMORPH_SAMPLE: &str = "Metamorph Sample";
    pub const HARBINGER_PIECE: &str = "Harbinger Item Piece";
    pub const CONTRACT: &str = "Contract";
    pub const BLUEPRINT: &str = "Blueprint";

    pub const HELMETS: &str = "Helmets";
    pub const BODY_ARMOURS: &str = "Body Armours";
    pub const GLOVES: &str = "Gloves";
    pub const BOOTS: &str = "Boots";
    pub const SHIELDS: &str = "Shields";
    pub const QUIVERS: &str = "Quivers";
    pub const AMULETS: &str = "Amulets";
    pub const RINGS: &str = "Rings";
    pub const BELTS: &str = "Belts";
    pub const JEWEL: &str = "Jewel";
    pub const ABYSS_JEWEL: &str = "Abyss Jewel";
    pub const CLUSTER_JEWEL: &str = "Cluster Jewel";
    pub const FLASKS: &str = "Flasks";

    pub const BOWS: &str = "Bows";
    pub const CLAWS: &str = "Claws";
    pub const DAGGERS: &str = "Daggers";
    pub const RUNE_DAGGERS: &str = "Rune Daggers";
    pub const ONE_HAND_AXES: &str = "One Hand Axes";
    pub const ONE_HAND_MACES: &str = "One Hand Maces";
    pub const ONE_HAND_SWORDS: &str = "One Hand Swords";
    pub const THRUSTING_SWORDS: &str = "Thrusting One Hand Swords";
    pub const SCEPTRES: &str = "Sceptres";
    pub const STAVES: &str = "Staves";
    pub const WARSTAVES: &str = "Warstaves";
    pub const TWO_HAND_AXES: &str = "Two Hand Axes";
    pub const TWO_HAND_MACES: &str = "Two Hand Maces";
    pub const TWO_HAND_SWORDS: &str = "Two Hand Swords";
    pub const WANDS: &str = "Wands";
    pub const FISHING_RODS: &str = "Fishing Rods";
}

pub const ARMOUR_CATEGORIES: &[&str] = &[HELMETS, BODY_ARMOURS, GLOVES, BOOTS, SHIELDS, QUIVERS];

pub const ACCESSORY_CATEGORIES: &[&str] = &[AMULETS, RINGS, BELTS];

pub const JEWEL_CATEGORIES: &[&str] = &[JEWEL, ABYSS_JEWEL, CLUSTER_JEWEL];

pub const WEAPON_CATEGORIES: &[&str] = &[
    BOWS,
    CLAWS,
    DAGGERS,
    RUNE_DAGGERS,
    ONE_HAND_AXES,
    ONE_HAND_MACES,
    ONE_HAND_SWORDS,
    THRUSTING_SWORDS,
    SCEPTRES,
    STAVES,
    WARSTAVES,
    TWO_HAND_AXES,
    TWO_HAND_MACES,
    TWO_HAND_SWORDS,
    WANDS,
    FISHING_RODS,
];

/// A table value: a bare category or a category with a subcategory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryEntry {
    Single(&'static str),
    Pair(&'static str, &'static str),
}

impl From<CategoryEntry> for Classification {
    fn from(entry: CategoryEntry) -> Self {
        match entry {
            CategoryEntry::Single(category) => Classification::new(category),
            CategoryEntry::Pair(category, sub) => Classification::with_sub(category, sub),
        }
    }
}

/// The resolved category of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub category: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<&'static str>,
}

impl Classification {
    pub fn new(category: &'static str) -> Self {
        Self {
            category,
            subcategory: None,
        }
    }

    pub fn with_sub(category: &'static str, subcategory: &'static str) -> Self {
        Self {
            category,
            subcategory: Some(subcategory),
        }
    }

    /// Returns the subcategory when asked for and present, else the category.
    pub fn resolve(self, want_subcategory: bool) -> &'static str {
        match self.subcategory {
            Some(sub) if want_subcategory => sub,
            _ => self.category,
        }
    }

    /// Returns true for any equipment category priced by base type.
    pub fn is_equipment(&self) -> bool {
        ARMOUR_CATEGORIES.contains(&self.category)
            || ACCESSORY_CATEGORIES.contains(&self.category)
            || WEAPON_CATEGORIES.contains(&self.category)
    }

    pub fn is_jewel(&self) -> bool {
        JEWEL_CATEGORIES.contains(&self.category)
    }

    pub fn is_gem(&self) -> bool {
        self.category.contains("Skill Gems")
    }
}

/// Resolves an item to a category name.
///
/// With `want_subcategory`, returns the subcategory for items that have one.
pub fn resolve_category(item: &Item, want_subcategory: bool) -> Option<&'static str> {
    classify(item).map(|c| c.resolve(want_subcategory))
}

/// Resolves an item to its full classification.
pub fn classify(item: &Item) -> Option<Classification> {
    let type_line = item.type_line.as_str();
    let base = strip_quality_prefixes(item.base_type());

    if let Some(&(_, category)) = TYPE_MARKERS.iter().find(|(m, _)| type_line.contains(m)) {
        return Some(Classification::new(category));
    }

    if let Some(entry) = lookup(OTHER_BASE_TYPES, base) {
        return Some(entry.into());
    }

    if let Some(found) = by_rarity(item, base) {
        return Some(found);
    }

    if let Some(found) = by_heuristics(item, base) {
        return Some(found);
    }

    if let Some(category) = equipment_category(base).or_else(|| equipment_category(type_line)) {
        return Some(Classification::new(category));
    }

    tracing::debug!(
        type_line,
        base_type = %item.base_type,
        name = %item.name,
        rarity = item.rarity.name(),
        icon = %item.icon,
        "unresolved item category"
    );
    None
}

/// Looks up an equipment base, exact first, then the longest known base
/// contained in `name`.
pub fn equipment_category(name: &str) -> Option<&'static str> {
    let name = strip_quality_prefixes(name);
    if let Some(&(_, category)) = EQUIPMENT_BASE_TYPES.iter().find(|(b, _)| *b == name) {
        return Some(category);
    }
    equipment_base_in(name).map(|(_, category)| category)
}

/// Finds the longest equipment base type contained in `name`.
pub fn equipment_base_in(name: &str) -> Option<(&'static str, &'static str)> {
    EQUIPMENT_BASE_TYPES
        .iter()
        .filter(|(b, _)| name.contains(b))
        .max_by_key(|(b, _)| b.len())
        .copied()
}

/// Strips quality-type words from the front of a base name.
pub fn strip_quality_prefixes(name: &str) -> &str {
    let mut rest = name;
    while let Some(stripped) = QUALITY_PREFIXES
        .iter()
        .find_map(|prefix| rest.strip_prefix(prefix))
    {
        rest = stripped;
    }
    rest
}

fn lookup(table: &[(&str, CategoryEntry)], key: &str) -> Option<CategoryEntry> {
    table.iter().find(|(k, _)| *k == key).map(|&(_, entry)| entry)
}

fn by_rarity(item: &Item, base: &str) -> Option<Classification> {
    let type_line = item.type_line.as_str();

    match item.rarity {
        Rarity::Gem => return Some(classify_gem(base)),
        Rarity::DivinationCard => return Some(Classification::new(DIVINATION_CARD)),
        Rarity::Quest => return Some(Classification::new(QUEST_ITEMS)),
        Rarity::Prophecy => return Some(Classification::new(PROPHECY)),
        _ => {}
    }

    if type_line.starts_with("Captured Soul of ") {
        return Some(Classification::new(PANTHEON_SOUL));
    }
    if let Some(tier) = seed_tier(base) {
        return Some(Classification::with_sub(HARVEST_SEED, tier));
    }
    if item.item_class == "Labyrinth Trinket" || base.ends_with(" Trinket") {
        return Some(Classification::new(TRINKETS));
    }

    if item.rarity == Rarity::Currency {
        // Scarabs and incubators also carry the currency frame.
        return Some(
            by_stackable_base(base).unwrap_or_else(|| Classification::new(currency_kind(base))),
        );
    }
    None
}

fn classify_gem(base: &str) -> Classification {
    if let Some(entry) = lookup(GEM_BASE_TYPES, base) {
        return entry.into();
    }
    if base.ends_with(" Support") {
        if base.starts_with("Awakened ") {
            Classification::with_sub(SUPPORT_GEMS, "Awakened")
        } else {
            Classification::new(SUPPORT_GEMS)
        }
    } else if base.starts_with("Vaal ") {
        Classification::with_sub(ACTIVE_GEMS, "Vaal")
    } else {
        Classification::new(ACTIVE_GEMS)
    }
}

fn seed_tier(base: &str) -> Option<&'static str> {
    if !SEED_KINDS.iter().any(|kind| base.ends_with(kind)) {
        return None;
    }
    SEED_TIERS
        .iter()
        .find(|tier| base.strip_prefix(*tier).is_some_and(|rest| rest.starts_with(' ')))
        .copied()
}

fn currency_kind(base: &str) -> &'static str {
    if let Some(&(_, kind)) = CURRENCY_SUFFIXES.iter().find(|(s, _)| base.ends_with(s)) {
        return kind;
    }
    if let Some(&(_, kind)) = CURRENCY_PREFIXES.iter().find(|(p, _)| base.starts_with(p)) {
        return kind;
    }
    if base.contains(ESSENCE_MARKER) {
        return ESSENCE;
    }
    CURRENCY
}

fn by_stackable_base(base: &str) -> Option<Classification> {
    if base.ends_with(" Scarab") {
        Some(Classification::with_sub(MAP_FRAGMENTS, "Scarab"))
    } else if base.ends_with(" Incubator") {
        Some(Classification::new(INCUBATOR))
    } else {
        None
    }
}

fn by_heuristics(item: &Item, base: &str) -> Option<Classification> {
    let type_line = item.type_line.as_str();

    if let Some(found) = by_stackable_base(base) {
        return Some(found);
    }
    if item.map_tier > 0 || type_line.split(' ').any(|word| word == "Map") {
        return Some(Classification::new(MAPS));
    }
    if type_line.contains(" Piece of ") {
        return Some(Classification::new(HARBINGER_PIECE));
    }
    if item.icon.contains("BestiaryOrbFull") {
        return Some(Classification::new(CAPTURED_BEAST));
    }
    if item.icon.contains("Metamorphosis") {
        return Some(Classification::new(METAMORPH_SAMPLE));
    }
    None
}
