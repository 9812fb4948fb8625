//! Item valuation against a dated price table.
//!
//! [`price`] classifies an item, builds the identifier the price table uses
//! for it and looks it up. A miss is worth 0. The only error is a map whose
//! icon names no known series, which means the naming tables are out of date
//! rather than that the map is worthless.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use lootlog_data::models::{Item, PriceTable, Rarity};
//! use lootlog_engine::valuation::price;
//!
//! let mut table = PriceTable::new(NaiveDate::from_ymd_opt(2021, 3, 1).unwrap());
//! table.insert("Currency", "Exalted Orb", 95.0);
//!
//! let mut exalts = Item::new("Exalted Orb", Rarity::Currency);
//! exalts.stack_size = 2;
//! assert_eq!(price(&exalts, &table).unwrap(), 190.0);
//!
//! let mut chaos = Item::new("Chaos Orb", Rarity::Currency);
//! chaos.stack_size = 7;
//! assert_eq!(price(&chaos, &table).unwrap(), 7.0);
//! ```

pub mod identifiers;
mod tables;

#[cfg(test)]
mod tests;

use lootlog_data::models::{Item, PriceTable, Rarity};
use serde::Serialize;
use thiserror::Error;

use crate::category::{
    classify, Classification, ACCESSORY_CATEGORIES, ARMOUR_CATEGORIES, CAPTURED_BEAST,
    DELIRIUM_ORB, ESSENCE, FLASKS, FOSSIL, HARVEST_SEED, HELMETS, INCUBATOR, MAPS, MAP_FRAGMENTS,
    OIL, RESONATOR, VIAL, WEAPON_CATEGORIES,
};
use identifiers::{
    base_type_identifier, gem_identifier, map_identifier, unidentified_candidates,
    unique_identifier, unique_map_identifier, watchstone_identifier,
};

/// The item every price is expressed in.
pub const PRICE_UNIT: &str = "Chaos Orb";

/// Structural valuation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValuationError {
    #[error("unrecognized map series in icon: {icon}")]
    UnknownMapSeries { icon: String },
}

/// A category bucket of the price table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PriceBucket {
    Currency,
    Fragment,
    Scarab,
    Oil,
    Incubator,
    Fossil,
    Resonator,
    Essence,
    DeliriumOrb,
    Vial,
    Seed,
    Watchstone,
    DivinationCard,
    Prophecy,
    SkillGem,
    BaseType,
    HelmetEnchant,
    Map,
    UniqueMap,
    UniqueJewel,
    UniqueFlask,
    UniqueWeapon,
    UniqueArmour,
    UniqueAccessory,
}

impl PriceBucket {
    /// Every bucket, in display order.
    pub const ALL: [PriceBucket; 24] = [
        PriceBucket::Currency,
        PriceBucket::Fragment,
        PriceBucket::Scarab,
        PriceBucket::Oil,
        PriceBucket::Incubator,
        PriceBucket::Fossil,
        PriceBucket::Resonator,
        PriceBucket::Essence,
        PriceBucket::DeliriumOrb,
        PriceBucket::Vial,
        PriceBucket::Seed,
        PriceBucket::Watchstone,
        PriceBucket::DivinationCard,
        PriceBucket::Prophecy,
        PriceBucket::SkillGem,
        PriceBucket::BaseType,
        PriceBucket::HelmetEnchant,
        PriceBucket::Map,
        PriceBucket::UniqueMap,
        PriceBucket::UniqueJewel,
        PriceBucket::UniqueFlask,
        PriceBucket::UniqueWeapon,
        PriceBucket::UniqueArmour,
        PriceBucket::UniqueAccessory,
    ];

    /// The category key in the price table.
    pub const fn key(self) -> &'static str {
        match self {
            PriceBucket::Currency => "Currency",
            PriceBucket::Fragment => "Fragment",
            PriceBucket::Scarab => "Scarab",
            PriceBucket::Oil => "Oil",
            PriceBucket::Incubator => "Incubator",
            PriceBucket::Fossil => "Fossil",
            PriceBucket::Resonator => "Resonator",
            PriceBucket::Essence => "Essence",
            PriceBucket::DeliriumOrb => "DeliriumOrb",
            PriceBucket::Vial => "Vial",
            PriceBucket::Seed => "Seed",
            PriceBucket::Watchstone => "Watchstone",
            PriceBucket::DivinationCard => "DivinationCard",
            PriceBucket::Prophecy => "Prophecy",
            PriceBucket::SkillGem => "SkillGem",
            PriceBucket::BaseType => "BaseType",
            PriceBucket::HelmetEnchant => "HelmetEnchant",
            PriceBucket::Map => "Map",
            PriceBucket::UniqueMap => "UniqueMap",
            PriceBucket::UniqueJewel => "UniqueJewel",
            PriceBucket::UniqueFlask => "UniqueFlask",
            PriceBucket::UniqueWeapon => "UniqueWeapon",
            PriceBucket::UniqueArmour => "UniqueArmour",
            PriceBucket::UniqueAccessory => "UniqueAccessory",
        }
    }

    /// Bucket of a unique item in the given category.
    pub fn for_unique(class: Classification) -> Option<Self> {
        let category = class.category;
        if class.is_jewel() {
            Some(PriceBucket::UniqueJewel)
        } else if category == FLASKS {
            Some(PriceBucket::UniqueFlask)
        } else if category == MAPS {
            Some(PriceBucket::UniqueMap)
        } else if WEAPON_CATEGORIES.contains(&category) {
            Some(PriceBucket::UniqueWeapon)
        } else if ARMOUR_CATEGORIES.contains(&category) {
            Some(PriceBucket::UniqueArmour)
        } else if ACCESSORY_CATEGORIES.contains(&category) {
            Some(PriceBucket::UniqueAccessory)
        } else {
            None
        }
    }

    /// Bucket of a stackable currency-like item in the given category.
    pub fn for_currency(category: Option<&str>) -> Self {
        match category {
            Some(OIL) => PriceBucket::Oil,
            Some(FOSSIL) => PriceBucket::Fossil,
            Some(RESONATOR) => PriceBucket::Resonator,
            Some(ESSENCE) => PriceBucket::Essence,
            Some(DELIRIUM_ORB) => PriceBucket::DeliriumOrb,
            Some(VIAL) => PriceBucket::Vial,
            Some(INCUBATOR) => PriceBucket::Incubator,
            Some(HARVEST_SEED) => PriceBucket::Seed,
            // Catalysts are listed with plain currency.
            _ => PriceBucket::Currency,
        }
    }
}

/// Prices one item in chaos.
///
/// # Errors
///
/// Returns [`ValuationError::UnknownMapSeries`] for a non-unique map whose
/// icon names no known series. Every other unpriceable item is worth 0.
pub fn price(item: &Item, table: &PriceTable) -> Result<f64, ValuationError> {
    let class = classify(item);
    let category = class.map(|c| c.category);
    let stack = f64::from(item.stack_size);
    let lookup = |bucket: PriceBucket, id: &str| table.value(bucket.key(), id);

    if item.rarity == Rarity::Quest || category == Some(CAPTURED_BEAST) {
        return Ok(0.0);
    }
    if item.type_line == PRICE_UNIT {
        return Ok(stack);
    }

    let is_helmet = category == Some(HELMETS);
    // Set only once a helmet's own value was looked up; enchants are
    // compared against it below.
    let mut helmet_base: Option<f64> = None;

    if matches!(item.rarity, Rarity::Unique | Rarity::Relic) {
        if category == Some(MAPS) {
            return Ok(lookup(PriceBucket::UniqueMap, &unique_map_identifier(item)));
        }
        if let Some(value) = class.and_then(|c| unique_value(item, c, table)) {
            if !is_helmet {
                return Ok(value);
            }
            helmet_base = Some(value);
        }
    } else if item.type_line == "Ivory Watchstone" {
        return Ok(lookup(PriceBucket::Watchstone, &watchstone_identifier(item)));
    } else if category == Some(MAP_FRAGMENTS) {
        let bucket = match class.and_then(|c| c.subcategory) {
            Some("Scarab") => PriceBucket::Scarab,
            _ => PriceBucket::Fragment,
        };
        return Ok(lookup(bucket, &item.type_line) * stack);
    } else if item.rarity == Rarity::Currency || matches!(category, Some(INCUBATOR | HARVEST_SEED)) {
        let bucket = PriceBucket::for_currency(category);
        return Ok(lookup(bucket, &item.type_line) * stack);
    } else if category == Some(MAPS) {
        return map_identifier(item).map(|id| lookup(PriceBucket::Map, &id));
    } else if item.rarity == Rarity::DivinationCard {
        return Ok(lookup(PriceBucket::DivinationCard, &item.type_line) * stack);
    } else if item.rarity == Rarity::Prophecy {
        return Ok(lookup(PriceBucket::Prophecy, &item.type_line));
    } else if class.is_some_and(|c| c.is_gem()) {
        return Ok(lookup(PriceBucket::SkillGem, &gem_identifier(item)));
    } else if item.rarity.is_classic() && class.is_some_and(|c| c.is_equipment()) {
        match base_type_identifier(item) {
            Some(id) => {
                let value = lookup(PriceBucket::BaseType, &id);
                if !is_helmet {
                    return Ok(value);
                }
                helmet_base = Some(value);
            }
            None if !is_helmet => return Ok(0.0),
            // Below the priced item levels a helmet base is worth nothing,
            // but its enchant still counts.
            None => helmet_base = Some(0.0),
        }
    } else if item.rarity.is_classic() && class.is_some_and(|c| c.category == FLASKS || c.is_jewel()) {
        return Ok(0.0);
    }

    if is_helmet {
        let enchant = item
            .enchant_mods
            .iter()
            .map(|m| lookup(PriceBucket::HelmetEnchant, m))
            .fold(0.0, f64::max);
        if let Some(base) = helmet_base {
            return Ok(base.max(enchant));
        }
    }

    tracing::warn!(
        type_line = %item.type_line,
        name = %item.name,
        rarity = item.rarity.name(),
        category = category.unwrap_or("unknown"),
        "unable to value item"
    );
    Ok(0.0)
}

fn unique_value(item: &Item, class: Classification, table: &PriceTable) -> Option<f64> {
    let bucket = PriceBucket::for_unique(class)?.key();

    if let Some(candidates) = unidentified_candidates(item) {
        let (min, max) = candidates
            .iter()
            .map(|id| table.value(bucket, id))
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
        return Some((min + max) / 2.0);
    }

    Some(table.value(bucket, &unique_identifier(item)))
}

/// Values of a batch of items.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunValue {
    /// Value of each item, in input order.
    pub values: Vec<f64>,

    /// Sum of `values`.
    pub total: f64,

    /// Items that failed structurally and were counted as 0.
    pub failures: usize,
}

/// Prices every item in `items`.
///
/// Structural failures are logged and counted as 0 so one odd item never
/// hides the rest of a run.
pub fn value_items<'a, I>(items: I, table: &PriceTable) -> RunValue
where
    I: IntoIterator<Item = &'a Item>,
{
    let mut run = RunValue::default();
    for item in items {
        let value = match price(item, table) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, type_line = %item.type_line, "valuation failed");
                run.failures += 1;
                0.0
            }
        };
        run.total += value;
        run.values.push(value);
    }
    run
}
