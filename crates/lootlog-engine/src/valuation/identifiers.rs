//! Builders for price-table identifiers.
//!
//! Every function here returns the exact key the market snapshot uses for an
//! item, so the formats must not drift.

use lootlog_data::models::{Influence, Item, Rarity};

use super::tables::{
    ABYSSAL_UNIQUES, AWAKENED_EXCEPTIONAL, DUAL_BASE_UNIQUES, EXCEPTIONAL_SUPPORTS, ICON_VARIANTS,
    MAP_SERIES, MAX_BASE_ITEM_LEVEL, MIN_BASE_ITEM_LEVEL, UNIDENTIFIED_VARIANTS, USES_REMAINING,
};
use super::ValuationError;
use crate::category::{equipment_base_in, strip_quality_prefixes, MAP_BASES, MAP_PREFIX_WORDS};

/// Key of a unique map: `"{name} T{tier} {type line}"`.
pub fn unique_map_identifier(item: &Item) -> String {
    format!("{} T{} {}", item.unique_name(), item.map_tier, item.type_line)
}

/// Key of a unique item other than a map.
///
/// Starts from the unique's name and appends, in order, the base type for
/// names shared across bases, an icon variant tag, a `" {N}L"` links suffix
/// for five or more links and an abyssal socket count.
///
/// # Example
///
/// ```
/// use lootlog_data::models::{Item, Rarity};
/// use lootlog_engine::valuation::identifiers::unique_identifier;
///
/// let mut item = Item::new("Vaal Regalia", Rarity::Unique);
/// item.name = "Shavronne's Wrappings".into();
/// item.sockets = vec!["BBBBBB".into()];
/// assert_eq!(unique_identifier(&item), "Shavronne's Wrappings 6L");
/// ```
pub fn unique_identifier(item: &Item) -> String {
    let name = item.unique_name();
    let mut id = name.to_string();

    if DUAL_BASE_UNIQUES.contains(&name) {
        id.push(' ');
        id.push_str(item.base_type());
    }

    if let Some(tag) = icon_variant(name, &item.icon) {
        id.push_str(&format!(" ({tag})"));
    }

    let links = item.largest_link();
    if links >= 5 {
        id.push_str(&format!(" {links}L"));
    }

    if ABYSSAL_UNIQUES.contains(&name) {
        id.push_str(&format!(" {} Abyssal", item.abyss_socket_count()));
    }

    id
}

fn icon_variant(name: &str, icon: &str) -> Option<&'static str> {
    ICON_VARIANTS
        .iter()
        .find(|(unique, _)| *unique == name)
        .and_then(|(_, variants)| variants.iter().find(|(fragment, _)| icon.contains(fragment)))
        .map(|&(_, tag)| tag)
}

/// Every key an unidentified unique could be priced under, when its variant
/// cannot be known until identified.
pub fn unidentified_candidates(item: &Item) -> Option<&'static [&'static str]> {
    if item.identified {
        return None;
    }
    let name = item.unique_name();
    UNIDENTIFIED_VARIANTS
        .iter()
        .find(|(unique, _)| *unique == name)
        .map(|&(_, candidates)| candidates)
}

/// Key of an Ivory Watchstone: `"Ivory Watchstone {n} uses"`.
pub fn watchstone_identifier(item: &Item) -> String {
    let uses = item
        .explicit_mods
        .iter()
        .chain(&item.implicit_mods)
        .filter(|m| m.contains(USES_REMAINING))
        .find_map(|m| m.split_whitespace().find_map(|word| word.parse::<u32>().ok()));

    match uses {
        Some(n) => format!("{} {n} uses", item.type_line),
        None => item.type_line.clone(),
    }
}

/// Resolves the map series from an icon URL.
///
/// # Errors
///
/// Returns [`ValuationError::UnknownMapSeries`] if no known marker is present.
pub fn map_series(icon: &str) -> Result<&'static str, ValuationError> {
    MAP_SERIES
        .iter()
        .find(|(fragment, _)| icon.contains(fragment))
        .map(|&(_, series)| series)
        .ok_or_else(|| ValuationError::UnknownMapSeries {
            icon: icon.to_string(),
        })
}

/// Key of a non-unique map: `"{base} T{tier} {series}"`.
///
/// # Errors
///
/// Returns [`ValuationError::UnknownMapSeries`] if the icon names no known
/// series.
pub fn map_identifier(item: &Item) -> Result<String, ValuationError> {
    let series = map_series(&item.icon)?;
    Ok(format!("{} T{} {series}", map_base_name(item), item.map_tier))
}

/// Base map name under the non-magic naming convention.
///
/// Identified magic maps lose their affixes. Blighted maps keep a single
/// `Blighted ` prefix.
pub fn map_base_name(item: &Item) -> String {
    let raw = if item.rarity == Rarity::Magic && item.identified {
        strip_map_affixes(item)
    } else {
        item.base_type()
    };

    let base = raw.strip_prefix("Blighted ").unwrap_or(raw);
    if item.blighted_map {
        format!("Blighted {base}")
    } else {
        base.to_string()
    }
}

fn strip_map_affixes(item: &Item) -> &str {
    if !item.base_type.is_empty() && item.base_type != item.type_line {
        return &item.base_type;
    }

    let type_line = item.type_line.as_str();
    if let Some(base) = MAP_BASES
        .iter()
        .filter(|base| type_line.contains(*base))
        .max_by_key(|base| base.len())
    {
        return base;
    }

    // Unknown base: drop the suffix after "Map", then leading affix words.
    let mut rest = match type_line.find(" Map") {
        Some(at) => &type_line[..at + " Map".len()],
        None => type_line,
    };
    while let Some((word, tail)) = rest.split_once(' ') {
        if !MAP_PREFIX_WORDS.contains(&word) {
            break;
        }
        rest = tail;
    }
    rest
}

/// Key of a skill gem.
///
/// The base name drops the `Superior ` prefix. Level and quality suffixes
/// follow the price table's thresholds, and corrupted gems are suffixed.
pub fn gem_identifier(item: &Item) -> String {
    let name = item.base_type();
    let name = name.strip_prefix("Superior ").unwrap_or(name);
    let level = item.gem_level;
    let quality = item.quality;

    let mut id = name.to_string();
    if EXCEPTIONAL_SUPPORTS.contains(&name) {
        if level >= 3 {
            id.push_str(&format!(" L{level}"));
        }
    } else if name == AWAKENED_EXCEPTIONAL {
        if level >= 5 {
            id.push_str(&format!(" L{level}"));
        }
        if quality >= 20 {
            id.push_str(&format!(" Q{quality}"));
        }
    } else {
        if level >= 20 {
            id.push_str(&format!(" L{level}"));
        }
        if quality >= 20 {
            id.push_str(&format!(" Q{quality}"));
        }
    }

    if item.corrupted {
        id.push_str(" corrupted");
    }
    id
}

/// Key of a base type: `"{base} {item level}"` with an influence suffix.
///
/// Returns `None` below item level 82. Levels above 86 are priced as 86.
pub fn base_type_identifier(item: &Item) -> Option<String> {
    if item.item_level < MIN_BASE_ITEM_LEVEL {
        return None;
    }

    let level = item.item_level.min(MAX_BASE_ITEM_LEVEL);
    let mut id = format!("{} {level}", equipment_base_name(item));
    if item.has_influence(Influence::Shaper) {
        id.push_str(" Shaper");
    } else if item.has_influence(Influence::Elder) {
        id.push_str(" Elder");
    }
    Some(id)
}

fn equipment_base_name(item: &Item) -> &str {
    if !item.base_type.is_empty() {
        return strip_quality_prefixes(&item.base_type);
    }
    let type_line = strip_quality_prefixes(&item.type_line);
    if item.rarity == Rarity::Magic && item.identified {
        if let Some((base, _)) = equipment_base_in(type_line) {
            return base;
        }
    }
    type_line
}
