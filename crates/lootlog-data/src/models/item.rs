//! The canonical item facade consumed by the filter matcher, the category
//! resolver and the valuation resolver.
//!
//! Items reach the engine from several collaborators (inventory snapshots,
//! stash tabs, stored rows). All of them are normalized into [`Item`] here, at
//! the boundary, so nothing downstream branches on the shape that arrived.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Deserializer, Serialize};

use super::rarity::{Influence, Rarity};

/// Socket group string used for delve resonator sockets.
pub const DELVE_SOCKET_GROUP: &str = "DV";

/// Quality-type prefixes carried by alternate-quality base types.
pub const ALTERNATE_QUALITY_PREFIXES: [&str; 3] = ["Anomalous", "Divergent", "Phantasmal"];

/// A flattened view of a game item.
///
/// Field names follow the facade naming; the serde aliases accept the game
/// API names (`typeLine`, `frameType`, `ilvl`, ...) and the lower-cased
/// variants found in stored rows (`typeline`).
///
/// # Example
///
/// ```
/// use lootlog_data::models::{Item, Rarity};
///
/// let item: Item = serde_json::from_str(r#"{
///     "typeLine": "Chaos Orb",
///     "frameType": 5,
///     "stackSize": 7
/// }"#).unwrap();
///
/// assert_eq!(item.rarity, Rarity::Currency);
/// assert_eq!(item.stack_size, 7);
/// assert!(item.identified);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    /// Display name (empty for non-unique, unidentified items).
    pub name: String,

    /// Name of an unidentified unique, when known from another source.
    #[serde(alias = "secretName", skip_serializing_if = "Option::is_none")]
    pub secret_name: Option<String>,

    /// Full type line, which may include magic affixes.
    #[serde(alias = "typeLine", alias = "typeline")]
    pub type_line: String,

    /// Base type without affixes. Empty when the source did not provide it.
    #[serde(alias = "baseType", alias = "basetype")]
    pub base_type: String,

    /// Item class (category string) used by the `Class` filter.
    #[serde(alias = "itemClass", alias = "class")]
    pub item_class: String,

    /// Icon URL.
    pub icon: String,

    #[serde(alias = "frameType", alias = "frametype")]
    pub rarity: Rarity,

    #[serde(alias = "ilvl", alias = "itemLevel")]
    pub item_level: u32,

    #[serde(alias = "dropLevel")]
    pub drop_level: u32,

    pub quality: u32,

    #[serde(alias = "w")]
    pub width: u32,

    #[serde(alias = "h")]
    pub height: u32,

    pub identified: bool,
    pub corrupted: bool,
    pub mirrored: bool,
    pub replica: bool,
    pub fractured: bool,
    pub synthesised: bool,
    pub veiled: bool,

    /// Influences present on the item. Empty means "none".
    #[serde(deserialize_with = "deserialize_influences")]
    pub influences: BTreeSet<Influence>,

    #[serde(alias = "shapedMap")]
    pub shaped_map: bool,

    #[serde(alias = "elderMap")]
    pub elder_map: bool,

    #[serde(alias = "blightedMap")]
    pub blighted_map: bool,

    /// Map tier, 0 for non-maps.
    #[serde(alias = "mapTier")]
    pub map_tier: u32,

    /// Gem level, 0 for non-gems.
    #[serde(alias = "gemLevel")]
    pub gem_level: u32,

    #[serde(alias = "stackSize")]
    pub stack_size: u32,

    /// Linked socket groups, each a string of colour codes (`R`, `G`, `B`,
    /// `W`, `A`), with delve sockets as a separate `DV` group.
    #[serde(deserialize_with = "deserialize_sockets")]
    pub sockets: Vec<String>,

    #[serde(alias = "explicitMods")]
    pub explicit_mods: Vec<String>,

    #[serde(alias = "enchantMods")]
    pub enchant_mods: Vec<String>,

    #[serde(alias = "implicitMods")]
    pub implicit_mods: Vec<String>,
}

impl Default for Item {
    fn default() -> Self {
        Self {
            name: String::new(),
            secret_name: None,
            type_line: String::new(),
            base_type: String::new(),
            item_class: String::new(),
            icon: String::new(),
            rarity: Rarity::Normal,
            item_level: 0,
            drop_level: 0,
            quality: 0,
            width: 1,
            height: 1,
            identified: true,
            corrupted: false,
            mirrored: false,
            replica: false,
            fractured: false,
            synthesised: false,
            veiled: false,
            influences: BTreeSet::new(),
            shaped_map: false,
            elder_map: false,
            blighted_map: false,
            map_tier: 0,
            gem_level: 0,
            stack_size: 1,
            sockets: Vec::new(),
            explicit_mods: Vec::new(),
            enchant_mods: Vec::new(),
            implicit_mods: Vec::new(),
        }
    }
}

impl Item {
    /// Creates an item with the given type line and rarity; every other field
    /// takes its default.
    pub fn new(type_line: impl Into<String>, rarity: Rarity) -> Self {
        Self {
            type_line: type_line.into(),
            rarity,
            ..Self::default()
        }
    }

    /// Returns the base type, falling back to the type line when no separate
    /// base type was provided.
    pub fn base_type(&self) -> &str {
        if self.base_type.is_empty() {
            &self.type_line
        } else {
            &self.base_type
        }
    }

    /// Returns the name used to identify a unique: the display name, else the
    /// secret name of an unidentified unique, else the type line.
    pub fn unique_name(&self) -> &str {
        if !self.name.is_empty() {
            &self.name
        } else if let Some(secret) = self.secret_name.as_deref().filter(|s| !s.is_empty()) {
            secret
        } else {
            &self.type_line
        }
    }

    /// Returns true if the item carries the given influence.
    pub fn has_influence(&self, influence: Influence) -> bool {
        self.influences.contains(&influence)
    }

    /// Socket groups excluding delve sockets.
    pub fn linked_groups(&self) -> impl Iterator<Item = &str> {
        self.sockets
            .iter()
            .map(String::as_str)
            .filter(|g| *g != DELVE_SOCKET_GROUP)
    }

    /// Size of the largest linked socket group.
    pub fn largest_link(&self) -> usize {
        self.linked_groups().map(|g| g.chars().count()).max().unwrap_or(0)
    }

    /// Total number of non-delve sockets.
    pub fn socket_count(&self) -> usize {
        self.linked_groups().map(|g| g.chars().count()).sum()
    }

    /// Number of abyssal sockets.
    pub fn abyss_socket_count(&self) -> usize {
        self.linked_groups()
            .flat_map(str::chars)
            .filter(|c| *c == 'A')
            .count()
    }

    /// Returns the alternate-quality prefix of the base type, if any.
    pub fn alternate_quality(&self) -> Option<&'static str> {
        let base = self.base_type();
        ALTERNATE_QUALITY_PREFIXES
            .into_iter()
            .find(|prefix| base.starts_with(prefix))
    }
}

/// A socket entry as the game API reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSocket {
    /// Link group index.
    pub group: u32,
    /// Socket colour code (`R`, `G`, `B`, `W`, `A` or `DV`).
    #[serde(rename = "sColour", alias = "colour")]
    pub colour: String,
}

/// Converts the game API socket list into linked-group strings.
///
/// Groups keep their API order. Delve sockets are collected into a separate
/// trailing `DV` group regardless of the group index they report.
///
/// ```
/// use lootlog_data::models::{sockets_from_api, ApiSocket};
///
/// let sockets = vec![
///     ApiSocket { group: 0, colour: "R".into() },
///     ApiSocket { group: 0, colour: "G".into() },
///     ApiSocket { group: 1, colour: "B".into() },
/// ];
/// assert_eq!(sockets_from_api(&sockets), vec!["RG".to_string(), "B".to_string()]);
/// ```
pub fn sockets_from_api(sockets: &[ApiSocket]) -> Vec<String> {
    let mut groups: BTreeMap<u32, String> = BTreeMap::new();
    let mut delve = false;
    for socket in sockets {
        if socket.colour == DELVE_SOCKET_GROUP {
            delve = true;
            continue;
        }
        groups.entry(socket.group).or_default().push_str(&socket.colour);
    }
    let mut result: Vec<String> = groups.into_values().collect();
    if delve {
        result.push(DELVE_SOCKET_GROUP.to_string());
    }
    result
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SocketsRepr {
    Groups(Vec<String>),
    Api(Vec<ApiSocket>),
}

fn deserialize_sockets<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<SocketsRepr>::deserialize(deserializer)? {
        Some(SocketsRepr::Groups(groups)) => groups,
        Some(SocketsRepr::Api(sockets)) => sockets_from_api(&sockets),
        None => Vec::new(),
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum InfluencesRepr {
    List(Vec<Influence>),
    Flags(BTreeMap<Influence, bool>),
}

fn deserialize_influences<'de, D>(deserializer: D) -> Result<BTreeSet<Influence>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<InfluencesRepr>::deserialize(deserializer)? {
        Some(InfluencesRepr::List(list)) => list.into_iter().collect(),
        Some(InfluencesRepr::Flags(flags)) => flags
            .into_iter()
            .filter_map(|(influence, set)| set.then_some(influence))
            .collect(),
        None => BTreeSet::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_defaults() {
        let item = Item::default();
        assert!(item.identified);
        assert_eq!(item.stack_size, 1);
        assert_eq!(item.rarity, Rarity::Normal);
        assert!(item.sockets.is_empty());
    }

    #[test]
    fn test_deserialize_api_shape() {
        let json = r#"{
            "name": "Tabula Rasa",
            "typeLine": "Simple Robe",
            "baseType": "Simple Robe",
            "frameType": 3,
            "ilvl": 70,
            "sockets": [
                {"group": 0, "sColour": "W"},
                {"group": 0, "sColour": "W"},
                {"group": 0, "sColour": "W"},
                {"group": 0, "sColour": "W"},
                {"group": 0, "sColour": "W"},
                {"group": 0, "sColour": "W"}
            ],
            "influences": {"shaper": true, "elder": false}
        }"#;

        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.name, "Tabula Rasa");
        assert_eq!(item.rarity, Rarity::Unique);
        assert_eq!(item.item_level, 70);
        assert_eq!(item.sockets, vec!["WWWWWW".to_string()]);
        assert_eq!(item.largest_link(), 6);
        assert!(item.has_influence(Influence::Shaper));
        assert!(!item.has_influence(Influence::Elder));
    }

    #[test]
    fn test_deserialize_row_shape() {
        let json = r#"{
            "typeline": "Vile Tangle Map",
            "frametype": 1,
            "sockets": ["RGB", "DV"],
            "influences": ["elder"]
        }"#;

        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.type_line, "Vile Tangle Map");
        assert_eq!(item.rarity, Rarity::Magic);
        assert_eq!(item.sockets, vec!["RGB".to_string(), "DV".to_string()]);
        assert_eq!(item.socket_count(), 3);
        assert!(item.has_influence(Influence::Elder));
    }

    #[test]
    fn test_sockets_from_api_separates_delve() {
        let sockets = vec![
            ApiSocket { group: 0, colour: "B".into() },
            ApiSocket { group: 1, colour: "DV".into() },
            ApiSocket { group: 0, colour: "A".into() },
        ];
        assert_eq!(
            sockets_from_api(&sockets),
            vec!["BA".to_string(), "DV".to_string()]
        );
    }

    #[test]
    fn test_abyss_socket_count() {
        let mut item = Item::new("Leather Belt", Rarity::Unique);
        item.sockets = vec!["A".into(), "RA".into()];
        assert_eq!(item.abyss_socket_count(), 2);
    }

    #[test]
    fn test_unique_name_prefers_display_then_secret() {
        let mut item = Item::new("Cobalt Jewel", Rarity::Unique);
        assert_eq!(item.unique_name(), "Cobalt Jewel");
        item.secret_name = Some("Grand Spectrum".into());
        assert_eq!(item.unique_name(), "Grand Spectrum");
        item.name = "Watcher's Eye".into();
        assert_eq!(item.unique_name(), "Watcher's Eye");
    }

    #[test]
    fn test_alternate_quality_prefix() {
        let item = Item::new("Divergent Arc", Rarity::Gem);
        assert_eq!(item.alternate_quality(), Some("Divergent"));
        let item = Item::new("Arc", Rarity::Gem);
        assert_eq!(item.alternate_quality(), None);
    }
}
