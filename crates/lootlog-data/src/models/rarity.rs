//! Rarity (frame type) and influence tags carried by items.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Item rarity, using the game's frame type numbering.
///
/// Values 0-3 are the classic rarities a loot filter can name. The extended
/// values 4-9 identify item families that carry no rarity of their own.
///
/// # Examples
///
/// ```
/// use lootlog_data::models::Rarity;
///
/// let rarity: Rarity = "Unique".parse().unwrap();
/// assert_eq!(rarity, Rarity::Unique);
/// assert_eq!(rarity.as_u8(), 3);
/// assert!(Rarity::Rare < Rarity::Unique);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Rarity {
    #[default]
    Normal,
    Magic,
    Rare,
    Unique,
    Gem,
    Currency,
    DivinationCard,
    Quest,
    Prophecy,
    Relic,
}

/// Error returned when a rarity name or number is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown rarity: {0}")]
pub struct UnknownRarity(pub String);

impl Rarity {
    /// Returns the frame type number of this rarity.
    pub fn as_u8(self) -> u8 {
        match self {
            Rarity::Normal => 0,
            Rarity::Magic => 1,
            Rarity::Rare => 2,
            Rarity::Unique => 3,
            Rarity::Gem => 4,
            Rarity::Currency => 5,
            Rarity::DivinationCard => 6,
            Rarity::Quest => 7,
            Rarity::Prophecy => 8,
            Rarity::Relic => 9,
        }
    }

    /// Returns true for the four rarities equipment can roll with.
    pub fn is_classic(self) -> bool {
        self.as_u8() <= 3
    }

    /// Returns the display name of this rarity.
    pub fn name(self) -> &'static str {
        match self {
            Rarity::Normal => "Normal",
            Rarity::Magic => "Magic",
            Rarity::Rare => "Rare",
            Rarity::Unique => "Unique",
            Rarity::Gem => "Gem",
            Rarity::Currency => "Currency",
            Rarity::DivinationCard => "Divination Card",
            Rarity::Quest => "Quest",
            Rarity::Prophecy => "Prophecy",
            Rarity::Relic => "Relic",
        }
    }
}

impl TryFrom<u8> for Rarity {
    type Error = UnknownRarity;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => Rarity::Normal,
            1 => Rarity::Magic,
            2 => Rarity::Rare,
            3 => Rarity::Unique,
            4 => Rarity::Gem,
            5 => Rarity::Currency,
            6 => Rarity::DivinationCard,
            7 => Rarity::Quest,
            8 => Rarity::Prophecy,
            9 => Rarity::Relic,
            other => return Err(UnknownRarity(other.to_string())),
        })
    }
}

impl From<Rarity> for u8 {
    fn from(rarity: Rarity) -> Self {
        rarity.as_u8()
    }
}

/// Parses the names a loot filter uses (`Normal`, `Magic`, `Rare`, `Unique`),
/// case-insensitively.
impl FromStr for Rarity {
    type Err = UnknownRarity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "normal" => Ok(Rarity::Normal),
            "magic" => Ok(Rarity::Magic),
            "rare" => Ok(Rarity::Rare),
            "unique" => Ok(Rarity::Unique),
            _ => Err(UnknownRarity(s.to_string())),
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named special-affix origin an item may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Influence {
    Shaper,
    Elder,
    Crusader,
    Redeemer,
    Hunter,
    Warlord,
}

impl Influence {
    /// All influences, in display order.
    pub const ALL: [Influence; 6] = [
        Influence::Shaper,
        Influence::Elder,
        Influence::Crusader,
        Influence::Redeemer,
        Influence::Hunter,
        Influence::Warlord,
    ];

    /// Returns the filter-syntax name of this influence.
    pub fn name(self) -> &'static str {
        match self {
            Influence::Shaper => "Shaper",
            Influence::Elder => "Elder",
            Influence::Crusader => "Crusader",
            Influence::Redeemer => "Redeemer",
            Influence::Hunter => "Hunter",
            Influence::Warlord => "Warlord",
        }
    }
}

impl FromStr for Influence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Influence::ALL
            .into_iter()
            .find(|i| i.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| s.to_string())
    }
}

impl fmt::Display for Influence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rarity_roundtrips_through_frame_type() {
        for n in 0u8..=9 {
            let rarity = Rarity::try_from(n).unwrap();
            assert_eq!(rarity.as_u8(), n);
        }
        assert!(Rarity::try_from(10).is_err());
    }

    #[test]
    fn test_rarity_from_filter_name() {
        assert_eq!("normal".parse::<Rarity>().unwrap(), Rarity::Normal);
        assert_eq!("MAGIC".parse::<Rarity>().unwrap(), Rarity::Magic);
        assert_eq!("Rare".parse::<Rarity>().unwrap(), Rarity::Rare);
        assert!("Gem".parse::<Rarity>().is_err());
    }

    #[test]
    fn test_rarity_serde_uses_frame_type() {
        let json = serde_json::to_string(&Rarity::Unique).unwrap();
        assert_eq!(json, "3");
        let rarity: Rarity = serde_json::from_str("6").unwrap();
        assert_eq!(rarity, Rarity::DivinationCard);
    }

    #[test]
    fn test_influence_parse_case_insensitive() {
        assert_eq!("shaper".parse::<Influence>().unwrap(), Influence::Shaper);
        assert_eq!("Warlord".parse::<Influence>().unwrap(), Influence::Warlord);
        assert!("Exarch".parse::<Influence>().is_err());
    }
}
