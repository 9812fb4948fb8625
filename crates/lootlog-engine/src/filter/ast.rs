//! Rule model for compiled filter documents.
//!
//! A document compiles into an ordered list of [`Rule`]s. Each rule holds the
//! [`Predicate`]s an item must satisfy and the [`Modifier`]s applied when it
//! does. Matching lives in the evaluator.

use std::str::FromStr;

use lootlog_data::models::{Influence, Rarity};
use serde::Serialize;

use super::error::FilterError;

/// A comparison operator as written in a filter document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Comparison {
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `=`, also the implicit operator when none is written.
    Equal,
    /// `==`
    ExactEqual,
    /// `>=`
    GreaterEqual,
    /// `>`
    Greater,
}

impl Comparison {
    /// Parses an operator token.
    pub fn from_token(token: &str) -> Option<Self> {
        Some(match token {
            "<" => Comparison::Less,
            "<=" => Comparison::LessEqual,
            "=" => Comparison::Equal,
            "==" => Comparison::ExactEqual,
            ">=" => Comparison::GreaterEqual,
            ">" => Comparison::Greater,
            _ => return None,
        })
    }

    /// Returns the operator as written.
    pub fn symbol(self) -> &'static str {
        match self {
            Comparison::Less => "<",
            Comparison::LessEqual => "<=",
            Comparison::Equal => "=",
            Comparison::ExactEqual => "==",
            Comparison::GreaterEqual => ">=",
            Comparison::Greater => ">",
        }
    }

    /// Applies the operator as `lhs <op> rhs`.
    ///
    /// ```
    /// use lootlog_engine::filter::Comparison;
    ///
    /// assert!(Comparison::GreaterEqual.compare(80, 80));
    /// assert!(!Comparison::Equal.compare(85, 80));
    /// ```
    pub fn compare<T: PartialOrd>(self, lhs: T, rhs: T) -> bool {
        match self {
            Comparison::Less => lhs < rhs,
            Comparison::LessEqual => lhs <= rhs,
            Comparison::Equal | Comparison::ExactEqual => lhs == rhs,
            Comparison::GreaterEqual => lhs >= rhs,
            Comparison::Greater => lhs > rhs,
        }
    }
}

/// Item fields compared numerically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NumericField {
    ItemLevel,
    DropLevel,
    Quality,
    LinkedSockets,
    Width,
    Height,
    MapTier,
    GemLevel,
    StackSize,
    /// Counts implicit mods; the game data exposes no better proxy.
    CorruptedMods,
    /// N from an enchant of the shape `Adds N Passive Skills`.
    EnchantmentPassiveNum,
}

impl NumericField {
    /// All numeric fields, with their keywords.
    pub const ALL: [NumericField; 11] = [
        NumericField::ItemLevel,
        NumericField::DropLevel,
        NumericField::Quality,
        NumericField::LinkedSockets,
        NumericField::Width,
        NumericField::Height,
        NumericField::MapTier,
        NumericField::GemLevel,
        NumericField::StackSize,
        NumericField::CorruptedMods,
        NumericField::EnchantmentPassiveNum,
    ];

    /// Returns the filter keyword for this field.
    pub fn keyword(self) -> &'static str {
        match self {
            NumericField::ItemLevel => "ItemLevel",
            NumericField::DropLevel => "DropLevel",
            NumericField::Quality => "Quality",
            NumericField::LinkedSockets => "LinkedSockets",
            NumericField::Width => "Width",
            NumericField::Height => "Height",
            NumericField::MapTier => "MapTier",
            NumericField::GemLevel => "GemLevel",
            NumericField::StackSize => "StackSize",
            NumericField::CorruptedMods => "CorruptedMods",
            NumericField::EnchantmentPassiveNum => "EnchantmentPassiveNum",
        }
    }
}

/// Item fields matched against a list of strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TextField {
    Class,
    BaseType,
    /// Any enchant mod.
    HasEnchantment,
    /// `Superior` or the alternate-quality prefix of the base type.
    GemQualityType,
}

impl TextField {
    pub const ALL: [TextField; 4] = [
        TextField::Class,
        TextField::BaseType,
        TextField::HasEnchantment,
        TextField::GemQualityType,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            TextField::Class => "Class",
            TextField::BaseType => "BaseType",
            TextField::HasEnchantment => "HasEnchantment",
            TextField::GemQualityType => "GemQualityType",
        }
    }
}

/// Item fields matched against `True`/`False`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FlagField {
    Identified,
    Corrupted,
    ElderItem,
    ShaperItem,
    ShapedMap,
    ElderMap,
    FracturedItem,
    SynthesisedItem,
    AnyEnchantment,
    BlightedMap,
    Mirrored,
    AlternateQuality,
    Replica,
}

impl FlagField {
    pub const ALL: [FlagField; 13] = [
        FlagField::Identified,
        FlagField::Corrupted,
        FlagField::ElderItem,
        FlagField::ShaperItem,
        FlagField::ShapedMap,
        FlagField::ElderMap,
        FlagField::FracturedItem,
        FlagField::SynthesisedItem,
        FlagField::AnyEnchantment,
        FlagField::BlightedMap,
        FlagField::Mirrored,
        FlagField::AlternateQuality,
        FlagField::Replica,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            FlagField::Identified => "Identified",
            FlagField::Corrupted => "Corrupted",
            FlagField::ElderItem => "ElderItem",
            FlagField::ShaperItem => "ShaperItem",
            FlagField::ShapedMap => "ShapedMap",
            FlagField::ElderMap => "ElderMap",
            FlagField::FracturedItem => "FracturedItem",
            FlagField::SynthesisedItem => "SynthesisedItem",
            FlagField::AnyEnchantment => "AnyEnchantment",
            FlagField::BlightedMap => "BlightedMap",
            FlagField::Mirrored => "Mirrored",
            FlagField::AlternateQuality => "AlternateQuality",
            FlagField::Replica => "Replica",
        }
    }
}

/// How socket groups are read for a socket filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SocketMode {
    /// Each linked group is checked on its own (`SocketGroup`).
    Linked,
    /// All non-delve sockets are pooled together (`Sockets`).
    Unlinked,
}

impl FromStr for SocketMode {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linked" => Ok(SocketMode::Linked),
            "unlinked" => Ok(SocketMode::Unlinked),
            other => Err(FilterError::InvalidSocketMode {
                mode: other.to_string(),
            }),
        }
    }
}

/// One sought socket group, such as `5GGG` or `RGB`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SocketSpec {
    /// Required group size, if the token constrains it.
    pub count: Option<u32>,
    /// Sought colours, one character per socket.
    pub colours: String,
}

/// How a `HasInfluence` list is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum InfluenceMode {
    /// The item must carry no influence at all.
    None,
    /// The item must carry at least one listed influence.
    Any,
    /// The item must carry every listed influence (`==`).
    All,
}

/// A single condition of a rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Predicate {
    /// Numeric comparison against an item field.
    Numeric {
        field: NumericField,
        op: Comparison,
        value: u32,
    },
    /// Compares the ambient area level, not the item.
    AreaLevel { op: Comparison, value: u32 },
    /// `Rarity <op> <name>`.
    Rarity { op: Comparison, value: Rarity },
    /// `Rarity <name> <name> ...`: set membership.
    RarityIn(Vec<Rarity>),
    /// Substring (or exact, with `==`) match against a string field.
    Text {
        field: TextField,
        exact: bool,
        values: Vec<String>,
    },
    /// Prophecy base type plus name match.
    Prophecy { exact: bool, values: Vec<String> },
    /// `Sockets` / `SocketGroup`.
    Sockets {
        mode: SocketMode,
        op: Comparison,
        specs: Vec<SocketSpec>,
    },
    /// Boolean item field.
    Flag { field: FlagField, value: bool },
    /// Number of listed mods found among explicit mods.
    HasExplicitMod {
        op: Comparison,
        threshold: u32,
        mods: Vec<String>,
    },
    /// Influence set condition.
    HasInfluence {
        mode: InfluenceMode,
        influences: Vec<Influence>,
    },
}

impl Predicate {
    /// Returns the keyword this predicate was written with.
    pub fn keyword(&self) -> &'static str {
        match self {
            Predicate::Numeric { field, .. } => field.keyword(),
            Predicate::AreaLevel { .. } => "AreaLevel",
            Predicate::Rarity { .. } | Predicate::RarityIn(_) => "Rarity",
            Predicate::Text { field, .. } => field.keyword(),
            Predicate::Prophecy { .. } => "Prophecy",
            Predicate::Sockets {
                mode: SocketMode::Linked,
                ..
            } => "SocketGroup",
            Predicate::Sockets {
                mode: SocketMode::Unlinked,
                ..
            } => "Sockets",
            Predicate::Flag { field, .. } => field.keyword(),
            Predicate::HasExplicitMod { .. } => "HasExplicitMod",
            Predicate::HasInfluence { .. } => "HasInfluence",
        }
    }
}

/// An RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Creates a colour, with alpha defaulting to opaque.
    pub fn new(r: u8, g: u8, b: u8, a: Option<u8>) -> Self {
        Self {
            r,
            g,
            b,
            a: a.unwrap_or(255),
        }
    }
}

/// Smallest and largest font size a filter may request.
pub const FONT_SIZE_RANGE: (u32, u32) = (18, 45);

/// Display range requested font sizes are mapped onto.
pub const DISPLAY_FONT_RANGE: (u32, u32) = (25, 50);

/// Maps a requested font size onto the display range.
///
/// ```
/// use lootlog_engine::filter::remap_font_size;
///
/// assert_eq!(remap_font_size(18), 25);
/// assert_eq!(remap_font_size(45), 50);
/// assert_eq!(remap_font_size(60), 50);
/// ```
pub fn remap_font_size(size: u32) -> u32 {
    let (lo, hi) = FONT_SIZE_RANGE;
    let (out_lo, out_hi) = DISPLAY_FONT_RANGE;
    let clamped = f64::from(size.clamp(lo, hi));
    let scaled = f64::from(out_lo)
        + (clamped - f64::from(lo)) * f64::from(out_hi - out_lo) / f64::from(hi - lo);
    scaled.round() as u32
}

/// An action applied to a matching item.
///
/// Only the colour and font size actions affect [`Style`]; the sound, icon
/// and effect actions are validated and kept but have no effect here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Modifier {
    BackgroundColor(Rgba),
    BorderColor(Rgba),
    TextColor(Rgba),
    /// Already remapped to the display range.
    FontSize(u32),
    AlertSound {
        sound: String,
        volume: Option<u32>,
        positional: bool,
    },
    CustomAlertSound { file: String },
    DisableDropSound,
    EnableDropSound,
    /// `size` is -1 when the icon is disabled.
    MinimapIcon {
        size: i32,
        colour: Option<String>,
        shape: Option<String>,
    },
    PlayEffect { colour: String, temporary: bool },
}

impl Modifier {
    /// Returns the keyword this action was written with.
    pub fn keyword(&self) -> &'static str {
        match self {
            Modifier::BackgroundColor(_) => "SetBackgroundColor",
            Modifier::BorderColor(_) => "SetBorderColor",
            Modifier::TextColor(_) => "SetTextColor",
            Modifier::FontSize(_) => "SetFontSize",
            Modifier::AlertSound {
                positional: false, ..
            } => "PlayAlertSound",
            Modifier::AlertSound {
                positional: true, ..
            } => "PlayAlertSoundPositional",
            Modifier::CustomAlertSound { .. } => "CustomAlertSound",
            Modifier::DisableDropSound => "DisableDropSound",
            Modifier::EnableDropSound => "EnableDropSound",
            Modifier::MinimapIcon { .. } => "MinimapIcon",
            Modifier::PlayEffect { .. } => "PlayEffect",
        }
    }

    /// Returns true for actions that play a sound.
    pub fn is_sound(&self) -> bool {
        matches!(
            self,
            Modifier::AlertSound { .. } | Modifier::CustomAlertSound { .. }
        )
    }
}

/// The visual style accumulated from matching rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Style {
    pub background: Option<Rgba>,
    pub border: Option<Rgba>,
    pub text: Option<Rgba>,
    pub font_size: Option<u32>,
}

impl Style {
    /// Applies the style actions in order; later values win.
    pub fn apply(&mut self, modifiers: &[Modifier]) {
        for modifier in modifiers {
            match modifier {
                Modifier::BackgroundColor(c) => self.background = Some(*c),
                Modifier::BorderColor(c) => self.border = Some(*c),
                Modifier::TextColor(c) => self.text = Some(*c),
                Modifier::FontSize(size) => self.font_size = Some(*size),
                _ => {}
            }
        }
    }
}

/// Whether a matching item is shown or hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Visibility {
    Show,
    Hide,
}

impl Visibility {
    pub fn keyword(self) -> &'static str {
        match self {
            Visibility::Show => "Show",
            Visibility::Hide => "Hide",
        }
    }
}

/// One `Show`/`Hide` block.
///
/// Every predicate must match for the rule to apply. A continuing rule lets
/// evaluation proceed to later rules after it matches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rule {
    pub visibility: Visibility,
    pub continues: bool,
    pub filters: Vec<Predicate>,
    pub modifiers: Vec<Modifier>,
    /// 0-based lines that contributed to this rule.
    pub source_lines: Vec<usize>,
}

impl Rule {
    /// Creates an empty rule opened on `line`.
    pub fn new(visibility: Visibility, line: usize) -> Self {
        Self {
            visibility,
            continues: false,
            filters: Vec::new(),
            modifiers: Vec::new(),
            source_lines: vec![line],
        }
    }

    /// Returns true for a `Show` rule.
    pub fn is_shown(&self) -> bool {
        self.visibility == Visibility::Show
    }
}
