//! Loot filter document parser and matcher.
//!
//! Filter documents are the game's line-oriented rule language. A document
//! compiles into an ordered list of rules; an item is decided by the first
//! rule whose conditions all hold.
//!
//! # Supported Syntax
//!
//! ## Blocks
//! - `Show` / `Hide` - open a rule
//! - `Continue` - close the open rule and keep evaluating later rules
//! - `# ...` - comments, on their own line or after code
//!
//! ## Conditions
//! - Numeric: `ItemLevel`, `DropLevel`, `Quality`, `LinkedSockets`, `Width`,
//!   `Height`, `MapTier`, `GemLevel`, `StackSize`, `CorruptedMods`,
//!   `EnchantmentPassiveNum`, `AreaLevel`
//! - `Rarity` with an operator, or a bare list of rarities
//! - Strings: `Class`, `BaseType`, `HasEnchantment`, `GemQualityType`,
//!   `Prophecy` (substring match, or exact with a leading `==`)
//! - Sockets: `Sockets` (all sockets pooled), `SocketGroup` (per link group)
//! - Booleans: `Identified`, `Corrupted`, `ElderItem`, `ShaperItem`,
//!   `ShapedMap`, `ElderMap`, `FracturedItem`, `SynthesisedItem`,
//!   `AnyEnchantment`, `BlightedMap`, `Mirrored`, `AlternateQuality`, `Replica`
//! - `HasExplicitMod [op n] "mod" ...`, `HasInfluence [==] names | None`
//!
//! ## Operators
//! `<`, `<=`, `=`, `==`, `>=`, `>`; a missing operator means `=`.
//!
//! ## Actions
//! `SetBackgroundColor`, `SetBorderColor`, `SetTextColor`, `SetFontSize`,
//! plus the sound, minimap icon and effect actions, which are validated but
//! have no effect on the computed style.
//!
//! # Example
//!
//! ```
//! use lootlog_data::models::{Item, Rarity};
//! use lootlog_engine::filter::{FilterEvaluator, FilterParser, MatchContext};
//!
//! let parsed = FilterParser::parse("Hide\nClass Currency\nStackSize < 3\n");
//! assert!(parsed.is_ok());
//!
//! let mut item = Item::new("Orb of Transmutation", Rarity::Currency);
//! item.item_class = "Stackable Currency".to_string();
//!
//! let evaluator = FilterEvaluator::new(&parsed.rules, MatchContext { area_level: 70 });
//! assert!(!evaluator.first_match(&item).unwrap().is_shown());
//! ```

mod ast;
mod error;
mod evaluator;
mod lexer;
mod parser;

pub use ast::{
    remap_font_size, Comparison, FlagField, InfluenceMode, Modifier, NumericField, Predicate,
    Rgba, Rule, SocketMode, SocketSpec, Style, TextField, Visibility,
};
pub use error::{FilterError, FilterResult, FilterWarning, ParseError, ParseWarning};
pub use evaluator::{group_matches, FilterEvaluator, MatchContext, MatchedRule};
pub use lexer::{
    char_frequencies, is_subset_count, normalize_whitespace, split_arguments,
    split_quoted_arguments, QuotedSplit,
};
pub use parser::{
    filter_keywords, parse_socket_spec, FilterParser, LineKind, ParseResult, MAX_ERRORS,
    MODIFIER_KEYWORDS,
};

#[cfg(test)]
mod evaluator_tests;
