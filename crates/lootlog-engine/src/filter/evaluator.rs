//! Rule evaluation against items.
//!
//! # Example
//!
//! ```
//! use lootlog_data::models::{Item, Rarity};
//! use lootlog_engine::filter::{FilterEvaluator, FilterParser, MatchContext};
//!
//! let parsed = FilterParser::parse("Show\nRarity Unique\nSetTextColor 175 96 37\n");
//! let evaluator = FilterEvaluator::new(&parsed.rules, MatchContext { area_level: 68 });
//!
//! let mut item = Item::new("Leather Belt", Rarity::Unique);
//! item.name = "Headhunter".to_string();
//!
//! let matched = evaluator.first_match(&item).unwrap();
//! assert!(matched.rule.is_shown());
//! assert_eq!(matched.style.text.unwrap().r, 175);
//! ```

use lootlog_data::models::{Influence, Item, DELVE_SOCKET_GROUP};

use super::ast::{
    Comparison, FlagField, InfluenceMode, NumericField, Predicate, Rule, SocketMode, SocketSpec,
    Style, TextField,
};
use super::lexer::{char_frequencies, is_subset_count};

/// Quality type reported for gems without an alternate quality.
const DEFAULT_GEM_QUALITY_TYPE: &str = "Superior";

/// Ambient state a filter is evaluated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchContext {
    /// Level of the area the item dropped in.
    pub area_level: u32,
}

/// The outcome of evaluating an item against a rule list.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchedRule<'a> {
    /// The rule that decided the item.
    pub rule: &'a Rule,
    /// Index of that rule in the rule list.
    pub index: usize,
    /// Style accumulated from every matching rule up to and including it.
    pub style: Style,
}

impl MatchedRule<'_> {
    /// Returns true if the item is shown.
    pub fn is_shown(&self) -> bool {
        self.rule.is_shown()
    }
}

/// Evaluates items against an ordered rule list.
#[derive(Debug, Clone, Copy)]
pub struct FilterEvaluator<'a> {
    rules: &'a [Rule],
    context: MatchContext,
}

impl<'a> FilterEvaluator<'a> {
    /// Creates a new evaluator.
    pub fn new(rules: &'a [Rule], context: MatchContext) -> Self {
        Self { rules, context }
    }

    /// Returns true if every predicate of `rule` matches.
    pub fn matches_rule(&self, rule: &Rule, item: &Item) -> bool {
        rule.filters
            .iter()
            .all(|predicate| predicate.matches(item, &self.context))
    }

    /// Finds the rule that decides `item`.
    ///
    /// Rules are tried in order. A matching `Continue` rule contributes its
    /// style and evaluation goes on; the first matching rule without
    /// `Continue` ends it. If only continuing rules matched, the last of them
    /// decides.
    pub fn first_match(&self, item: &Item) -> Option<MatchedRule<'a>> {
        let mut style = Style::default();
        let mut last_continue = None;

        for (index, rule) in self.rules.iter().enumerate() {
            if !self.matches_rule(rule, item) {
                continue;
            }
            style.apply(&rule.modifiers);
            if !rule.continues {
                return Some(MatchedRule { rule, index, style });
            }
            last_continue = Some(index);
        }

        last_continue.map(|index| MatchedRule {
            rule: &self.rules[index],
            index,
            style,
        })
    }

    /// Returns the items that end up shown.
    pub fn filter_items<'b>(&self, items: &'b [Item]) -> Vec<&'b Item> {
        items
            .iter()
            .filter(|item| self.first_match(item).is_some_and(|m| m.is_shown()))
            .collect()
    }
}

impl Predicate {
    /// Returns true if `item` satisfies this predicate.
    pub fn matches(&self, item: &Item, context: &MatchContext) -> bool {
        match self {
            Predicate::Numeric { field, op, value } => {
                op.compare(numeric_value(*field, item), *value)
            }
            Predicate::AreaLevel { op, value } => op.compare(context.area_level, *value),
            Predicate::Rarity { op, value } => op.compare(item.rarity.as_u8(), value.as_u8()),
            Predicate::RarityIn(rarities) => rarities.contains(&item.rarity),
            Predicate::Text {
                field,
                exact,
                values,
            } => text_values(*field, item)
                .iter()
                .any(|field_value| contains_any(field_value, values, *exact)),
            Predicate::Prophecy { exact, values } => {
                item.base_type() == "Prophecy" && contains_any(&item.type_line, values, *exact)
            }
            Predicate::Sockets { mode, op, specs } => sockets_match(item, *mode, *op, specs),
            Predicate::Flag { field, value } => flag_value(*field, item) == *value,
            Predicate::HasExplicitMod {
                op,
                threshold,
                mods,
            } => {
                let found = mods
                    .iter()
                    .filter(|wanted| {
                        (wanted.as_str() == "Veil" && item.veiled)
                            || item.explicit_mods.iter().any(|m| m.contains(wanted.as_str()))
                    })
                    .count();
                op.compare(found as u32, *threshold)
            }
            Predicate::HasInfluence { mode, influences } => match mode {
                InfluenceMode::None => item.influences.is_empty(),
                InfluenceMode::All => influences.iter().all(|i| item.has_influence(*i)),
                InfluenceMode::Any => influences.iter().any(|i| item.has_influence(*i)),
            },
        }
    }
}

fn contains_any(field_value: &str, candidates: &[String], exact: bool) -> bool {
    candidates.iter().any(|candidate| {
        if exact {
            field_value == candidate
        } else {
            field_value.contains(candidate.as_str())
        }
    })
}

fn numeric_value(field: NumericField, item: &Item) -> u32 {
    match field {
        NumericField::ItemLevel => item.item_level,
        NumericField::DropLevel => item.drop_level,
        NumericField::Quality => item.quality,
        NumericField::LinkedSockets => item.largest_link() as u32,
        NumericField::Width => item.width,
        NumericField::Height => item.height,
        NumericField::MapTier => item.map_tier,
        NumericField::GemLevel => item.gem_level,
        NumericField::StackSize => item.stack_size,
        NumericField::CorruptedMods => item.implicit_mods.len() as u32,
        NumericField::EnchantmentPassiveNum => item
            .enchant_mods
            .iter()
            .find_map(|m| passive_count(m))
            .unwrap_or(0),
    }
}

/// Reads N from `Adds N Passive Skills`.
fn passive_count(enchant: &str) -> Option<u32> {
    let rest = enchant.strip_prefix("Adds ")?;
    let (n, tail) = rest.split_once(' ')?;
    if tail != "Passive Skills" {
        return None;
    }
    n.parse().ok()
}

fn text_values(field: TextField, item: &Item) -> Vec<&str> {
    match field {
        TextField::Class => vec![item.item_class.as_str()],
        TextField::BaseType => vec![item.base_type()],
        TextField::HasEnchantment => item.enchant_mods.iter().map(String::as_str).collect(),
        TextField::GemQualityType => {
            vec![item.alternate_quality().unwrap_or(DEFAULT_GEM_QUALITY_TYPE)]
        }
    }
}

fn flag_value(field: FlagField, item: &Item) -> bool {
    match field {
        FlagField::Identified => item.identified,
        FlagField::Corrupted => item.corrupted,
        FlagField::ElderItem => item.has_influence(Influence::Elder),
        FlagField::ShaperItem => item.has_influence(Influence::Shaper),
        FlagField::ShapedMap => item.shaped_map,
        FlagField::ElderMap => item.elder_map,
        FlagField::FracturedItem => item.fractured,
        FlagField::SynthesisedItem => item.synthesised,
        FlagField::AnyEnchantment => !item.enchant_mods.is_empty(),
        FlagField::BlightedMap => item.blighted_map,
        FlagField::Mirrored => item.mirrored,
        FlagField::AlternateQuality => item.alternate_quality().is_some(),
        FlagField::Replica => item.replica,
    }
}

// ==================== Sockets ====================

fn sockets_match(item: &Item, mode: SocketMode, op: Comparison, specs: &[SocketSpec]) -> bool {
    match mode {
        SocketMode::Linked => item
            .sockets
            .iter()
            .filter(|group| group.as_str() != DELVE_SOCKET_GROUP)
            .any(|group| specs.iter().any(|spec| group_matches(group, op, spec))),
        SocketMode::Unlinked => {
            let pooled: String = item.linked_groups().collect();
            specs.iter().any(|spec| group_matches(&pooled, op, spec))
        }
    }
}

/// Compares one socket group against one sought spec.
///
/// Groups are multisets of colours. `==` wants identical counts (all colours
/// when no size is given, the sought colours otherwise); `=` and `>=` want
/// at least the sought counts; `>` wants strictly more of each sought colour;
/// `<=` and `<` want no more than the sought counts.
pub fn group_matches(group: &str, op: Comparison, spec: &SocketSpec) -> bool {
    let size = group.chars().count() as u32;
    if let Some(count) = spec.count {
        if !op.compare(size, count) {
            return false;
        }
    }
    if spec.colours.is_empty() {
        return true;
    }

    let have = char_frequencies(group);
    let want = char_frequencies(&spec.colours);
    let have_of = |c: &char| have.get(c).copied().unwrap_or(0);

    match op {
        Comparison::ExactEqual if spec.count.is_none() => have == want,
        Comparison::ExactEqual => want.iter().all(|(c, n)| have_of(c) == *n),
        Comparison::Equal | Comparison::GreaterEqual => is_subset_count(&want, &have),
        Comparison::Greater => want.iter().all(|(c, n)| have_of(c) > *n),
        Comparison::Less | Comparison::LessEqual => want.iter().all(|(c, n)| have_of(c) <= *n),
    }
}
