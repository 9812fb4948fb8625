//! Tests for rule evaluation.

use super::*;
use lootlog_data::models::{Influence, Item, Rarity};

const CONTEXT: MatchContext = MatchContext { area_level: 75 };

fn item(type_line: &str, rarity: Rarity) -> Item {
    Item::new(type_line, rarity)
}

fn with_sockets(groups: &[&str]) -> Item {
    let mut item = item("Vaal Regalia", Rarity::Rare);
    item.sockets = groups.iter().map(|g| g.to_string()).collect();
    item
}

/// Parses a one-rule document and evaluates its conditions against `item`.
fn rule_matches(body: &str, item: &Item) -> bool {
    let parsed = FilterParser::parse(&format!("Show\n{body}\n"));
    assert!(parsed.is_ok(), "errors: {:?}", parsed.errors);
    FilterEvaluator::new(&parsed.rules, CONTEXT).matches_rule(&parsed.rules[0], item)
}

// ==================== Numeric Tests ====================

#[test]
fn test_item_level_operators() {
    let mut it = item("Vaal Regalia", Rarity::Rare);
    for (level, expected) in [(79, false), (80, true), (85, true)] {
        it.item_level = level;
        assert_eq!(rule_matches("ItemLevel >= 80", &it), expected, "ilvl {level}");
    }

    it.item_level = 85;
    assert!(!rule_matches("ItemLevel 80", &it));
    assert!(!rule_matches("ItemLevel == 80", &it));
    it.item_level = 80;
    assert!(rule_matches("ItemLevel 80", &it));
}

#[test]
fn test_linked_sockets_uses_largest_group() {
    let it = with_sockets(&["RGB", "RRGGB", "DV"]);
    assert!(rule_matches("LinkedSockets 5", &it));
    assert!(!rule_matches("LinkedSockets > 5", &it));
}

#[test]
fn test_corrupted_mods_counts_implicits() {
    let mut it = item("Coral Ring", Rarity::Rare);
    it.implicit_mods = vec!["+25 to maximum Life".into(), "5% increased Damage".into()];
    assert!(rule_matches("CorruptedMods 2", &it));
    assert!(!rule_matches("CorruptedMods >= 3", &it));
}

#[test]
fn test_enchantment_passive_num() {
    let mut it = item("Large Cluster Jewel", Rarity::Magic);
    it.enchant_mods = vec![
        "Added Small Passive Skills grant: 12% increased Fire Damage".into(),
        "Adds 8 Passive Skills".into(),
    ];
    assert!(rule_matches("EnchantmentPassiveNum <= 8", &it));
    assert!(!rule_matches("EnchantmentPassiveNum > 8", &it));

    let plain = item("Large Cluster Jewel", Rarity::Magic);
    assert!(rule_matches("EnchantmentPassiveNum 0", &plain));
}

#[test]
fn test_area_level_uses_context() {
    let it = item("Chaos Orb", Rarity::Currency);
    assert!(rule_matches("AreaLevel >= 75", &it));
    assert!(!rule_matches("AreaLevel > 75", &it));
}

// ==================== Rarity Tests ====================

#[test]
fn test_rarity_set_membership() {
    for (rarity, expected) in [
        (Rarity::Normal, true),
        (Rarity::Magic, true),
        (Rarity::Rare, false),
        (Rarity::Unique, false),
    ] {
        let it = item("Iron Ring", rarity);
        assert_eq!(rule_matches("Rarity Normal Magic", &it), expected, "{rarity}");
    }
}

#[test]
fn test_rarity_comparison() {
    for (rarity, expected) in [
        (Rarity::Normal, false),
        (Rarity::Magic, false),
        (Rarity::Rare, true),
        (Rarity::Unique, true),
    ] {
        let it = item("Iron Ring", rarity);
        assert_eq!(rule_matches("Rarity >= Rare", &it), expected, "{rarity}");
    }
}

// ==================== Text Tests ====================

#[test]
fn test_class_substring_any_candidate() {
    let mut it = item("Two-Stone Ring", Rarity::Rare);
    it.item_class = "Rings".to_string();
    assert!(rule_matches("Class Amulets Ring", &it));
    assert!(!rule_matches("Class Amulets Belts", &it));
    assert!(!rule_matches("Class == Ring", &it));
    assert!(rule_matches("Class == Rings", &it));
}

#[test]
fn test_base_type_falls_back_to_type_line() {
    let it = item("Exalted Orb", Rarity::Currency);
    assert!(rule_matches("BaseType \"Exalted\"", &it));
}

#[test]
fn test_has_enchantment_checks_every_enchant() {
    let mut it = item("Bone Helmet", Rarity::Rare);
    it.enchant_mods = vec!["Ice Nova has 20% increased Area of Effect".into()];
    assert!(rule_matches("HasEnchantment \"Ice Nova\"", &it));
    assert!(!rule_matches("HasEnchantment \"Arc\"", &it));
}

#[test]
fn test_gem_quality_type() {
    let superior = item("Cleave", Rarity::Gem);
    assert!(rule_matches("GemQualityType Superior", &superior));

    let mut anomalous = item("Anomalous Cleave", Rarity::Gem);
    anomalous.base_type = "Anomalous Cleave".to_string();
    assert!(rule_matches("GemQualityType Anomalous", &anomalous));
    assert!(!rule_matches("GemQualityType Superior", &anomalous));
}

#[test]
fn test_prophecy_requires_prophecy_base() {
    let mut it = item("The Queen's Sacrifice", Rarity::Prophecy);
    it.base_type = "Prophecy".to_string();
    assert!(rule_matches("Prophecy \"Queen\"", &it));

    let card = item("The Queen's Sacrifice", Rarity::DivinationCard);
    assert!(!rule_matches("Prophecy \"Queen\"", &card));
}

// ==================== Socket Tests ====================

#[test]
fn test_unlinked_subset_law() {
    let it = with_sockets(&["RGB"]);
    assert!(!rule_matches("Sockets 3R", &it));
    assert!(rule_matches("Sockets 1R", &it));
}

#[test]
fn test_unlinked_pools_groups_and_ignores_delve() {
    let it = with_sockets(&["B", "BG", "RB", "DV"]);
    assert!(rule_matches("Sockets 3B", &it));
    assert!(!rule_matches("Sockets 4B", &it));
    assert!(rule_matches("Sockets 5", &it));
    assert!(!rule_matches("Sockets 6", &it));
}

#[test]
fn test_linked_checks_each_group() {
    let it = with_sockets(&["B", "BG", "RB"]);
    assert!(!rule_matches("SocketGroup 3B", &it));
    assert!(rule_matches("SocketGroup RB", &it));
    assert!(rule_matches("SocketGroup >= 2", &it));
    assert!(!rule_matches("SocketGroup >= 3", &it));
}

#[test]
fn test_socket_group_with_size_and_colours() {
    let it = with_sockets(&["GGGRB"]);
    assert!(rule_matches("SocketGroup 5GGG", &it));
    assert!(!rule_matches("SocketGroup 5GGGG", &it));
    assert!(!rule_matches("SocketGroup 6GGG", &it));
    assert!(rule_matches("SocketGroup >= 4GG", &it));
}

#[test]
fn test_socket_exact_equal() {
    let it = with_sockets(&["RGB"]);
    assert!(rule_matches("SocketGroup == RGB", &it));
    assert!(rule_matches("SocketGroup == BGR", &it));
    assert!(!rule_matches("SocketGroup == RG", &it));
    // With a size, only the sought colours must match exactly.
    assert!(rule_matches("SocketGroup == 3RG", &it));
    assert!(!rule_matches("SocketGroup == 3RRG", &it));
}

#[test]
fn test_socket_greater_and_less() {
    let it = with_sockets(&["RRG"]);
    assert!(rule_matches("Sockets > R", &it));
    assert!(!rule_matches("Sockets > RR", &it));
    assert!(rule_matches("Sockets <= RRGG", &it));
    assert!(!rule_matches("Sockets <= RG", &it));
}

#[test]
fn test_any_listed_socket_token_matches() {
    let it = with_sockets(&["WW"]);
    assert!(rule_matches("SocketGroup RRR WW", &it));
    assert!(!rule_matches("SocketGroup RRR BB", &it));
}

#[test]
fn test_group_matches_direct() {
    let spec = SocketSpec {
        count: None,
        colours: "AA".to_string(),
    };
    assert!(group_matches("AAR", Comparison::Equal, &spec));
    assert!(!group_matches("AR", Comparison::Equal, &spec));
}

// ==================== Flag Tests ====================

#[test]
fn test_influence_flags() {
    let mut it = item("Hubris Circlet", Rarity::Rare);
    it.influences.insert(Influence::Elder);
    assert!(rule_matches("ElderItem True", &it));
    assert!(rule_matches("ShaperItem False", &it));
}

#[test]
fn test_alternate_quality_flag() {
    let mut it = item("Divergent Arc", Rarity::Gem);
    it.base_type = "Divergent Arc".to_string();
    assert!(rule_matches("AlternateQuality True", &it));
    assert!(!rule_matches("AlternateQuality True", &item("Arc", Rarity::Gem)));
}

#[test]
fn test_any_enchantment_and_identified() {
    let mut it = item("Bone Helmet", Rarity::Rare);
    assert!(!rule_matches("AnyEnchantment True", &it));
    it.enchant_mods.push("Arc deals 25% increased Damage".into());
    it.identified = false;
    assert!(rule_matches("AnyEnchantment True", &it));
    assert!(rule_matches("Identified False", &it));
}

// ==================== Mods & Influence Tests ====================

#[test]
fn test_has_explicit_mod_counts_found_mods() {
    let mut it = item("Vaal Regalia", Rarity::Rare);
    it.explicit_mods = vec![
        "+120 to maximum Energy Shield".into(),
        "Tyrannical affix".into(),
    ];
    assert!(rule_matches("HasExplicitMod Tyrannical Merciless", &it));
    assert!(!rule_matches("HasExplicitMod >= 2 Tyrannical Merciless", &it));
    assert!(!rule_matches("HasExplicitMod Merciless", &it));
}

#[test]
fn test_has_explicit_mod_veil_flag() {
    let mut it = item("Vaal Regalia", Rarity::Rare);
    it.veiled = true;
    assert!(rule_matches("HasExplicitMod Veil", &it));
}

#[test]
fn test_has_influence_modes() {
    let mut it = item("Hubris Circlet", Rarity::Rare);
    assert!(rule_matches("HasInfluence None", &it));

    it.influences.insert(Influence::Shaper);
    assert!(!rule_matches("HasInfluence None", &it));
    assert!(rule_matches("HasInfluence Shaper Elder", &it));
    assert!(!rule_matches("HasInfluence == Shaper Elder", &it));

    it.influences.insert(Influence::Elder);
    assert!(rule_matches("HasInfluence == Shaper Elder", &it));
}

// ==================== Rule Order Tests ====================

#[test]
fn test_first_match_wins() {
    let parsed = FilterParser::parse(
        "Show\nRarity Unique\nSetFontSize 45\nHide\nRarity Unique\nShow\n",
    );
    let evaluator = FilterEvaluator::new(&parsed.rules, CONTEXT);

    let unique = item("Leather Belt", Rarity::Unique);
    let matched = evaluator.first_match(&unique).unwrap();
    assert_eq!(matched.index, 0);
    assert_eq!(matched.style.font_size, Some(50));

    let rare = item("Leather Belt", Rarity::Rare);
    assert_eq!(evaluator.first_match(&rare).unwrap().index, 2);
}

#[test]
fn test_no_match() {
    let parsed = FilterParser::parse("Show\nRarity Unique\n");
    let evaluator = FilterEvaluator::new(&parsed.rules, CONTEXT);
    assert!(evaluator.first_match(&item("Iron Ring", Rarity::Normal)).is_none());
}

#[test]
fn test_continue_accumulates_style() {
    let parsed = FilterParser::parse(
        "Show\nSetTextColor 1 1 1\nSetFontSize 18\nContinue\n\
         Show\nRarity Rare\nSetTextColor 2 2 2\n\
         Hide\n",
    );
    let evaluator = FilterEvaluator::new(&parsed.rules, CONTEXT);

    let rare = item("Iron Ring", Rarity::Rare);
    let matched = evaluator.first_match(&rare).unwrap();
    assert_eq!(matched.index, 1);
    assert_eq!(matched.style.text, Some(Rgba::new(2, 2, 2, None)));
    assert_eq!(matched.style.font_size, Some(25));

    let magic = item("Iron Ring", Rarity::Magic);
    let matched = evaluator.first_match(&magic).unwrap();
    assert_eq!(matched.index, 2);
    assert!(!matched.is_shown());
    assert_eq!(matched.style.text, Some(Rgba::new(1, 1, 1, None)));
}

#[test]
fn test_last_continue_decides_when_nothing_terminal_matches() {
    let parsed = FilterParser::parse("Show\nContinue\nHide\nItemLevel 1\nContinue\n");
    let evaluator = FilterEvaluator::new(&parsed.rules, CONTEXT);

    let mut it = item("Iron Ring", Rarity::Normal);
    it.item_level = 1;
    let matched = evaluator.first_match(&it).unwrap();
    assert_eq!(matched.index, 1);
    assert!(!matched.is_shown());
}

#[test]
fn test_filter_items_keeps_shown() {
    let parsed = FilterParser::parse("Hide\nRarity Normal\nShow\n");
    let evaluator = FilterEvaluator::new(&parsed.rules, CONTEXT);
    let items = vec![
        item("Iron Ring", Rarity::Normal),
        item("Iron Ring", Rarity::Magic),
    ];
    let shown = evaluator.filter_items(&items);
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].rarity, Rarity::Magic);
}
