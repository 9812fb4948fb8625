use lootlog_data::models::{Item, Rarity};

use super::*;

fn item(type_line: &str, rarity: Rarity) -> Item {
    Item::new(type_line, rarity)
}

// ==================== Markers and fixed tables ====================

#[test]
fn test_heist_markers() {
    let contract = item("Contract: Bunker", Rarity::Normal);
    let blueprint = item("Blueprint: Mansion", Rarity::Rare);

    assert_eq!(resolve_category(&contract, false), Some(CONTRACT));
    assert_eq!(resolve_category(&blueprint, true), Some(BLUEPRINT));
}

#[test]
fn test_other_base_types_single_and_pair() {
    let offering = item("Offering to the Goddess", Rarity::Normal);
    assert_eq!(resolve_category(&offering, false), Some(MAP_FRAGMENTS));
    assert_eq!(resolve_category(&offering, true), Some("Labyrinth"));

    let watchstone = item("Ivory Watchstone", Rarity::Normal);
    assert_eq!(resolve_category(&watchstone, false), Some(WATCHSTONE));
    assert_eq!(resolve_category(&watchstone, true), Some(WATCHSTONE));
}

#[test]
fn test_timeless_splinter_is_fragment() {
    let splinter = item("Timeless Karui Splinter", Rarity::Currency);
    let found = classify(&splinter).unwrap();
    assert_eq!(found.category, MAP_FRAGMENTS);
    assert_eq!(found.subcategory, Some("Timeless Splinter"));
}

// ==================== Rarity cases ====================

#[test]
fn test_gems_strip_quality_prefix() {
    let gem = item("Anomalous Cleave", Rarity::Gem);
    assert_eq!(resolve_category(&gem, false), Some(ACTIVE_GEMS));

    let support = item("Superior Added Fire Damage Support", Rarity::Gem);
    assert_eq!(resolve_category(&support, false), Some(SUPPORT_GEMS));
}

#[test]
fn test_gem_table_overrides_name_shape() {
    let brand = item("Arcanist Brand", Rarity::Gem);
    assert_eq!(resolve_category(&brand, false), Some(SUPPORT_GEMS));

    let empower = item("Empower Support", Rarity::Gem);
    assert_eq!(resolve_category(&empower, true), Some("Exceptional"));
}

#[test]
fn test_gem_subcategories() {
    let vaal = item("Vaal Grace", Rarity::Gem);
    assert_eq!(resolve_category(&vaal, true), Some("Vaal"));
    assert_eq!(resolve_category(&vaal, false), Some(ACTIVE_GEMS));

    let awakened = item("Awakened Multistrike Support", Rarity::Gem);
    assert_eq!(resolve_category(&awakened, true), Some("Awakened"));
}

#[test]
fn test_card_quest_prophecy() {
    assert_eq!(
        resolve_category(&item("The Doctor", Rarity::DivinationCard), false),
        Some(DIVINATION_CARD)
    );
    assert_eq!(
        resolve_category(&item("Treasure Key", Rarity::Quest), false),
        Some(QUEST_ITEMS)
    );
    assert_eq!(
        resolve_category(&item("The Queen's Sacrifice", Rarity::Prophecy), false),
        Some(PROPHECY)
    );
}

#[test]
fn test_pantheon_seed_trinket() {
    let soul = item("Captured Soul of Drought-Maddened Rhoa", Rarity::Normal);
    assert_eq!(resolve_category(&soul, false), Some(PANTHEON_SOUL));

    let seed = item("Primal Cleaveling Seed", Rarity::Normal);
    assert_eq!(resolve_category(&seed, false), Some(HARVEST_SEED));
    assert_eq!(resolve_category(&seed, true), Some("Primal"));

    let trinket = item("Thief's Trinket", Rarity::Rare);
    assert_eq!(resolve_category(&trinket, false), Some(TRINKETS));
}

#[test]
fn test_seed_needs_tier_word() {
    // "Wildfire" is not the "Wild" tier.
    let odd = item("Wildfire Seed", Rarity::Normal);
    assert_ne!(resolve_category(&odd, false), Some(HARVEST_SEED));
}

#[test]
fn test_currency_kinds() {
    let cases = [
        ("Chaos Orb", CURRENCY),
        ("Golden Oil", OIL),
        ("Dense Fossil", FOSSIL),
        ("Prime Chaotic Resonator", RESONATOR),
        ("Essence of Hysteria", ESSENCE),
        ("Deafening Essence of Greed", ESSENCE),
        ("Remnant of Corruption", ESSENCE),
        ("Fine Delirium Orb", DELIRIUM_ORB),
        ("Prismatic Catalyst", CATALYST),
        ("Vial of Dominance", VIAL),
    ];

    for (type_line, expected) in cases {
        let found = resolve_category(&item(type_line, Rarity::Currency), false);
        assert_eq!(found, Some(expected), "{type_line}");
    }
}

// ==================== Heuristics ====================

#[test]
fn test_scarab_map_incubator() {
    let scarab = item("Polished Cartography Scarab", Rarity::Normal);
    assert_eq!(resolve_category(&scarab, true), Some("Scarab"));

    let map = item("Fecund Vile Tangle Map of Exposure", Rarity::Magic);
    assert_eq!(resolve_category(&map, false), Some(MAPS));

    let mut tiered = item("Strand", Rarity::Rare);
    tiered.map_tier = 3;
    assert_eq!(resolve_category(&tiered, false), Some(MAPS));

    let incubator = item("Geomancer's Incubator", Rarity::Normal);
    assert_eq!(resolve_category(&incubator, false), Some(INCUBATOR));
}

#[test]
fn test_currency_frame_incubator_and_scarab() {
    let incubator = item("Geomancer's Incubator", Rarity::Currency);
    assert_eq!(resolve_category(&incubator, false), Some(INCUBATOR));

    let scarab = item("Gilded Ambush Scarab", Rarity::Currency);
    assert_eq!(resolve_category(&scarab, true), Some("Scarab"));
}

#[test]
fn test_harbinger_and_icon_markers() {
    let piece = item("First Piece of Focus", Rarity::Unique);
    assert_eq!(resolve_category(&piece, false), Some(HARBINGER_PIECE));

    let mut beast = item("Vivid Vulture", Rarity::Rare);
    beast.icon = "https://web.poecdn.com/image/Art/2DItems/Currency/BestiaryOrbFull.png".into();
    assert_eq!(resolve_category(&beast, false), Some(CAPTURED_BEAST));

    let mut organ = item("Haast's Heart", Rarity::Unique);
    organ.icon = "https://web.poecdn.com/image/Art/2DItems/Metamorphosis/Heart.png".into();
    assert_eq!(resolve_category(&organ, false), Some(METAMORPH_SAMPLE));
}

// ==================== Equipment ====================

#[test]
fn test_equipment_exact_after_prefix_strip() {
    let normal = item("Superior Vaal Regalia", Rarity::Normal);
    assert_eq!(resolve_category(&normal, false), Some(BODY_ARMOURS));

    let synth = item("Synthesised Leather Belt", Rarity::Rare);
    assert_eq!(resolve_category(&synth, false), Some(BELTS));
}

#[test]
fn test_equipment_substring_scan_prefers_longest_base() {
    let flask = item("Seething Divine Life Flask of Staunching", Rarity::Magic);
    assert_eq!(resolve_category(&flask, false), Some(FLASKS));

    let ring = item("Glinting Two-Stone Ring of the Lynx", Rarity::Magic);
    assert_eq!(equipment_base_in(&ring.type_line), Some(("Two-Stone Ring", RINGS)));
}

#[test]
fn test_base_type_field_wins_over_type_line() {
    let mut helmet = item("Blasphemer's Hubris Circlet of the Zephyr", Rarity::Magic);
    helmet.base_type = "Hubris Circlet".into();
    assert_eq!(resolve_category(&helmet, false), Some(HELMETS));
}

#[test]
fn test_unique_equipment_uses_base() {
    let mut unique = item("Leather Belt", Rarity::Unique);
    unique.name = "Headhunter".into();
    let found = classify(&unique).unwrap();
    assert_eq!(found.category, BELTS);
    assert!(found.is_equipment());
}

#[test]
fn test_unknown_item_is_none() {
    let odd = item("Mysterious Contraption", Rarity::Normal);
    assert_eq!(classify(&odd), None);
    assert_eq!(resolve_category(&odd, true), None);
}

#[test]
fn test_classification_helpers() {
    assert!(Classification::new(CLUSTER_JEWEL).is_jewel());
    assert!(Classification::new(SUPPORT_GEMS).is_gem());
    assert!(Classification::new(WANDS).is_equipment());
    assert!(!Classification::new(FLASKS).is_equipment());
}

#[test]
fn test_strip_quality_prefixes() {
    assert_eq!(strip_quality_prefixes("Superior Synthesised Vaal Regalia"), "Vaal Regalia");
    assert_eq!(strip_quality_prefixes("Phantasmal Cleave"), "Cleave");
    assert_eq!(strip_quality_prefixes("Cleave"), "Cleave");
}
