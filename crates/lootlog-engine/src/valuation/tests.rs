use chrono::NaiveDate;
use lootlog_data::models::{Item, PriceTable, Rarity};

use super::*;

const BLIGHT_ICON: &str =
    "https://web.poecdn.com/gen/image/Atlas2Maps/New/VileTangle.png?scale=1&mn=5&mt=5";

fn table(entries: &[(PriceBucket, &str, f64)]) -> PriceTable {
    let mut table = PriceTable::new(NaiveDate::from_ymd_opt(2021, 3, 1).unwrap());
    for (bucket, id, value) in entries {
        table.insert(bucket.key(), id, *value);
    }
    table
}

fn item(type_line: &str, rarity: Rarity) -> Item {
    Item::new(type_line, rarity)
}

fn helmet(rarity: Rarity, item_level: u32, enchant: Option<&str>) -> Item {
    let mut helmet = item("Hubris Circlet", rarity);
    helmet.item_level = item_level;
    helmet.enchant_mods = enchant.into_iter().map(String::from).collect();
    helmet
}

// ==================== Anchors and zero cases ====================

#[test]
fn test_chaos_orb_is_the_unit() {
    let mut chaos = item("Chaos Orb", Rarity::Currency);
    chaos.stack_size = 13;

    let prices = table(&[(PriceBucket::Currency, "Chaos Orb", 99.0)]);
    assert_eq!(price(&chaos, &prices).unwrap(), 13.0);
    assert_eq!(price(&chaos, &table(&[])).unwrap(), 13.0);
}

#[test]
fn test_miss_in_present_category_is_zero() {
    let prices = table(&[(PriceBucket::Currency, "Exalted Orb", 95.0)]);
    let orb = item("Mirror of Kalandra", Rarity::Currency);
    assert_eq!(price(&orb, &prices).unwrap(), 0.0);
}

#[test]
fn test_quest_and_beasts_are_worthless() {
    let prices = table(&[(PriceBucket::Currency, "Treasure Key", 5.0)]);
    assert_eq!(price(&item("Treasure Key", Rarity::Quest), &prices).unwrap(), 0.0);

    let mut beast = item("Fenumal Plagued Arachnid", Rarity::Rare);
    beast.icon = "Art/2DItems/Currency/BestiaryOrbFull.png".into();
    assert_eq!(price(&beast, &prices).unwrap(), 0.0);
}

#[test]
fn test_unknown_item_falls_back_to_zero() {
    let odd = item("Mysterious Contraption", Rarity::Normal);
    assert_eq!(price(&odd, &table(&[])).unwrap(), 0.0);
}

// ==================== Stackables ====================

#[test]
fn test_currency_kinds_use_their_buckets() {
    let prices = table(&[
        (PriceBucket::Currency, "Exalted Orb", 95.0),
        (PriceBucket::Oil, "Golden Oil", 40.0),
        (PriceBucket::Fossil, "Dense Fossil", 2.0),
        (PriceBucket::Incubator, "Geomancer's Incubator", 3.0),
    ]);

    let mut oil = item("Golden Oil", Rarity::Currency);
    oil.stack_size = 2;
    assert_eq!(price(&oil, &prices).unwrap(), 80.0);

    let mut fossil = item("Dense Fossil", Rarity::Currency);
    fossil.stack_size = 10;
    assert_eq!(price(&fossil, &prices).unwrap(), 20.0);

    let incubator = item("Geomancer's Incubator", Rarity::Normal);
    assert_eq!(price(&incubator, &prices).unwrap(), 3.0);

    let mut stacked = item("Geomancer's Incubator", Rarity::Currency);
    stacked.stack_size = 2;
    assert_eq!(price(&stacked, &prices).unwrap(), 6.0);
}

#[test]
fn test_fragments_and_scarabs() {
    let prices = table(&[
        (PriceBucket::Fragment, "Sacrifice at Dusk", 1.5),
        (PriceBucket::Fragment, "Timeless Karui Splinter", 0.5),
        (PriceBucket::Scarab, "Gilded Ambush Scarab", 12.0),
    ]);

    let mut dusk = item("Sacrifice at Dusk", Rarity::Normal);
    dusk.stack_size = 2;
    assert_eq!(price(&dusk, &prices).unwrap(), 3.0);

    let mut splinters = item("Timeless Karui Splinter", Rarity::Currency);
    splinters.stack_size = 10;
    assert_eq!(price(&splinters, &prices).unwrap(), 5.0);

    let scarab = item("Gilded Ambush Scarab", Rarity::Normal);
    assert_eq!(price(&scarab, &prices).unwrap(), 12.0);
}

#[test]
fn test_cards_multiply_by_stack() {
    let prices = table(&[(PriceBucket::DivinationCard, "The Doctor", 800.0)]);
    let mut cards = item("The Doctor", Rarity::DivinationCard);
    cards.stack_size = 3;
    assert_eq!(price(&cards, &prices).unwrap(), 2400.0);
}

#[test]
fn test_prophecy_lookup() {
    let prices = table(&[(PriceBucket::Prophecy, "The Queen's Sacrifice", 7.0)]);
    let prophecy = item("The Queen's Sacrifice", Rarity::Prophecy);
    assert_eq!(price(&prophecy, &prices).unwrap(), 7.0);
}

#[test]
fn test_watchstone_uses_suffix() {
    let prices = table(&[(PriceBucket::Watchstone, "Ivory Watchstone 5 uses", 4.0)]);
    let mut stone = item("Ivory Watchstone", Rarity::Normal);
    stone.explicit_mods = vec!["5 uses remaining".into()];
    assert_eq!(price(&stone, &prices).unwrap(), 4.0);
}

// ==================== Maps ====================

#[test]
fn test_identified_magic_map_uses_base_name() {
    let prices = table(&[(PriceBucket::Map, "Vile Tangle Map T5 Blight", 2.0)]);

    let mut map = item("Shaped Vile Tangle Map", Rarity::Magic);
    map.map_tier = 5;
    map.icon = BLIGHT_ICON.into();

    assert_eq!(price(&map, &prices).unwrap(), 2.0);
}

#[test]
fn test_unknown_map_series_is_an_error() {
    let mut map = item("Strand Map", Rarity::Normal);
    map.map_tier = 1;
    map.icon = "https://example.invalid/strand.png".into();

    let err = price(&map, &table(&[])).unwrap_err();
    assert!(matches!(err, ValuationError::UnknownMapSeries { .. }));
}

#[test]
fn test_unique_map() {
    let prices = table(&[(
        PriceBucket::UniqueMap,
        "Caer Blaidd, Wolfpack's Den T11 Underground River Map",
        6.0,
    )]);
    let mut map = item("Underground River Map", Rarity::Unique);
    map.name = "Caer Blaidd, Wolfpack's Den".into();
    map.map_tier = 11;

    assert_eq!(price(&map, &prices).unwrap(), 6.0);
}

// ==================== Uniques ====================

#[test]
fn test_unique_links_suffix() {
    let prices = table(&[
        (PriceBucket::UniqueArmour, "Kaom's Heart", 20.0),
        (PriceBucket::UniqueArmour, "Kaom's Heart 6L", 200.0),
    ]);
    let mut kaom = item("Glorious Plate", Rarity::Unique);
    kaom.name = "Kaom's Heart".into();
    assert_eq!(price(&kaom, &prices).unwrap(), 20.0);

    kaom.sockets = vec!["RRRRRR".into()];
    assert_eq!(price(&kaom, &prices).unwrap(), 200.0);
}

#[test]
fn test_relic_prices_like_unique() {
    let prices = table(&[(PriceBucket::UniqueAccessory, "Headhunter", 5000.0)]);
    let mut relic = item("Leather Belt", Rarity::Relic);
    relic.name = "Headhunter".into();
    assert_eq!(price(&relic, &prices).unwrap(), 5000.0);
}

#[test]
fn test_unidentified_variants_use_midpoint() {
    let prices = table(&[
        (PriceBucket::UniqueArmour, "Volkuur's Guidance (Fire)", 10.0),
        (PriceBucket::UniqueArmour, "Volkuur's Guidance (Cold)", 30.0),
    ]);
    let mut gloves = item("Zealot Gloves", Rarity::Unique);
    gloves.secret_name = Some("Volkuur's Guidance".into());
    gloves.identified = false;

    // Lightning is unpriced and counts as 0.
    assert_eq!(price(&gloves, &prices).unwrap(), 15.0);
}

// ==================== Gems and bases ====================

#[test]
fn test_gem_identifier_lookup() {
    let prices = table(&[(PriceBucket::SkillGem, "Cleave L20 Q20", 3.0)]);
    let mut gem = item("Superior Cleave", Rarity::Gem);
    gem.gem_level = 20;
    gem.quality = 20;
    assert_eq!(price(&gem, &prices).unwrap(), 3.0);
}

#[test]
fn test_base_type_below_item_level_is_zero() {
    let prices = table(&[(PriceBucket::BaseType, "Two-Stone Ring 84", 30.0)]);

    let mut ring = item("Two-Stone Ring", Rarity::Rare);
    ring.item_level = 80;
    assert_eq!(price(&ring, &prices).unwrap(), 0.0);

    ring.item_level = 84;
    assert_eq!(price(&ring, &prices).unwrap(), 30.0);
}

#[test]
fn test_flasks_and_jewels_are_zero() {
    let prices = table(&[(PriceBucket::BaseType, "Cobalt Jewel", 1.0)]);
    assert_eq!(price(&item("Divine Life Flask", Rarity::Magic), &prices).unwrap(), 0.0);
    assert_eq!(price(&item("Cobalt Jewel", Rarity::Rare), &prices).unwrap(), 0.0);
}

// ==================== Helmets ====================

#[test]
fn test_helmet_takes_larger_of_base_and_enchant() {
    let enchant = "Tornado Shot fires an additional secondary Projectile";
    let prices = table(&[
        (PriceBucket::BaseType, "Hubris Circlet 84", 10.0),
        (PriceBucket::HelmetEnchant, enchant, 25.0),
    ]);

    assert_eq!(price(&helmet(Rarity::Rare, 84, Some(enchant)), &prices).unwrap(), 25.0);
    assert_eq!(price(&helmet(Rarity::Rare, 84, None), &prices).unwrap(), 10.0);
}

#[test]
fn test_helmet_with_unpriced_base_keeps_enchant() {
    let enchant = "Tornado Shot fires an additional secondary Projectile";
    let prices = table(&[(PriceBucket::HelmetEnchant, enchant, 25.0)]);

    assert_eq!(price(&helmet(Rarity::Rare, 85, Some(enchant)), &prices).unwrap(), 25.0);
}

#[test]
fn test_low_level_helmet_is_priced_by_enchant() {
    let enchant = "Tornado Shot fires an additional secondary Projectile";
    let prices = table(&[
        (PriceBucket::BaseType, "Hubris Circlet 84", 10.0),
        (PriceBucket::HelmetEnchant, enchant, 25.0),
    ]);

    // Below item level 82 the base is worth nothing but the enchant counts.
    assert_eq!(price(&helmet(Rarity::Rare, 75, Some(enchant)), &prices).unwrap(), 25.0);
    assert_eq!(price(&helmet(Rarity::Magic, 70, Some(enchant)), &prices).unwrap(), 25.0);
    assert_eq!(price(&helmet(Rarity::Rare, 75, None), &prices).unwrap(), 0.0);
}

#[test]
fn test_unique_helmet_compares_with_enchant() {
    let enchant = "Tornado Shot fires an additional secondary Projectile";
    let prices = table(&[
        (PriceBucket::UniqueArmour, "Crown of Eyes", 5.0),
        (PriceBucket::HelmetEnchant, enchant, 12.0),
    ]);

    let mut crown = helmet(Rarity::Unique, 70, Some(enchant));
    crown.name = "Crown of Eyes".into();
    assert_eq!(price(&crown, &prices).unwrap(), 12.0);

    crown.enchant_mods.clear();
    assert_eq!(price(&crown, &prices).unwrap(), 5.0);
}

// ==================== Batches ====================

#[test]
fn test_value_items_totals_and_counts_failures() {
    let prices = table(&[(PriceBucket::Currency, "Exalted Orb", 95.0)]);

    let mut chaos = item("Chaos Orb", Rarity::Currency);
    chaos.stack_size = 5;
    let exalt = item("Exalted Orb", Rarity::Currency);
    let mut broken = item("Strand Map", Rarity::Normal);
    broken.icon = "nowhere".into();

    let run = value_items(&[chaos, exalt, broken], &prices);

    assert_eq!(run.values, vec![5.0, 95.0, 0.0]);
    assert_eq!(run.total, 100.0);
    assert_eq!(run.failures, 1);
}

#[test]
fn test_bucket_keys_are_distinct() {
    let mut keys: Vec<&str> = PriceBucket::ALL.iter().map(|b| b.key()).collect();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), PriceBucket::ALL.len());
}
