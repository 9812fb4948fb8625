//! Integration tests for the JSON stores.
//!
//! These tests verify that saved filters and price history survive a trip
//! through disk and feed the filter cache and the valuation resolver.

use std::fs;

use chrono::{NaiveDate, TimeZone, Utc};
use lootlog_data::models::{Item, PriceHistory, PriceTable, Rarity};
use lootlog_engine::{price, FilterArchive, FilterCache, FilterStore, RatesStore, StoreError};
use tempfile::tempdir;

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 3, day).unwrap()
}

#[test]
fn test_filter_archive_roundtrip() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    let path = temp_dir.path().join("filters.json");
    let store = FilterStore::with_path(path.clone());

    let mut archive = FilterArchive::new();
    let saved_at = Utc.with_ymd_and_hms(2021, 3, 1, 10, 0, 0).unwrap();
    let version = archive.save("main", saved_at, "Show\nRarity Unique\n");

    store.save(&archive).expect("failed to save archive");
    assert!(path.exists(), "archive file should exist after save");

    let loaded = store.load().expect("failed to load archive");
    assert_eq!(loaded, archive);
    assert_eq!(version, "20210301100000");
}

#[test]
fn test_loaded_archive_feeds_the_cache() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    let store = FilterStore::with_path(temp_dir.path().join("filters.json"));

    let mut archive = FilterArchive::new();
    let first = Utc.with_ymd_and_hms(2021, 3, 1, 0, 0, 0).unwrap();
    let second = Utc.with_ymd_and_hms(2021, 3, 5, 0, 0, 0).unwrap();
    archive.save("main", first, "Hide\nRarity Normal\n");
    archive.save("main", second, "Show\nRarity Normal\n");
    store.save(&archive).unwrap();

    let loaded = store.load().unwrap();
    let cache = FilterCache::new();
    let item = Item::new("Iron Ring", Rarity::Normal);

    let between = Utc.with_ymd_and_hms(2021, 3, 3, 0, 0, 0).unwrap();
    let mut early = cache.get_compiled_filter(&loaded, between, "main").unwrap();
    early.set_area_level(60);
    assert!(!early.match_item(&item).unwrap().unwrap().is_shown());

    let after = Utc.with_ymd_and_hms(2021, 3, 6, 0, 0, 0).unwrap();
    let mut late = cache.get_compiled_filter(&loaded, after, "main").unwrap();
    late.set_area_level(60);
    assert!(late.match_item(&item).unwrap().unwrap().is_shown());

    assert_eq!(cache.len(), 2);
}

#[test]
fn test_missing_file_is_read_error() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    let store = RatesStore::with_path(temp_dir.path().join("nonexistent.json"));

    let err = store.load().unwrap_err();
    assert!(matches!(err, StoreError::ReadError { .. }), "unexpected error: {err}");
    assert!(store.load_or_default().unwrap().is_empty());
}

#[test]
fn test_corrupt_file_is_json_error() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    let path = temp_dir.path().join("rates.json");
    fs::write(&path, "{ not json").unwrap();

    let store = RatesStore::with_path(path);
    assert!(matches!(store.load().unwrap_err(), StoreError::Json(_)));
    assert!(matches!(store.load_or_default().unwrap_err(), StoreError::Json(_)));
}

#[test]
fn test_price_history_roundtrip_and_lookup() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    let store = RatesStore::with_path(temp_dir.path().join("nested").join("rates.json"));

    let mut history = PriceHistory::new();
    let mut early = PriceTable::new(date(1));
    early.insert("Currency", "Exalted Orb", 90.0);
    let mut late = PriceTable::new(date(10));
    late.insert("Currency", "Exalted Orb", 120.0);
    history.insert(early);
    history.insert(late);

    store.save(&history).expect("save should create parent directories");
    let loaded = store.load().unwrap();
    assert_eq!(loaded.len(), 2);

    let exalt = Item::new("Exalted Orb", Rarity::Currency);
    let table = loaded.table_at(date(5)).expect("snapshot on or before the 5th");
    assert_eq!(price(&exalt, table).unwrap(), 90.0);

    let table = loaded.table_at(date(10)).unwrap();
    assert_eq!(price(&exalt, table).unwrap(), 120.0);
}

#[test]
fn test_save_leaves_no_temp_file() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    let store = FilterStore::with_path(temp_dir.path().join("filters.json"));

    store.save(&FilterArchive::new()).unwrap();
    store.save(&FilterArchive::new()).unwrap();

    let names: Vec<_> = fs::read_dir(temp_dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(names, vec!["filters.json"]);
}

#[tokio::test]
async fn test_async_roundtrip() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    let store = FilterStore::with_path(temp_dir.path().join("filters.json"));

    let mut archive = FilterArchive::new();
    archive.save("league", Utc.with_ymd_and_hms(2021, 4, 1, 0, 0, 0).unwrap(), "Show\n");
    store.save_async(&archive).await.unwrap();

    let loaded = store.load_async().await.unwrap();
    assert_eq!(loaded.len(), 1);
    assert!(store.load_or_default_async().await.is_ok());
}
