//! The lootlog core: loot-filter compilation and matching, item category
//! resolution and item valuation.
//!
//! All operations here are synchronous and work on in-memory data. Saved
//! filter documents and price history are persisted through [`store`], and
//! snapshots are fetched by `lootlog_data::client::RatesClient`.
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use lootlog_data::models::{Item, Rarity};
//! use lootlog_engine::store::FilterArchive;
//! use lootlog_engine::FilterCache;
//!
//! let mut archive = FilterArchive::new();
//! let saved_at = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap();
//! archive.save("main", saved_at, "Show\nRarity Unique\n");
//!
//! let cache = FilterCache::new();
//! let later = Utc.with_ymd_and_hms(2021, 2, 1, 0, 0, 0).unwrap();
//! let mut filter = cache.get_compiled_filter(&archive, later, "main").unwrap();
//! filter.set_area_level(80);
//!
//! let item = Item::new("Leather Belt", Rarity::Unique);
//! assert!(filter.match_item(&item).unwrap().is_some());
//! ```

pub mod category;
pub mod compiled;
pub mod filter;
pub mod store;
pub mod valuation;

pub use category::{classify, resolve_category, Classification};
pub use compiled::{version_key, CompiledFilter, FilterCache, FilterSource};
pub use filter::{FilterError, FilterParser, ParseResult};
pub use store::{FilterArchive, FilterStore, RatesStore, SavedFilter, StoreError};
pub use valuation::{price, value_items, PriceBucket, RunValue, ValuationError, PRICE_UNIT};
