//! Dated market snapshots: category -> identifier -> chaos value.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One market snapshot.
///
/// A lookup that misses (unknown category or identifier) is a normal outcome
/// and yields 0 through [`PriceTable::value`].
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use lootlog_data::models::PriceTable;
///
/// let mut table = PriceTable::new(NaiveDate::from_ymd_opt(2021, 3, 1).unwrap());
/// table.insert("Currency", "Exalted Orb", 95.0);
///
/// assert_eq!(table.value("Currency", "Exalted Orb"), 95.0);
/// assert_eq!(table.value("Currency", "Mirror of Kalandra"), 0.0);
/// assert_eq!(table.value("Missing", "Exalted Orb"), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTable {
    /// Date the snapshot applies to.
    pub date: NaiveDate,

    /// Values keyed by category then identifier.
    #[serde(default)]
    pub categories: HashMap<String, HashMap<String, f64>>,
}

impl PriceTable {
    /// Creates an empty table for the given date.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            categories: HashMap::new(),
        }
    }

    /// Creates a table from the nested mapping a market source returns.
    pub fn from_categories(
        date: NaiveDate,
        categories: HashMap<String, HashMap<String, f64>>,
    ) -> Self {
        Self { date, categories }
    }

    /// Sets one value.
    pub fn insert(&mut self, category: &str, identifier: &str, value: f64) {
        self.categories
            .entry(category.to_string())
            .or_default()
            .insert(identifier.to_string(), value);
    }

    /// Looks up a value, returning `None` on a miss.
    pub fn lookup(&self, category: &str, identifier: &str) -> Option<f64> {
        self.categories.get(category)?.get(identifier).copied()
    }

    /// Looks up a value, returning 0 on a miss.
    pub fn value(&self, category: &str, identifier: &str) -> f64 {
        self.lookup(category, identifier).unwrap_or(0.0)
    }

    /// Returns true if the category bucket exists.
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.contains_key(category)
    }

    /// Total number of identifiers across all categories.
    pub fn len(&self) -> usize {
        self.categories.values().map(HashMap::len).sum()
    }

    /// Returns true if the table holds no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A set of snapshots indexed by date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceHistory {
    #[serde(default)]
    tables: BTreeMap<NaiveDate, PriceTable>,
}

impl PriceHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a snapshot, replacing any snapshot for the same date.
    pub fn insert(&mut self, table: PriceTable) {
        self.tables.insert(table.date, table);
    }

    /// Returns the most recent snapshot dated at or before `date`.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use lootlog_data::models::{PriceHistory, PriceTable};
    ///
    /// let d = |day| NaiveDate::from_ymd_opt(2021, 3, day).unwrap();
    /// let mut history = PriceHistory::new();
    /// history.insert(PriceTable::new(d(1)));
    /// history.insert(PriceTable::new(d(5)));
    ///
    /// assert_eq!(history.table_at(d(4)).unwrap().date, d(1));
    /// assert_eq!(history.table_at(d(5)).unwrap().date, d(5));
    /// assert!(history.table_at(NaiveDate::from_ymd_opt(2021, 2, 28).unwrap()).is_none());
    /// ```
    pub fn table_at(&self, date: NaiveDate) -> Option<&PriceTable> {
        self.tables.range(..=date).next_back().map(|(_, table)| table)
    }

    /// Returns the snapshot for exactly `date`.
    pub fn get(&self, date: NaiveDate) -> Option<&PriceTable> {
        self.tables.get(&date)
    }

    /// Iterates snapshots in date order.
    pub fn iter(&self) -> impl Iterator<Item = &PriceTable> {
        self.tables.values()
    }

    /// Number of snapshots.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Returns true if there are no snapshots.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
