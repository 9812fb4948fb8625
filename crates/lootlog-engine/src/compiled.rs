//! Versioned filter resolution and the compiled-filter cache.
//!
//! Saved filter documents never change once written, so a compiled document
//! is cached for the life of the process under its version key.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Utc};
use lootlog_data::models::Item;

use crate::filter::{FilterError, FilterEvaluator, FilterParser, MatchContext, MatchedRule, ParseResult};

/// Format of a version key: the save time down to the second.
pub const VERSION_KEY_FORMAT: &str = "%Y%m%d%H%M%S";

/// Renders the version key for a save time.
pub fn version_key(saved_at: DateTime<Utc>) -> String {
    saved_at.format(VERSION_KEY_FORMAT).to_string()
}

/// Provides saved filter documents.
pub trait FilterSource {
    /// Error raised by the underlying storage.
    type Error;

    /// Returns the version key of the newest document saved strictly before
    /// `before`, or an empty string if there is none.
    fn resolve_version(&self, before: DateTime<Utc>, profile: &str) -> Result<String, Self::Error>;

    /// Returns the text of the newest document saved strictly before
    /// `before`, or an empty string if there is none.
    fn filter_text(&self, before: DateTime<Utc>, profile: &str) -> Result<String, Self::Error>;
}

/// A compiled filter document ready for matching.
///
/// The area level used by `AreaLevel` conditions must be set with
/// [`set_area_level`](Self::set_area_level) before matching.
#[derive(Debug, Clone)]
pub struct CompiledFilter {
    version: String,
    parsed: Arc<ParseResult>,
    area_level: Option<u32>,
}

impl CompiledFilter {
    /// Compiles `text` under the given version key.
    pub fn compile(version: impl Into<String>, text: &str) -> Self {
        Self::from_parsed(version.into(), Arc::new(FilterParser::parse(text)))
    }

    fn from_parsed(version: String, parsed: Arc<ParseResult>) -> Self {
        Self {
            version,
            parsed,
            area_level: None,
        }
    }

    /// Returns the version key, empty when no document was saved yet.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns the parse output, including diagnostics.
    pub fn parsed(&self) -> &ParseResult {
        &self.parsed
    }

    /// Sets the level of the area items are matched for.
    pub fn set_area_level(&mut self, level: u32) {
        self.area_level = Some(level);
    }

    /// Returns the area level, if set.
    pub fn area_level(&self) -> Option<u32> {
        self.area_level
    }

    /// Finds the rule that decides `item`.
    ///
    /// # Errors
    ///
    /// Returns `FilterError::AreaLevelNotSet` if no area level was set.
    pub fn match_item(&self, item: &Item) -> Result<Option<MatchedRule<'_>>, FilterError> {
        let area_level = self.area_level.ok_or(FilterError::AreaLevelNotSet)?;
        let evaluator = FilterEvaluator::new(&self.parsed.rules, MatchContext { area_level });
        Ok(evaluator.first_match(item))
    }
}

/// Process-lifetime cache of compiled documents keyed by profile and version.
///
/// Compilation is deterministic, so two callers racing on the same version
/// at worst compile it twice.
#[derive(Debug, Default)]
pub struct FilterCache {
    compiled: Mutex<HashMap<(String, String), Arc<ParseResult>>>,
}

impl FilterCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the filter in effect at `at` for `profile`.
    ///
    /// The returned filter has no area level set.
    ///
    /// # Errors
    ///
    /// Propagates errors from the filter source.
    pub fn get_compiled_filter<S: FilterSource>(
        &self,
        source: &S,
        at: DateTime<Utc>,
        profile: &str,
    ) -> Result<CompiledFilter, S::Error> {
        let version = source.resolve_version(at, profile)?;
        let key = (profile.to_string(), version.clone());

        if let Some(parsed) = self.lookup(&key) {
            tracing::debug!(%version, "compiled filter cache hit");
            return Ok(CompiledFilter::from_parsed(version, parsed));
        }

        tracing::debug!(%version, profile, "compiled filter cache miss");
        let text = source.filter_text(at, profile)?;
        let parsed = Arc::new(FilterParser::parse(&text));
        if !parsed.errors.is_empty() {
            tracing::debug!(%version, errors = parsed.errors.len(), "filter compiled with errors");
        }

        self.compiled
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, Arc::clone(&parsed));
        Ok(CompiledFilter::from_parsed(version, parsed))
    }

    fn lookup(&self, key: &(String, String)) -> Option<Arc<ParseResult>> {
        self.compiled
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    /// Number of cached (profile, version) entries.
    pub fn len(&self) -> usize {
        self.compiled
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns true if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every cached version.
    pub fn clear(&self) {
        self.compiled
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
