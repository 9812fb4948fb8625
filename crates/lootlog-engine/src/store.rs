//! On-disk storage for saved filter documents and price history.
//!
//! Both documents are stored as pretty-printed JSON under XDG-compliant
//! paths: the filter archive in the data directory (it is user data) and the
//! price history in the cache directory (it can be fetched again).
//!
//! Both synchronous and asynchronous I/O methods are provided:
//! - `save()`, `load()` - Synchronous methods using `std::fs`
//! - `save_async()`, `load_async()` - Asynchronous methods using `tokio::fs`

use std::convert::Infallible;
use std::fs;
use std::io;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use lootlog_data::models::PriceHistory;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::compiled::{version_key, FilterSource};

/// Application qualifier (for XDG paths).
const QUALIFIER: &str = "";

/// Application organization (for XDG paths).
const ORGANIZATION: &str = "";

/// Application name (for XDG paths).
const APPLICATION: &str = "lootlog";

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to determine the XDG directories.
    #[error("failed to determine data directory: no valid home directory found")]
    NoDataDir,

    /// I/O error during file read.
    #[error("failed to read '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// I/O error during file write.
    #[error("failed to write '{path}': {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// I/O error during directory creation.
    #[error("failed to create directory '{path}': {source}")]
    CreateDirError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// A document kind with a default location on disk.
pub trait StoredDocument: Serialize + DeserializeOwned + Default {
    /// File name inside the default directory.
    const FILENAME: &'static str;

    /// Picks the directory this document lives in.
    fn default_dir(dirs: &ProjectDirs) -> &Path;
}

/// A saved filter document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedFilter {
    /// Profile (character or league setup) the document belongs to.
    pub profile: String,
    /// When the document was saved.
    pub saved_at: DateTime<Utc>,
    /// Raw document text.
    pub text: String,
}

impl SavedFilter {
    /// Returns the version key of this document.
    pub fn version(&self) -> String {
        version_key(self.saved_at)
    }
}

/// Every saved version of every profile's filter document.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use lootlog_engine::store::FilterArchive;
/// use lootlog_engine::FilterSource;
///
/// let mut archive = FilterArchive::new();
/// let saved = Utc.with_ymd_and_hms(2021, 5, 1, 12, 0, 0).unwrap();
/// archive.save("main", saved, "Show\n");
///
/// let later = Utc.with_ymd_and_hms(2021, 5, 2, 0, 0, 0).unwrap();
/// assert_eq!(archive.resolve_version(later, "main").unwrap(), "20210501120000");
/// assert_eq!(archive.resolve_version(saved, "main").unwrap(), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterArchive {
    #[serde(default)]
    filters: Vec<SavedFilter>,
}

impl FilterArchive {
    /// Creates an empty archive.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new version and returns its version key.
    pub fn save(
        &mut self,
        profile: impl Into<String>,
        saved_at: DateTime<Utc>,
        text: impl Into<String>,
    ) -> String {
        let saved = SavedFilter {
            profile: profile.into(),
            saved_at,
            text: text.into(),
        };
        let version = saved.version();
        self.filters.push(saved);
        version
    }

    /// Returns the newest version of `profile` saved strictly before `before`.
    pub fn latest_before(&self, before: DateTime<Utc>, profile: &str) -> Option<&SavedFilter> {
        self.filters
            .iter()
            .filter(|f| f.profile == profile && f.saved_at < before)
            .max_by_key(|f| f.saved_at)
    }

    /// Iterates all saved versions in save order.
    pub fn iter(&self) -> impl Iterator<Item = &SavedFilter> {
        self.filters.iter()
    }

    /// Number of saved versions.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Returns true if nothing was saved.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl FilterSource for FilterArchive {
    type Error = Infallible;

    fn resolve_version(
        &self,
        before: DateTime<Utc>,
        profile: &str,
    ) -> std::result::Result<String, Infallible> {
        Ok(self
            .latest_before(before, profile)
            .map(SavedFilter::version)
            .unwrap_or_default())
    }

    fn filter_text(
        &self,
        before: DateTime<Utc>,
        profile: &str,
    ) -> std::result::Result<String, Infallible> {
        Ok(self
            .latest_before(before, profile)
            .map(|f| f.text.clone())
            .unwrap_or_default())
    }
}

impl StoredDocument for FilterArchive {
    const FILENAME: &'static str = "filters.json";

    fn default_dir(dirs: &ProjectDirs) -> &Path {
        dirs.data_dir()
    }
}

impl StoredDocument for PriceHistory {
    const FILENAME: &'static str = "rates.json";

    fn default_dir(dirs: &ProjectDirs) -> &Path {
        dirs.cache_dir()
    }
}

/// JSON file holding one [`StoredDocument`].
///
/// Writes are atomic: the document is written to a temporary file that is
/// then renamed over the target.
#[derive(Debug, Clone)]
pub struct JsonStore<T> {
    path: PathBuf,
    _document: PhantomData<fn() -> T>,
}

/// Store for the saved filter archive.
pub type FilterStore = JsonStore<FilterArchive>;

/// Store for price history.
pub type RatesStore = JsonStore<PriceHistory>;

impl<T: StoredDocument> JsonStore<T> {
    /// Creates a store at the default XDG path.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NoDataDir` if the home directory cannot be determined.
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(Self::default_path()?))
    }

    /// Creates a store at a custom path.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path,
            _document: PhantomData,
        }
    }

    /// Returns the default XDG path of this document.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NoDataDir` if the home directory cannot be determined.
    pub fn default_path() -> Result<PathBuf> {
        let dirs =
            ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION).ok_or(StoreError::NoDataDir)?;
        Ok(T::default_dir(&dirs).join(T::FILENAME))
    }

    /// Returns the path of the file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns true if the file exists on disk.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Loads the document.
    ///
    /// # Errors
    ///
    /// - Returns `StoreError::ReadError` if the file cannot be read.
    /// - Returns `StoreError::Json` if the file contains invalid JSON.
    pub fn load(&self) -> Result<T> {
        let contents = fs::read_to_string(&self.path).map_err(|e| self.read_error(e))?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Loads the document, returning an empty one if the file doesn't exist.
    ///
    /// # Errors
    ///
    /// Same as [`load()`](Self::load), except for a missing file.
    pub fn load_or_default(&self) -> Result<T> {
        match self.load() {
            Err(StoreError::ReadError { ref source, .. })
                if source.kind() == io::ErrorKind::NotFound =>
            {
                Ok(T::default())
            }
            other => other,
        }
    }

    /// Saves the document atomically, creating the parent directory.
    ///
    /// # Errors
    ///
    /// - Returns `StoreError::CreateDirError` if the directory cannot be created.
    /// - Returns `StoreError::WriteError` if the file cannot be written.
    pub fn save(&self, document: &T) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StoreError::CreateDirError {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let json = serde_json::to_string_pretty(document)?;
        let temp_path = self.temp_path();
        fs::write(&temp_path, &json).map_err(|e| StoreError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;
        fs::rename(&temp_path, &self.path).map_err(|e| self.write_error(e))?;
        Ok(())
    }

    // =========================================================================
    // Async I/O Methods
    // =========================================================================

    /// Async equivalent of [`load()`](Self::load).
    ///
    /// # Errors
    ///
    /// Same as [`load()`](Self::load).
    pub async fn load_async(&self) -> Result<T> {
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| self.read_error(e))?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Async equivalent of [`load_or_default()`](Self::load_or_default).
    ///
    /// # Errors
    ///
    /// Same as [`load_or_default()`](Self::load_or_default).
    pub async fn load_or_default_async(&self) -> Result<T> {
        match self.load_async().await {
            Err(StoreError::ReadError { ref source, .. })
                if source.kind() == io::ErrorKind::NotFound =>
            {
                Ok(T::default())
            }
            other => other,
        }
    }

    /// Async equivalent of [`save()`](Self::save).
    ///
    /// # Errors
    ///
    /// Same as [`save()`](Self::save).
    pub async fn save_async(&self, document: &T) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::CreateDirError {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
        }

        let json = serde_json::to_string_pretty(document)?;
        let temp_path = self.temp_path();
        tokio::fs::write(&temp_path, &json)
            .await
            .map_err(|e| StoreError::WriteError {
                path: temp_path.clone(),
                source: e,
            })?;
        tokio::fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| self.write_error(e))?;
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("tmp")
    }

    fn read_error(&self, source: io::Error) -> StoreError {
        StoreError::ReadError {
            path: self.path.clone(),
            source,
        }
    }

    fn write_error(&self, source: io::Error) -> StoreError {
        StoreError::WriteError {
            path: self.path.clone(),
            source,
        }
    }
}
