// crates/countrydb-core/src/loader/mod.rs

//! # Data Loader
//!
//! Obtains the two dataset variants and keeps them for the lifetime of the
//! owning [`DatasetCache`]:
//! - [`FlagType::Emoji`]: the table bundled into the binary, no I/O.
//! - [`FlagType::Image`]: one fetch from [`LoaderConfig::remote_url`].
//!
//! A slot is filled once, on first use, and never invalidated. A failed load
//! leaves the slot empty so the next call fetches again.

use crate::error::{CountryError, Result};
use crate::model::{CountryTable, FlagType};
use once_cell::sync::OnceCell;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

mod bundled;
mod common_io;
mod remote;

#[cfg(feature = "remote")]
pub use remote::HttpFetcher;
pub use remote::{DefaultFetcher, OfflineFetcher, RemoteFetcher};

pub const REMOTE_DATASET_URL: &str =
    "https://xcarpentier.github.io/react-native-country-picker-modal/countries/";

/// Where the image-flag dataset comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    pub remote_url: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        LoaderConfig {
            remote_url: REMOTE_DATASET_URL.to_string(),
        }
    }
}

impl LoaderConfig {
    pub fn with_remote_url(mut self, url: impl Into<String>) -> Self {
        self.remote_url = url.into();
        self
    }
}

/// Two independently lazy slots, one per [`FlagType`].
#[derive(Debug, Default)]
pub struct DatasetCache {
    emoji: OnceCell<Arc<CountryTable>>,
    image: OnceCell<Arc<CountryTable>>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, flag_type: FlagType) -> &OnceCell<Arc<CountryTable>> {
        match flag_type {
            FlagType::Emoji => &self.emoji,
            FlagType::Image => &self.image,
        }
    }

    pub fn get(&self, flag_type: FlagType) -> Option<Arc<CountryTable>> {
        self.slot(flag_type).get().cloned()
    }

    pub fn is_populated(&self, flag_type: FlagType) -> bool {
        self.slot(flag_type).get().is_some()
    }

    /// Fills the slot of `table.flag_type()` if it is still empty.
    /// Returns `false` when the slot was already populated.
    pub fn populate(&self, table: CountryTable) -> bool {
        let flag_type = table.flag_type();
        let count = table.len();
        let stored = self.slot(flag_type).set(Arc::new(table)).is_ok();
        if stored {
            info!(%flag_type, countries = count, "dataset slot populated");
        }
        stored
    }

    /// Returns the cached table, or runs `init` to fill the slot.
    pub fn get_or_load<F>(&self, flag_type: FlagType, init: F) -> Result<Arc<CountryTable>>
    where
        F: FnOnce() -> Result<CountryTable>,
    {
        let slot = self.slot(flag_type);
        if let Some(table) = slot.get() {
            debug!(%flag_type, "dataset cache hit");
            return Ok(Arc::clone(table));
        }

        slot.get_or_try_init(|| {
            let table = init()?;
            info!(%flag_type, countries = table.len(), "dataset slot populated");
            Ok(Arc::new(table))
        })
        .cloned()
    }
}

/// Loads `flag_type` without consulting any cache.
pub(crate) fn load_table<F: RemoteFetcher + ?Sized>(
    flag_type: FlagType,
    fetcher: &F,
    config: &LoaderConfig,
) -> Result<CountryTable> {
    match flag_type {
        FlagType::Emoji => bundled::emoji_table(),
        FlagType::Image => {
            let body = fetcher.fetch(&config.remote_url).map_err(|e| {
                warn!(url = config.remote_url.as_str(), "dataset fetch failed: {}", e);
                unavailable(e)
            })?;
            CountryTable::from_json_str(&body, FlagType::Image).map_err(|e| {
                warn!(url = config.remote_url.as_str(), "dataset parse failed: {}", e);
                unavailable(e)
            })
        }
    }
}

fn unavailable(e: CountryError) -> CountryError {
    match e {
        CountryError::DataUnavailable(_) => e,
        other => CountryError::DataUnavailable(other.to_string()),
    }
}

impl CountryTable {
    /// Reads a table from a local `.json` file (or `.json.gz` with the
    /// `compact` feature).
    pub fn load_from_path(path: impl AsRef<Path>, flag_type: FlagType) -> Result<Self> {
        let path = path.as_ref();
        let reader = common_io::open_stream(path)?;
        let table = Self::from_reader(reader, flag_type)?;
        debug!(path = %path.display(), countries = table.len(), "dataset read from file");
        Ok(table)
    }

    /// The emoji-flag table shipped with the crate.
    pub fn bundled() -> Result<Self> {
        bundled::emoji_table()
    }
}
