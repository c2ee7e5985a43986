// crates/countrydb-core/src/service.rs
use crate::error::{CountryError, Result};
use crate::filter::build_list;
use crate::loader::{self, DatasetCache, DefaultFetcher, LoaderConfig, OfflineFetcher, RemoteFetcher};
use crate::model::{Country, CountryInfo, CountryTable, FlagType, ListedCountry};
use crate::names::resolve_name;
use crate::options::ListOptions;
use std::sync::Arc;

/// Entry point for callers: owns the dataset cache and the remote fetcher.
///
/// Tables are loaded lazily per [`FlagType`] and reused for the lifetime of
/// the service. Only the image table ever touches the network.
#[derive(Debug)]
pub struct CountryService<F: RemoteFetcher = DefaultFetcher> {
    cache: DatasetCache,
    fetcher: F,
    config: LoaderConfig,
}

impl Default for CountryService<DefaultFetcher> {
    fn default() -> Self {
        Self::new()
    }
}

impl CountryService<DefaultFetcher> {
    pub fn new() -> Self {
        Self::with_config(LoaderConfig::default())
    }

    pub fn with_config(config: LoaderConfig) -> Self {
        Self::with_fetcher(DefaultFetcher::default(), config)
    }
}

impl CountryService<OfflineFetcher> {
    /// A service that never fetches; the image table is unavailable unless
    /// provided through [`CountryService::with_table`].
    pub fn offline() -> Self {
        Self::with_fetcher(OfflineFetcher, LoaderConfig::default())
    }
}

impl<F: RemoteFetcher> CountryService<F> {
    pub fn with_fetcher(fetcher: F, config: LoaderConfig) -> Self {
        CountryService {
            cache: DatasetCache::new(),
            fetcher,
            config,
        }
    }

    /// Seeds the slot of `table.flag_type()` (e.g. from a local file).
    pub fn with_table(self, table: CountryTable) -> Self {
        self.cache.populate(table);
        self
    }

    pub fn cache(&self) -> &DatasetCache {
        &self.cache
    }

    /// Returns the table for `flag_type`, loading it on first use.
    pub fn load(&self, flag_type: FlagType) -> Result<Arc<CountryTable>> {
        self.cache.get_or_load(flag_type, || {
            loader::load_table(flag_type, &self.fetcher, &self.config)
        })
    }

    /// Loads the table selected by `options.flag_type` and runs
    /// [`build_list`] over it.
    pub fn countries(&self, options: &ListOptions) -> Result<Vec<ListedCountry>> {
        let table = self.load(options.flag_type)?;
        Ok(build_list(&table, options))
    }

    pub fn emoji_flag(&self, code: &str) -> Result<String> {
        self.lookup(FlagType::Emoji, code, |c| c.flag.clone())
    }

    pub fn image_flag(&self, code: &str) -> Result<String> {
        self.lookup(FlagType::Image, code, |c| c.flag.clone())
    }

    pub fn country_name(&self, code: &str, translation: &str) -> Result<String> {
        self.lookup(FlagType::Emoji, code, |c| {
            resolve_name(c, translation).to_string()
        })
    }

    pub fn calling_code(&self, code: &str) -> Result<Option<String>> {
        self.lookup(FlagType::Emoji, code, |c| c.calling_code().map(str::to_string))
    }

    pub fn currency(&self, code: &str) -> Result<Option<String>> {
        self.lookup(FlagType::Emoji, code, |c| c.currency().map(str::to_string))
    }

    pub fn country_info(&self, code: &str, translation: &str) -> Result<CountryInfo> {
        self.lookup(FlagType::Emoji, code, |c| CountryInfo {
            country_name: resolve_name(c, translation).to_string(),
            calling_code: c.calling_code().map(str::to_string),
            currency: c.currency().map(str::to_string),
        })
    }

    fn lookup<T>(&self, flag_type: FlagType, code: &str, f: impl FnOnce(&Country) -> T) -> Result<T> {
        let table = self.load(flag_type)?;
        table
            .get(code)
            .map(f)
            .ok_or_else(|| CountryError::UnknownCountryCode(code.trim().to_string()))
    }
}
