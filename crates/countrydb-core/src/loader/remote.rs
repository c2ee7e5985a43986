// crates/countrydb-core/src/loader/remote.rs
use crate::error::{CountryError, Result};

/// Performs the single outbound fetch of the image-flag dataset.
///
/// One attempt per call; no retry, no timeout beyond the implementor's own.
pub trait RemoteFetcher: Send + Sync {
    /// Returns the response body of `url`.
    fn fetch(&self, url: &str) -> Result<String>;
}

/// Blocking HTTPS fetch via `reqwest`.
#[cfg(feature = "remote")]
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpFetcher;

#[cfg(feature = "remote")]
impl RemoteFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        tracing::debug!(url, "fetching remote dataset");
        let response = reqwest::blocking::get(url)
            .and_then(|r| r.error_for_status())
            .map_err(|e| CountryError::DataUnavailable(e.to_string()))?;
        response
            .text()
            .map_err(|e| CountryError::DataUnavailable(e.to_string()))
    }
}

/// Fetcher for builds without network access: always unavailable.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineFetcher;

impl RemoteFetcher for OfflineFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        Err(CountryError::DataUnavailable(format!(
            "remote fetching is disabled (requested {url})"
        )))
    }
}

#[cfg(feature = "remote")]
pub type DefaultFetcher = HttpFetcher;
#[cfg(not(feature = "remote"))]
pub type DefaultFetcher = OfflineFetcher;
