// crates/countrydb-core/src/error.rs
use thiserror::Error;

/// Errors surfaced by the country directory.
///
/// Only loading and single-country lookups fail. Filtering, searching and
/// letter-index building never return an error.
#[derive(Debug, Error)]
pub enum CountryError {
    /// The remote fetch or the parse of a dataset failed. The cache slot
    /// stays empty, so a later call retries.
    #[error("Dataset unavailable: {0}")]
    DataUnavailable(String),

    /// A single-country lookup asked for a code that is not in the table.
    #[error("Unknown country code: {0}")]
    UnknownCountryCode(String),

    /// Text that is not a two-letter country code.
    #[error("Invalid country code: {0:?}")]
    InvalidCountryCode(String),

    /// A local dataset file could not be opened.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CountryError>;
