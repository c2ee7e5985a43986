// crates/countrydb-core/src/lib.rs

//! # countrydb-core
//!
//! Country directory engine behind a phone-number country picker.
//!
//! The crate loads a reference table of countries (bundled emoji-flag data,
//! or image-flag data fetched once from a remote location), resolves the
//! localized display name of every record, filters and orders the table
//! according to [`ListOptions`], and answers fuzzy search-box queries over
//! the resulting list. A letter index for jump navigation is derived from
//! the same list.
//!
//! ```rust
//! use countrydb_core::prelude::*;
//!
//! # fn main() -> countrydb_core::Result<()> {
//! let service = CountryService::offline();
//! let options = ListOptions::default().with_region(Region::Europe);
//! let list = service.countries(&options)?;
//!
//! let mut index = SearchIndex::default();
//! let hits = index.search("fra", &list);
//! assert_eq!(hits[0].code.as_str(), "FR");
//!
//! let letters = build_letters(&list);
//! assert!(letters.contains(&"F".to_string()));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod filter;
pub mod letters;
pub mod loader;
pub mod model;
pub mod names;
pub mod options;
pub mod prelude;
pub mod search;
pub mod service;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::error::{CountryError, Result};
pub use crate::filter::build_list;
pub use crate::letters::build_letters;
pub use crate::loader::{DatasetCache, DefaultFetcher, LoaderConfig, RemoteFetcher};
pub use crate::model::{
    Country, CountryCode, CountryInfo, CountryName, CountryTable, FlagType, ListedCountry,
    Region,
};
pub use crate::names::{resolve_name, COMMON_TRANSLATION};
pub use crate::options::{ListOptions, SearchOptions};
pub use crate::search::SearchIndex;
pub use crate::service::CountryService;
pub use crate::text::{collate, fold_key};
