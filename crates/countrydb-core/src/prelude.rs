// crates/countrydb-core/src/prelude.rs
pub use crate::error::{CountryError, Result};
pub use crate::filter::build_list;
pub use crate::letters::build_letters;
pub use crate::loader::{LoaderConfig, RemoteFetcher};
pub use crate::model::{
    Country, CountryCode, CountryInfo, CountryName, CountryTable, FlagType, ListedCountry,
    Region,
};
pub use crate::names::{resolve_name, COMMON_TRANSLATION};
pub use crate::options::{ListOptions, SearchOptions};
pub use crate::search::SearchIndex;
pub use crate::service::CountryService;
pub use crate::traits::DisplayName;
