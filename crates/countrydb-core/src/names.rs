// crates/countrydb-core/src/names.rs
use crate::model::{Country, CountryName};

/// Translation language code that every name mapping carries.
pub const COMMON_TRANSLATION: &str = "common";

impl CountryName {
    /// Name for `translation`, falling back to the `"common"` entry.
    ///
    /// A single-string name ignores `translation`. A translation that is
    /// missing or empty degrades to `"common"`; a mapping without `"common"`
    /// resolves to `""`.
    ///
    /// ```rust
    /// use countrydb_core::CountryName;
    /// use std::collections::BTreeMap;
    ///
    /// let name = CountryName::Translations(BTreeMap::from([
    ///     ("common".to_string(), "Germany".to_string()),
    ///     ("fra".to_string(), "Allemagne".to_string()),
    /// ]));
    /// assert_eq!(name.resolve("fra"), "Allemagne");
    /// assert_eq!(name.resolve("jpn"), "Germany");
    /// ```
    pub fn resolve(&self, translation: &str) -> &str {
        match self {
            CountryName::Common(name) => name,
            CountryName::Translations(map) => map
                .get(translation)
                .filter(|v| !v.is_empty())
                .or_else(|| map.get(COMMON_TRANSLATION))
                .map(String::as_str)
                .unwrap_or_default(),
        }
    }

    /// The `"common"` name.
    pub fn common(&self) -> &str {
        self.resolve(COMMON_TRANSLATION)
    }
}

/// Display name of `country` for `translation`. Never fails.
pub fn resolve_name<'a>(country: &'a Country, translation: &str) -> &'a str {
    country.name.resolve(translation)
}
