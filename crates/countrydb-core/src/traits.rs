// crates/countrydb-core/src/traits.rs
use crate::model::ListedCountry;

/// Access to the resolved display name of a list entry.
///
/// Sorting and the letter index only need this view, so they work over
/// [`ListedCountry`] as well as plain strings.
///
/// # Examples
/// ```rust
/// use countrydb_core::{build_letters, traits::DisplayName};
///
/// struct Place(&'static str);
/// impl DisplayName for Place {
///     fn display_name(&self) -> &str { self.0 }
/// }
///
/// assert_eq!(build_letters(&[Place("Réunion"), Place("Peru")]), ["P", "R"]);
/// ```
pub trait DisplayName {
    fn display_name(&self) -> &str;
}

impl DisplayName for ListedCountry {
    fn display_name(&self) -> &str {
        &self.name
    }
}

impl DisplayName for String {
    fn display_name(&self) -> &str {
        self
    }
}

impl DisplayName for &str {
    fn display_name(&self) -> &str {
        self
    }
}
