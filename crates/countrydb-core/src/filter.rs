// crates/countrydb-core/src/filter.rs
use crate::model::{CountryCode, CountryTable, ListedCountry, Region};
use crate::options::ListOptions;
use crate::text::collate;
use crate::traits::DisplayName;
use std::collections::HashSet;

/// Builds the list shown by the picker.
///
/// 1. Base order: `preferred` (deduplicated) followed by the remaining codes
///    in table order, or just table order when `preferred` is empty.
/// 2. Codes missing from the table are dropped.
/// 3. Each record gets its display name for `options.translation`.
/// 4. Region, subregion, include and exclude predicates are applied; an
///    absent or empty filter does not restrict.
/// 5. Without `preferred`, survivors are sorted by display name with
///    [`collate`]. With `preferred`, the base order is kept as is.
///
/// # Examples
///
/// ```rust
/// use countrydb_core::{build_list, CountryTable, FlagType, ListOptions};
///
/// let table = CountryTable::from_json_str(
///     r#"{
///         "FR": { "name": { "common": "France" }, "region": "Europe", "callingCode": ["33"] },
///         "US": { "name": { "common": "United States" }, "region": "Americas", "callingCode": ["1"] }
///     }"#,
///     FlagType::Emoji,
/// ).unwrap();
///
/// let list = build_list(&table, &ListOptions::default().with_preferred(["US"]));
/// let names: Vec<_> = list.iter().map(|c| c.name.as_str()).collect();
/// assert_eq!(names, ["United States", "France"]);
/// ```
pub fn build_list(table: &CountryTable, options: &ListOptions) -> Vec<ListedCountry> {
    let mut list: Vec<ListedCountry> = base_order(table, &options.preferred)
        .into_iter()
        .filter_map(|code| table.lookup(code))
        .map(|country| ListedCountry::from_country(country, &options.translation))
        .filter(|c| is_region(options.region, c))
        .filter(|c| is_subregion(options.subregion.as_deref(), c))
        .filter(|c| is_included(&options.include, c))
        .filter(|c| is_excluded(&options.exclude, c))
        .collect();

    if !options.is_preferred_mode() {
        sort_by_name(&mut list);
    }
    list
}

/// Sorts entries ascending by display name. Stable, so sorting twice is a
/// no-op.
pub fn sort_by_name<T: DisplayName>(list: &mut [T]) {
    list.sort_by(|a, b| collate(a.display_name(), b.display_name()));
}

fn base_order<'a>(table: &'a CountryTable, preferred: &'a [CountryCode]) -> Vec<&'a CountryCode> {
    if preferred.is_empty() {
        return table.codes().collect();
    }

    let mut seen: HashSet<&CountryCode> = HashSet::with_capacity(table.len());
    let mut order = Vec::with_capacity(table.len());
    for code in preferred.iter().chain(table.codes()) {
        if seen.insert(code) {
            order.push(code);
        }
    }
    order
}

fn is_region(region: Option<Region>, country: &ListedCountry) -> bool {
    region.map_or(true, |r| country.region == Some(r))
}

fn is_subregion(subregion: Option<&str>, country: &ListedCountry) -> bool {
    subregion.map_or(true, |s| country.subregion.as_deref() == Some(s))
}

fn is_included(include: &[CountryCode], country: &ListedCountry) -> bool {
    include.is_empty() || include.contains(&country.code)
}

fn is_excluded(exclude: &[CountryCode], country: &ListedCountry) -> bool {
    exclude.is_empty() || !exclude.contains(&country.code)
}
