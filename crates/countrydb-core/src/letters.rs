// crates/countrydb-core/src/letters.rs
use crate::text::{collate, first_letter};
use crate::traits::DisplayName;

/// Unique first letters of the display names, for jump-to-letter navigation.
///
/// Letters are upper-cased and ordered with [`collate`], so `Å` lands right
/// after `A`. Entries with an empty name contribute nothing.
///
/// ```rust
/// use countrydb_core::build_letters;
///
/// let names = vec!["france".to_string(), "Åland Islands".to_string(), "Algeria".to_string()];
/// assert_eq!(build_letters(&names), ["A", "Å", "F"]);
/// ```
pub fn build_letters<T: DisplayName>(list: &[T]) -> Vec<String> {
    let mut letters: Vec<String> = list
        .iter()
        .filter_map(|entry| first_letter(entry.display_name()))
        .collect();
    letters.sort_by(|a, b| collate(a, b));
    letters.dedup();
    letters
}
