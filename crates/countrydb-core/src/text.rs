// crates/countrydb-core/src/text.rs
use std::cmp::Ordering;

/// Convert a string into a folded key suitable for matching and comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Åland` -> `Aland`)
/// 2\) Normalize to lowercase
///
/// # Examples
///
/// ```rust
/// use countrydb_core::fold_key;
///
/// assert_eq!(fold_key("Côte d'Ivoire"), "cote d'ivoire");
/// assert_eq!(fold_key("RÉUNION"), "reunion");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Locale-style ordering of display names.
///
/// Three levels, the way a collator ranks strings:
/// - primary: base letters (folded key), so `Åland` sorts among the `A`s
/// - secondary: accents (`Cote` before `Côte`)
/// - tertiary: case, lower before upper
///
/// Remaining ties fall back to code point order so the result is total.
pub fn collate(a: &str, b: &str) -> Ordering {
    fold_key(a)
        .cmp(&fold_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

/// First character of `s`, upper-cased (`"équateur"` -> `"É"`).
///
/// Upper-casing follows Unicode full case mapping, the same as a locale
/// upper-case in a browser: a character with a multi-character capital
/// keeps it whole, so `"ßtadt"` gives `"SS"`.
pub fn first_letter(s: &str) -> Option<String> {
    s.chars().next().map(|c| c.to_uppercase().collect())
}
