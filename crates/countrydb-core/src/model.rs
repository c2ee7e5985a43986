// crates/countrydb-core/src/model.rs
use crate::error::{CountryError, Result};
use crate::names::resolve_name;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

// -----------------------------------------------------------------------------
// RAW INPUT (wire format of both dataset variants)
// -----------------------------------------------------------------------------

/// Raw country record as it comes from JSON.
///
/// ```json
/// "FR": {
///   "currency": ["EUR"],
///   "callingCode": ["33"],
///   "region": "Europe",
///   "subregion": "Western Europe",
///   "flag": "🇫🇷",
///   "name": { "common": "France", "deu": "Frankreich" }
/// }
/// ```
#[derive(Debug, Deserialize)]
pub(crate) struct CountryRaw {
    pub name: CountryName,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub subregion: Option<String>,
    #[serde(rename = "callingCode", default)]
    pub calling_code: Vec<String>,
    #[serde(default)]
    pub currency: Vec<String>,
    #[serde(default)]
    pub flag: String,
}

/// The table as served: an object keyed by two-letter code.
pub(crate) type CountriesRaw = BTreeMap<String, CountryRaw>;

// -----------------------------------------------------------------------------
// DOMAIN TYPES
// -----------------------------------------------------------------------------

/// Two-letter country identifier, always stored upper-case (e.g. `"FR"`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode(String);

impl CountryCode {
    /// Parses a code, accepting any case.
    ///
    /// ```rust
    /// use countrydb_core::CountryCode;
    ///
    /// assert_eq!(CountryCode::new("fr").unwrap().as_str(), "FR");
    /// assert!(CountryCode::new("FRA").is_err());
    /// ```
    pub fn new(code: &str) -> Result<Self> {
        let code = code.trim();
        if code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic()) {
            Ok(Self(code.to_ascii_uppercase()))
        } else {
            Err(CountryError::InvalidCountryCode(code.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CountryCode {
    type Err = CountryError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for CountryCode {
    type Error = CountryError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> Self {
        code.0
    }
}

impl AsRef<str> for CountryCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for CountryCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Display name of a record: one string, or one string per translation
/// language code (with a `"common"` entry as the fallback).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CountryName {
    Common(String),
    Translations(BTreeMap<String, String>),
}

/// Continental classification used by the region filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Region {
    Africa,
    Americas,
    Antarctic,
    Asia,
    Europe,
    Oceania,
}

impl Region {
    pub const ALL: [Region; 6] = [
        Region::Africa,
        Region::Americas,
        Region::Antarctic,
        Region::Asia,
        Region::Europe,
        Region::Oceania,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Africa => "Africa",
            Region::Americas => "Americas",
            Region::Antarctic => "Antarctic",
            Region::Asia => "Asia",
            Region::Europe => "Europe",
            Region::Oceania => "Oceania",
        }
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        Region::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown region: {s}"))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which dataset variant, and therefore which kind of `flag` value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagType {
    /// Symbolic glyph (`"🇫🇷"`), bundled with the crate.
    #[default]
    Emoji,
    /// Opaque image reference (data URI), fetched from the remote dataset.
    Image,
}

impl fmt::Display for FlagType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagType::Emoji => f.write_str("emoji"),
            FlagType::Image => f.write_str("image"),
        }
    }
}

/// A country record of the loaded table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Country {
    pub code: CountryCode,
    pub name: CountryName,
    pub region: Option<Region>,
    pub subregion: Option<String>,
    /// Dialing codes without the leading `+`; the first one is canonical.
    pub calling_codes: Vec<String>,
    pub currency_codes: Vec<String>,
    pub flag: String,
}

impl Country {
    /// Canonical calling code (e.g. `"33"`).
    pub fn calling_code(&self) -> Option<&str> {
        self.calling_codes.first().map(String::as_str)
    }

    /// First listed currency (e.g. `"EUR"`).
    pub fn currency(&self) -> Option<&str> {
        self.currency_codes.first().map(String::as_str)
    }

    fn from_raw(code: CountryCode, raw: CountryRaw) -> Self {
        let region = non_empty(raw.region).and_then(|r| match r.parse::<Region>() {
            Ok(region) => Some(region),
            Err(e) => {
                warn!(code = code.as_str(), "{}", e);
                None
            }
        });

        Country {
            code,
            name: raw.name,
            region,
            subregion: non_empty(raw.subregion),
            calling_codes: raw.calling_code,
            currency_codes: raw.currency,
            flag: raw.flag,
        }
    }
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// A loaded dataset variant.
///
/// Never mutated after construction; the natural order of the table is
/// ascending country code.
#[derive(Debug, Clone)]
pub struct CountryTable {
    flag_type: FlagType,
    countries: BTreeMap<CountryCode, Country>,
}

impl CountryTable {
    /// Parses the JSON object form of the table.
    pub fn from_json_str(json: &str, flag_type: FlagType) -> Result<Self> {
        let raw: CountriesRaw = serde_json::from_str(json)?;
        Ok(Self::from_raw(raw, flag_type))
    }

    pub fn from_reader<R: std::io::Read>(reader: R, flag_type: FlagType) -> Result<Self> {
        let raw: CountriesRaw = serde_json::from_reader(reader)?;
        Ok(Self::from_raw(raw, flag_type))
    }

    pub(crate) fn from_raw(raw: CountriesRaw, flag_type: FlagType) -> Self {
        let mut countries = BTreeMap::new();
        for (key, record) in raw {
            match CountryCode::new(&key) {
                Ok(code) => {
                    countries.insert(code.clone(), Country::from_raw(code, record));
                }
                Err(e) => warn!("skipping record: {}", e),
            }
        }
        CountryTable {
            flag_type,
            countries,
        }
    }

    pub fn from_countries<I: IntoIterator<Item = Country>>(countries: I, flag_type: FlagType) -> Self {
        CountryTable {
            flag_type,
            countries: countries.into_iter().map(|c| (c.code.clone(), c)).collect(),
        }
    }

    pub fn flag_type(&self) -> FlagType {
        self.flag_type
    }

    /// Case-insensitive lookup (`"fr"` finds `FR`).
    pub fn get(&self, code: &str) -> Option<&Country> {
        let code = CountryCode::new(code).ok()?;
        self.countries.get(&code)
    }

    pub fn contains(&self, code: &CountryCode) -> bool {
        self.countries.contains_key(code)
    }

    /// All codes in natural order.
    pub fn codes(&self) -> impl Iterator<Item = &CountryCode> {
        self.countries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Country> {
        self.countries.values()
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub(crate) fn lookup(&self, code: &CountryCode) -> Option<&Country> {
        self.countries.get(code)
    }
}

/// A country as shown in the picker: its display name already resolved for
/// one translation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListedCountry {
    pub code: CountryCode,
    pub name: String,
    pub region: Option<Region>,
    pub subregion: Option<String>,
    pub calling_codes: Vec<String>,
    pub currency_codes: Vec<String>,
    pub flag: String,
}

impl ListedCountry {
    pub fn from_country(country: &Country, translation: &str) -> Self {
        ListedCountry {
            code: country.code.clone(),
            name: resolve_name(country, translation).to_string(),
            region: country.region,
            subregion: country.subregion.clone(),
            calling_codes: country.calling_codes.clone(),
            currency_codes: country.currency_codes.clone(),
            flag: country.flag.clone(),
        }
    }

    pub fn calling_code(&self) -> Option<&str> {
        self.calling_codes.first().map(String::as_str)
    }
}

/// Summary of a single country for the phone input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryInfo {
    pub country_name: String,
    pub calling_code: Option<String>,
    pub currency: Option<String>,
}
