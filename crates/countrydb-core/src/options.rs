// crates/countrydb-core/src/options.rs

//! # Options
//!
//! Every knob the list pipeline and the search index recognise, with its
//! default. Absent filters mean "no restriction".

use crate::model::{CountryCode, FlagType, Region};
use crate::names::COMMON_TRANSLATION;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Similarity threshold used when none is configured.
pub const DEFAULT_SEARCH_THRESHOLD: f32 = 0.3;

/// Filter and ordering options for [`build_list`](crate::filter::build_list).
///
/// A non-empty `preferred` list pins those codes to the front and disables
/// the alphabetical sort of the result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListOptions {
    pub flag_type: FlagType,
    pub translation: String,
    pub region: Option<Region>,
    pub subregion: Option<String>,
    /// Allow-list; empty means every country.
    pub include: Vec<CountryCode>,
    /// Deny-list; empty means none.
    pub exclude: Vec<CountryCode>,
    pub preferred: Vec<CountryCode>,
}

impl Default for ListOptions {
    fn default() -> Self {
        ListOptions {
            flag_type: FlagType::Emoji,
            translation: COMMON_TRANSLATION.to_string(),
            region: None,
            subregion: None,
            include: Vec::new(),
            exclude: Vec::new(),
            preferred: Vec::new(),
        }
    }
}

impl ListOptions {
    pub fn with_flag_type(mut self, flag_type: FlagType) -> Self {
        self.flag_type = flag_type;
        self
    }

    pub fn with_translation(mut self, translation: impl Into<String>) -> Self {
        self.translation = translation.into();
        self
    }

    pub fn with_region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    pub fn with_subregion(mut self, subregion: impl Into<String>) -> Self {
        self.subregion = Some(subregion.into());
        self
    }

    /// Malformed codes are dropped.
    pub fn with_include<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.include = parse_codes(codes);
        self
    }

    pub fn with_exclude<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.exclude = parse_codes(codes);
        self
    }

    pub fn with_preferred<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.preferred = parse_codes(codes);
        self
    }

    /// True when `preferred` drives the order instead of the name sort.
    pub fn is_preferred_mode(&self) -> bool {
        !self.preferred.is_empty()
    }
}

fn parse_codes<I, S>(codes: I) -> Vec<CountryCode>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    codes
        .into_iter()
        .filter_map(|c| match CountryCode::new(c.as_ref()) {
            Ok(code) => Some(code),
            Err(e) => {
                warn!("ignoring filter entry: {}", e);
                None
            }
        })
        .collect()
}

/// Tuning for [`SearchIndex`](crate::search::SearchIndex).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Share of the query (0.0..=1.0) that may be missing from a key
    /// while still counting as a match.
    pub threshold: f32,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            threshold: DEFAULT_SEARCH_THRESHOLD,
        }
    }
}
