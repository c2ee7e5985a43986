// crates/countrydb-core/src/loader/bundled.rs
use crate::error::{CountryError, Result};
use crate::model::{CountryTable, FlagType};

static EMOJI_JSON: &str = include_str!("../../data/countries-emoji.json");

pub(super) fn emoji_table() -> Result<CountryTable> {
    CountryTable::from_json_str(EMOJI_JSON, FlagType::Emoji)
        .map_err(|e| CountryError::DataUnavailable(format!("bundled dataset: {e}")))
}
