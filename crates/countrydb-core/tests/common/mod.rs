#![allow(dead_code)]

use countrydb_core::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

pub const TWO_COUNTRIES: &str = r#"{
    "FR": {
        "name": { "common": "France", "deu": "Frankreich" },
        "region": "Europe",
        "subregion": "Western Europe",
        "callingCode": ["33"],
        "currency": ["EUR"],
        "flag": "flag-fr"
    },
    "US": {
        "name": { "common": "United States", "deu": "Vereinigte Staaten" },
        "region": "Americas",
        "subregion": "North America",
        "callingCode": ["1"],
        "currency": ["USD"],
        "flag": "flag-us"
    }
}"#;

pub fn two_countries() -> CountryTable {
    CountryTable::from_json_str(TWO_COUNTRIES, FlagType::Emoji).expect("fixture parses")
}

pub fn bundled() -> CountryTable {
    CountryTable::bundled().expect("bundled dataset parses")
}

pub fn names(list: &[ListedCountry]) -> Vec<&str> {
    list.iter().map(|c| c.name.as_str()).collect()
}

pub fn codes(list: &[ListedCountry]) -> Vec<&str> {
    list.iter().map(|c| c.code.as_str()).collect()
}

/// Serves queued responses in order and counts calls.
#[derive(Default)]
pub struct StubFetcher {
    responses: Mutex<Vec<Result<String>>>,
    calls: AtomicUsize,
}

impl StubFetcher {
    pub fn new(mut responses: Vec<Result<String>>) -> Self {
        responses.reverse();
        StubFetcher {
            responses: Mutex::new(responses),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl RemoteFetcher for StubFetcher {
    fn fetch(&self, _url: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses
            .lock()
            .unwrap()
            .pop()
            .unwrap_or_else(|| Err(CountryError::DataUnavailable("no response queued".into())))
    }
}

impl RemoteFetcher for &StubFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        (**self).fetch(url)
    }
}
