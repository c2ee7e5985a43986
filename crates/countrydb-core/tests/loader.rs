mod common;

use common::TWO_COUNTRIES;
use countrydb_core::prelude::*;
use countrydb_core::DatasetCache;
use std::io::Write;

#[test]
fn loads_a_table_from_a_json_file() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(TWO_COUNTRIES.as_bytes()).unwrap();

    let table = CountryTable::load_from_path(file.path(), FlagType::Image).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.flag_type(), FlagType::Image);
}

#[cfg(feature = "compact")]
#[test]
fn loads_a_gzipped_table() {
    use flate2::{write::GzEncoder, Compression};

    let file = tempfile::Builder::new().suffix(".json.gz").tempfile().unwrap();
    let mut encoder = GzEncoder::new(file.reopen().unwrap(), Compression::default());
    encoder.write_all(TWO_COUNTRIES.as_bytes()).unwrap();
    encoder.finish().unwrap();

    let table = CountryTable::load_from_path(file.path(), FlagType::Emoji).unwrap();
    assert!(table.get("us").is_some());
}

#[test]
fn missing_file_is_not_found() {
    let err = CountryTable::load_from_path("/definitely/not/here.json", FlagType::Emoji).unwrap_err();
    assert!(matches!(err, CountryError::NotFound(_)));
}

#[test]
fn single_string_names_and_sparse_records_parse() {
    let table = CountryTable::from_json_str(
        r#"{
            "aq": { "name": "Antarctica", "region": "Antarctic", "subregion": "", "callingCode": [] },
            "XX1": { "name": "Bogus" },
            "ZZ": { "name": "Nowhere", "region": "Atlantis", "callingCode": ["0"] }
        }"#,
        FlagType::Emoji,
    )
    .unwrap();

    assert_eq!(table.len(), 2);
    let aq = table.get("AQ").unwrap();
    assert_eq!(aq.code.as_str(), "AQ");
    assert_eq!(resolve_name(aq, "fra"), "Antarctica");
    assert_eq!(aq.region, Some(Region::Antarctic));
    assert_eq!(aq.subregion, None);
    assert_eq!(aq.calling_code(), None);
    assert_eq!(table.get("ZZ").unwrap().region, None);
}

#[test]
fn table_iterates_in_code_order() {
    let table = CountryTable::bundled().unwrap();
    let codes: Vec<_> = table.codes().map(|c| c.as_str()).collect();
    let mut sorted = codes.clone();
    sorted.sort_unstable();
    assert_eq!(codes, sorted);
}

#[test]
fn populate_fills_a_slot_only_once() {
    let cache = DatasetCache::new();
    let table = CountryTable::from_json_str(TWO_COUNTRIES, FlagType::Emoji).unwrap();

    assert!(cache.populate(table.clone()));
    assert!(!cache.populate(table));
    assert!(cache.is_populated(FlagType::Emoji));
    assert!(!cache.is_populated(FlagType::Image));
}

#[test]
fn failed_initialiser_leaves_slot_empty() {
    let cache = DatasetCache::new();
    let result = cache.get_or_load(FlagType::Image, || {
        Err(CountryError::DataUnavailable("offline".into()))
    });
    assert!(result.is_err());
    assert!(cache.get(FlagType::Image).is_none());

    let table = cache
        .get_or_load(FlagType::Image, || CountryTable::from_json_str(TWO_COUNTRIES, FlagType::Image))
        .unwrap();
    assert_eq!(table.len(), 2);
}
