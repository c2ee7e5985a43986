mod common;

use common::{bundled, codes, two_countries};
use countrydb_core::prelude::*;

fn full_list() -> Vec<ListedCountry> {
    build_list(&bundled(), &ListOptions::default())
}

#[test]
fn fuzzy_prefix_finds_the_country() {
    let list = build_list(&two_countries(), &ListOptions::default());
    let mut index = SearchIndex::default();
    assert_eq!(codes(&index.search("fra", &list)), ["FR"]);
}

#[test]
fn unrelated_query_finds_nothing() {
    let list = build_list(&two_countries(), &ListOptions::default());
    let mut index = SearchIndex::default();
    assert!(index.search("xyz", &list).is_empty());
}

#[test]
fn empty_query_returns_the_list_unchanged() {
    let list = full_list();
    let mut index = SearchIndex::default();
    assert_eq!(index.search("", &list), list);
    assert_eq!(index.search("   ", &list), list);
}

#[test]
fn empty_list_returns_nothing() {
    let mut index = SearchIndex::default();
    assert!(index.search("france", &[]).is_empty());
    assert!(index.search("", &[]).is_empty());
}

#[test]
fn best_match_comes_first() {
    let mut index = SearchIndex::default();
    let hits = index.search("germ", &full_list());
    assert_eq!(hits[0].code.as_str(), "DE");
}

#[test]
fn matches_country_codes_and_calling_codes() {
    let list = full_list();
    let mut index = SearchIndex::default();
    assert_eq!(index.search("jp", &list)[0].code.as_str(), "JP");
    assert_eq!(index.search("33", &list)[0].code.as_str(), "FR");
}

#[test]
fn shared_calling_code_finds_every_owner() {
    let mut index = SearchIndex::default();
    let hits = index.search("44", &full_list());
    let found = codes(&hits);
    for code in ["GB", "GG", "IM", "JE"] {
        assert!(found.contains(&code), "missing {code}");
    }
}

#[test]
fn tolerates_a_missing_letter() {
    let mut index = SearchIndex::default();
    let hits = index.search("swizerland", &full_list());
    assert!(codes(&hits).contains(&"CH"));
}

#[test]
fn accents_do_not_block_a_match() {
    let mut index = SearchIndex::default();
    let hits = index.search("reunion", &full_list());
    assert_eq!(hits[0].code.as_str(), "RE");
}

#[test]
fn every_call_indexes_the_list_it_is_given() {
    let mut index = SearchIndex::default();
    let europe = build_list(&bundled(), &ListOptions::default().with_region(Region::Europe));
    let asia = build_list(&bundled(), &ListOptions::default().with_region(Region::Asia));

    assert!(codes(&index.search("france", &europe)).contains(&"FR"));
    let hits = index.search("france", &asia);
    assert!(!codes(&hits).contains(&"FR"));
    assert_eq!(index.len(), asia.len());
}

#[test]
fn results_are_a_subset_of_the_list() {
    let list = build_list(&bundled(), &ListOptions::default().with_region(Region::Africa));
    let mut index = SearchIndex::default();
    for hit in index.search("ia", &list) {
        assert!(list.contains(&hit));
    }
}

#[test]
fn query_reuses_the_current_collection() {
    let list = full_list();
    let mut index = SearchIndex::new(SearchOptions::default());
    index.rebuild(&list);
    assert_eq!(index.query("japan")[0].code.as_str(), "JP");
    assert_eq!(index.query(""), list);
}
