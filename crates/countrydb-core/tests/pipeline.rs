mod common;

use common::{bundled, codes, names, two_countries};
use countrydb_core::filter::sort_by_name;
use countrydb_core::prelude::*;
use countrydb_core::collate;
use std::cmp::Ordering;

fn assert_sorted(list: &[ListedCountry]) {
    for pair in list.windows(2) {
        assert_ne!(
            collate(&pair[0].name, &pair[1].name),
            Ordering::Greater,
            "{} should not sort after {}",
            pair[0].name,
            pair[1].name
        );
    }
}

#[test]
fn region_filter_keeps_matching_countries() {
    let list = build_list(&two_countries(), &ListOptions::default().with_region(Region::Europe));
    assert_eq!(names(&list), ["France"]);
}

#[test]
fn preferred_countries_come_first_unsorted() {
    let list = build_list(&two_countries(), &ListOptions::default().with_preferred(["US"]));
    assert_eq!(names(&list), ["United States", "France"]);
}

#[test]
fn without_preferred_the_list_is_sorted_by_name() {
    let list = build_list(&bundled(), &ListOptions::default());
    assert_eq!(list.len(), bundled().len());
    assert_sorted(&list);
    assert_eq!(list[0].name, "Afghanistan");
}

#[test]
fn sorting_is_idempotent() {
    let list = build_list(&bundled(), &ListOptions::default().with_translation("deu"));
    let mut resorted = list.clone();
    sort_by_name(&mut resorted);
    assert_eq!(resorted, list);
}

#[test]
fn translation_is_resolved_before_sorting() {
    let options = ListOptions::default()
        .with_translation("deu")
        .with_include(["DE", "AT", "FR"]);
    let list = build_list(&bundled(), &options);
    assert_eq!(names(&list), ["Deutschland", "Frankreich", "Österreich"]);
}

#[test]
fn unknown_translation_falls_back_to_common() {
    let list = build_list(&two_countries(), &ListOptions::default().with_translation("jpn"));
    assert_eq!(names(&list), ["France", "United States"]);
}

#[test]
fn preferred_entries_obey_the_other_filters() {
    let options = ListOptions::default()
        .with_region(Region::Europe)
        .with_preferred(["US", "FR", "DE"]);
    let list = build_list(&bundled(), &options);

    assert_eq!(codes(&list)[..5], ["FR", "DE", "AD", "AL", "AT"]);
    assert!(list.iter().all(|c| c.region == Some(Region::Europe)));
}

#[test]
fn preferred_codes_appear_once_and_unknown_ones_are_dropped() {
    let options = ListOptions::default().with_preferred(["ZZ", "US", "US", "FR"]);
    let list = build_list(&two_countries(), &options);
    assert_eq!(codes(&list), ["US", "FR"]);
}

#[test]
fn empty_include_list_does_not_restrict() {
    let options = ListOptions::default().with_include(Vec::<String>::new());
    assert_eq!(build_list(&bundled(), &options).len(), bundled().len());
}

#[test]
fn include_and_exclude_lists_combine() {
    let options = ListOptions::default()
        .with_include(["fr", "de", "it"])
        .with_exclude(["IT"]);
    let list = build_list(&bundled(), &options);
    assert_eq!(names(&list), ["France", "Germany"]);
}

#[test]
fn subregion_filter_matches_exactly() {
    let options = ListOptions::default().with_subregion("Northern Africa");
    let list = build_list(&bundled(), &options);
    assert_eq!(
        names(&list),
        ["Algeria", "Egypt", "Libya", "Morocco", "Sudan", "Tunisia", "Western Sahara"]
    );
}

#[test]
fn malformed_filter_codes_are_ignored() {
    let options = ListOptions::default().with_include(["France", "123"]);
    assert!(options.include.is_empty());
    assert_eq!(build_list(&two_countries(), &options).len(), 2);
}

#[test]
fn list_entries_carry_the_record_data() {
    let list = build_list(&two_countries(), &ListOptions::default().with_include(["FR"]));
    let france = &list[0];
    assert_eq!(france.calling_code(), Some("33"));
    assert_eq!(france.currency_codes, ["EUR"]);
    assert_eq!(france.subregion.as_deref(), Some("Western Europe"));
    assert_eq!(france.flag, "flag-fr");
}

#[test]
fn options_deserialize_with_defaults() {
    let options: ListOptions =
        serde_json::from_str(r#"{ "region": "Europe", "preferred": ["fr"] }"#).unwrap();
    assert_eq!(options.translation, COMMON_TRANSLATION);
    assert_eq!(options.flag_type, FlagType::Emoji);
    assert_eq!(options.preferred[0].as_str(), "FR");
    assert!(options.is_preferred_mode());
}
