mod common;

use common::{bundled, two_countries};
use countrydb_core::prelude::*;

#[test]
fn letters_are_unique_and_sorted() {
    let list = build_list(&bundled(), &ListOptions::default().with_region(Region::Europe));
    let letters = build_letters(&list);

    assert_eq!(letters[..3], ["A", "Å", "B"]);
    let mut deduped = letters.clone();
    deduped.dedup();
    assert_eq!(deduped, letters);
}

#[test]
fn building_twice_gives_the_same_index() {
    let list = build_list(&bundled(), &ListOptions::default().with_translation("fra"));
    assert_eq!(build_letters(&list), build_letters(&list));
}

#[test]
fn letters_follow_the_resolved_translation() {
    let list = build_list(&two_countries(), &ListOptions::default().with_translation("deu"));
    assert_eq!(build_letters(&list), ["F", "V"]);
}

#[test]
fn letters_are_upper_cased() {
    let names = vec!["équateur".to_string(), "zambie".to_string(), String::new()];
    assert_eq!(build_letters(&names), ["É", "Z"]);
}

#[test]
fn empty_list_has_no_letters() {
    assert!(build_letters::<ListedCountry>(&[]).is_empty());
}

#[test]
fn multi_character_capitals_stay_whole() {
    assert_eq!(build_letters(&["ßtadt", "zug"]), ["SS", "Z"]);
}
