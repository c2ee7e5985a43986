//! Basic usage example for countrydb-rs
//!
//! This example demonstrates how to:
//! - Load the bundled country table
//! - Build the picker list for a translation
//! - Search it and derive the letter index
//! - Look up a single country

use countrydb_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== countrydb-rs Basic Usage Example ===\n");

    let service = CountryService::offline();

    // Example 1: The full list, sorted by display name
    println!("--- Example 1: All countries ---");
    let list = service.countries(&ListOptions::default())?;
    println!("Total countries: {}", list.len());
    for (i, country) in list.iter().take(5).enumerate() {
        println!("{}. {} {} ({})", i + 1, country.flag, country.name, country.code);
    }
    println!("... and {} more\n", list.len() - 5);

    // Example 2: Localized names
    println!("--- Example 2: German names ---");
    let german = service.countries(&ListOptions::default().with_translation("deu"))?;
    for country in german.iter().take(5) {
        println!("- {}", country.name);
    }
    println!();

    // Example 3: Search box
    println!("--- Example 3: Search ---");
    let mut index = SearchIndex::default();
    for query in ["fra", "swizerland", "44"] {
        let hits = index.search(query, &list);
        let names: Vec<_> = hits.iter().take(3).map(|c| c.name.as_str()).collect();
        println!("{query:>12} -> {names:?}");
    }
    println!();

    // Example 4: Letter index
    println!("--- Example 4: Letters ---");
    println!("{}", build_letters(&list).join(" "));
    println!();

    // Example 5: Single country
    println!("--- Example 5: Country info ---");
    let info = service.country_info("JP", COMMON_TRANSLATION)?;
    println!("{info:?}");

    Ok(())
}
