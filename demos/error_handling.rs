//! Error handling example for countrydb-rs
//!
//! This example demonstrates proper error handling and edge cases

use countrydb_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== countrydb-rs Error Handling Example ===\n");

    let service = CountryService::offline();

    // Example 1: The image dataset needs the network
    println!("--- Example 1: Loading the image dataset offline ---");
    match service.countries(&ListOptions::default().with_flag_type(FlagType::Image)) {
        Ok(list) => println!("✓ Loaded {} countries", list.len()),
        Err(e) => println!("✗ {e} (the picker shows an empty list)"),
    }
    println!();

    // Example 2: Unknown codes
    println!("--- Example 2: Looking up unknown codes ---");
    for code in ["XX", "", "FRA", "fr"] {
        match service.country_name(code, COMMON_TRANSLATION) {
            Ok(name) => println!("  Found: {name} ({code})"),
            Err(e) => println!("  {e}"),
        }
    }
    println!();

    // Example 3: Filters degrade instead of failing
    println!("--- Example 3: Malformed filters ---");
    let options = ListOptions::default().with_include(["not-a-code"]);
    let list = service.countries(&options)?;
    println!("  Empty allow-list after dropping bad codes: {} countries", list.len());

    // Example 4: Missing translations fall back to the common name
    println!("--- Example 4: Unknown translation ---");
    println!("  {}", service.country_name("DE", "klingon")?);

    Ok(())
}
