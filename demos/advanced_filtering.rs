//! Advanced filtering example for countrydb-rs
//!
//! Region and subregion filters, allow/deny lists and preferred countries.

use countrydb_rs::prelude::*;

fn show(title: &str, list: &[ListedCountry]) {
    println!("--- {title} ({}) ---", list.len());
    for country in list.iter().take(8) {
        println!("  {} {} ({})", country.flag, country.name, country.code);
    }
    println!();
}

fn main() -> Result<()> {
    println!("=== countrydb-rs Advanced Filtering Example ===\n");

    let table = CountryTable::bundled()?;

    show(
        "Europe",
        &build_list(&table, &ListOptions::default().with_region(Region::Europe)),
    );

    show(
        "Western Europe, French names",
        &build_list(
            &table,
            &ListOptions::default()
                .with_subregion("Western Europe")
                .with_translation("fra"),
        ),
    );

    show(
        "Allow-list minus deny-list",
        &build_list(
            &table,
            &ListOptions::default()
                .with_include(["DE", "AT", "CH", "LI"])
                .with_exclude(["AT"]),
        ),
    );

    // Preferred countries stay on top and the rest keeps dataset order.
    show(
        "Preferred US, GB, then the Americas",
        &build_list(
            &table,
            &ListOptions::default()
                .with_region(Region::Americas)
                .with_preferred(["US", "GB", "CA"]),
        ),
    );

    let options = ListOptions::default().with_region(Region::Africa);
    let africa = build_list(&table, &options);
    println!("Letters in Africa: {}", build_letters(&africa).join(" "));

    Ok(())
}
