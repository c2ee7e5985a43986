//! countrydb: command-line interface for countrydb-core
//!
//! This binary drives the country directory the same way a picker widget
//! does: it builds the filtered list, runs search-box queries over it and
//! derives the letter index.
//!
//! Usage examples
//! --------------
//!
//! - List countries (sorted by display name)
//!   $ countrydb countries
//!   $ countrydb countries --region Europe --translation deu
//!
//! - Pin preferred countries to the top (keeps dataset order after them)
//!   $ countrydb countries --preferred US,GB
//!
//! - Fuzzy search by name, code or calling code
//!   $ countrydb search swizerland
//!   $ countrydb search 44
//!
//! - Letter index for jump navigation
//!   $ countrydb letters --region Africa
//!
//! - Single country
//!   $ countrydb country fr -t ita
//!
//! Data source
//! -----------
//!
//! Emoji-flag data is bundled. `--image` fetches the image-flag dataset
//! once from the remote location (override with `--remote-url` or
//! `COUNTRYDB_REMOTE_URL`). `--input <path>` reads a local `.json` or
//! `.json.gz` table instead. Set `RUST_LOG=debug` to see loader events.
mod args;

use crate::args::{CliArgs, Commands, FilterArgs};
use anyhow::Context;
use clap::Parser;
use countrydb_core::{
    build_letters, CountryService, CountryTable, FlagType, ListedCountry, LoaderConfig,
    SearchIndex,
};
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = CliArgs::parse();

    let config = match &args.remote_url {
        Some(url) => LoaderConfig::default().with_remote_url(url),
        None => LoaderConfig::default(),
    };
    let mut service = CountryService::with_config(config);

    if let Some(input) = &args.input {
        let flag_type = match &args.command {
            Commands::Countries { filters }
            | Commands::Search { filters, .. }
            | Commands::Letters { filters } => filters.flag_type(),
            Commands::Country { .. } => FlagType::Emoji,
        };
        let table = CountryTable::load_from_path(input, flag_type)
            .with_context(|| format!("reading dataset {input}"))?;
        service = service.with_table(table);
    }

    match args.command {
        Commands::Countries { filters } => {
            let list = load_list(&service, &filters)?;
            print_list(&list, filters.json)?;
        }

        Commands::Search { query, filters } => {
            let list = load_list(&service, &filters)?;
            let mut index = SearchIndex::default();
            let hits = index.search(query.trim_start_matches('+'), &list);
            if hits.is_empty() && !filters.json {
                println!("No countries found matching: {query}");
            } else {
                print_list(&hits, filters.json)?;
            }
        }

        Commands::Letters { filters } => {
            let list = load_list(&service, &filters)?;
            let letters = build_letters(&list);
            if filters.json {
                println!("{}", serde_json::to_string(&letters)?);
            } else {
                println!("{}", letters.join(" "));
            }
        }

        Commands::Country { code, translation } => {
            let info = service.country_info(&code, &translation)?;
            let flag = service.emoji_flag(&code)?;
            println!("Country: {} {}", flag, info.country_name);
            println!("Code: {}", code.to_ascii_uppercase());
            match info.calling_code {
                Some(calling) => println!("Calling Code: +{calling}"),
                None => println!("Calling Code: -"),
            }
            println!("Currency: {}", info.currency.as_deref().unwrap_or("-"));
        }
    }

    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// A failed load prints an empty list, then the error with a hint.
fn load_list<F>(service: &CountryService<F>, filters: &FilterArgs) -> anyhow::Result<Vec<ListedCountry>>
where
    F: countrydb_core::RemoteFetcher,
{
    let options = filters.to_options();
    match service.countries(&options) {
        Ok(list) => Ok(list),
        Err(e) => {
            warn!(flag_type = %options.flag_type, "dataset load failed: {}", e);
            print_list(&[], filters.json)?;
            Err(e).with_context(|| {
                format!(
                    "could not load the {} dataset; retry, or pass --input <path>",
                    options.flag_type
                )
            })
        }
    }
}

fn print_list(list: &[ListedCountry], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(list)?);
        return Ok(());
    }

    for c in list {
        let calling = c
            .calling_code()
            .map(|code| format!("+{code}"))
            .unwrap_or_default();
        println!("{} {} ({}) {}", c.flag, c.name, c.code, calling);
    }
    println!("{} countries", list.len());
    Ok(())
}
