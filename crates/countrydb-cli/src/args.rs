use clap::{Args, Parser, Subcommand};
use countrydb_core::{FlagType, ListOptions, Region};

/// CLI arguments for countrydb-cli
#[derive(Debug, Parser)]
#[command(
    name = "countrydb",
    version,
    about = "CLI for listing and searching the countrydb-core country directory"
)]
pub struct CliArgs {
    /// Path to a local dataset (.json or .json.gz) used instead of the bundled/remote one
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// Location of the image-flag dataset
    #[arg(long = "remote-url", env = "COUNTRYDB_REMOTE_URL", global = true)]
    pub remote_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List countries after filtering and ordering
    Countries {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Fuzzy-search the filtered list by name, code or calling code
    Search {
        /// Search-box text (e.g. "fra", "+44", "jp")
        query: String,
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Print the jump-navigation letters of the filtered list
    Letters {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Lookup one country by its two-letter code
    Country {
        /// Two-letter code (e.g. FR, us)
        code: String,
        /// Translation language code (e.g. deu, fra)
        #[arg(short = 't', long, default_value = "common")]
        translation: String,
    },
}

#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Use the image-flag dataset (fetched remotely) instead of emoji flags
    #[arg(long)]
    pub image: bool,

    /// Translation language code for display names
    #[arg(short = 't', long, default_value = "common")]
    pub translation: String,

    /// Restrict to a region (Africa, Americas, Antarctic, Asia, Europe, Oceania)
    #[arg(short = 'r', long)]
    pub region: Option<Region>,

    /// Restrict to a subregion (e.g. "Western Europe")
    #[arg(short = 's', long)]
    pub subregion: Option<String>,

    /// Comma-separated allow-list of codes (e.g. DE,CH,AT)
    #[arg(long, value_delimiter = ',')]
    pub include: Vec<String>,

    /// Comma-separated deny-list of codes
    #[arg(long, value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Comma-separated codes pinned to the top (disables the name sort)
    #[arg(short = 'p', long, value_delimiter = ',')]
    pub preferred: Vec<String>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl FilterArgs {
    pub fn flag_type(&self) -> FlagType {
        if self.image {
            FlagType::Image
        } else {
            FlagType::Emoji
        }
    }

    pub fn to_options(&self) -> ListOptions {
        let mut options = ListOptions::default()
            .with_flag_type(self.flag_type())
            .with_translation(self.translation.clone())
            .with_include(&self.include)
            .with_exclude(&self.exclude)
            .with_preferred(&self.preferred);
        options.region = self.region;
        options.subregion = self.subregion.clone();
        options
    }
}
