use clap::{Parser, Subcommand};

/// CLI arguments for streetmap
#[derive(Debug, Parser)]
#[command(
    name = "streetmap",
    version,
    about = "Query a street-map dataset: nearest node, name prefixes and exact-name lookups"
)]
pub struct CliArgs {
    /// Path to the map dataset (.json, or .json.gz)
    #[arg(short = 'i', long = "input", global = true, env = "STREETMAP_INPUT")]
    pub input: Option<String>,

    /// Print results as JSON instead of plain text
    #[arg(long = "json", global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the loaded catalog
    Stats,

    /// Find the connected node closest to a coordinate
    Nearest {
        /// Longitude
        #[arg(allow_hyphen_values = true)]
        lon: f64,
        /// Latitude
        #[arg(allow_hyphen_values = true)]
        lat: f64,
    },

    /// List location names starting with a prefix (case and punctuation ignored)
    Prefix {
        /// Prefix to search
        prefix: String,
    },

    /// Show every location with exactly this name
    Locate {
        /// Location name (case and punctuation ignored)
        name: String,
    },
}
