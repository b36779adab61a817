use std::path::PathBuf;

use clap::Parser;

/// Command line configuration for the marketplace menu.
#[derive(Debug, Clone, Parser)]
#[command(version, about = "In-memory marketplace simulator driven by a text menu")]
pub struct Config {
    /// Load customers and products from a CSV file with headers
    /// `type,name,last_name,amount` instead of the demo data
    #[arg(long, value_name = "PATH", conflicts_with = "empty")]
    pub seed: Option<PathBuf>,

    /// Start with no customers and no products
    #[arg(long)]
    pub empty: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            empty: false,
            log_level: "warn".to_string(),
        }
    }
}
