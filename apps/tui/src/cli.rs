use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "property-map", version, about = "Property owner map in the terminal")]
pub struct CliArgs {
    /// Property data file (JSON array of records)
    #[arg(long, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Print owner stats and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless stats as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
