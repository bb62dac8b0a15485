// Command line interface
use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "analytics-dashboard", version, about = "Analytics data API and chart shaping")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the analytics data API server
    Serve {
        /// Listen port, overriding the configured one
        #[arg(long)]
        port: Option<u16>,
    },
    /// Shape every dashboard section and write the chart inputs as JSON files
    Export {
        /// Output directory, overriding the configured one
        #[arg(long)]
        out: Option<PathBuf>,
        /// Time-series window in days
        #[arg(long)]
        days: Option<u32>,
        /// Scatter sample count
        #[arg(long)]
        samples: Option<usize>,
        /// Fetch records from a remote data API instead of the built-in
        /// generator
        #[arg(long)]
        endpoint: Option<String>,
    },
}
