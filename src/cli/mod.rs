pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::OutputFormat;

#[derive(Parser)]
#[command(name = "bubo")]
#[command(about = "Build a single timeline page from a list of RSS/Atom/JSON feeds", long_about = None)]
pub struct Cli {
    /// Path to bubo.toml or feeds.json
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch every feed and write the timeline
    Build {
        /// Output file (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// List configured feeds in scheduling order
    List,
}
