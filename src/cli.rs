use clap::Parser;
use std::path::PathBuf;

use crate::config::parse_secs;

#[derive(Parser, Debug)]
#[command(
    name = "timerpro",
    version,
    about = "Demonstrates manual and scoped use of the timerpro stopwatch"
)]
pub struct Cli {
    /// Seconds to sleep inside the manual timer
    #[arg(long, value_parser = parse_secs)]
    pub manual_secs: Option<f64>,

    /// Seconds to sleep inside the scoped timer
    #[arg(long, value_parser = parse_secs)]
    pub block_secs: Option<f64>,

    /// Skip the manual start/stop demo
    #[arg(long)]
    pub skip_manual: bool,

    /// Skip the scoped demo
    #[arg(long)]
    pub skip_block: bool,

    /// Load demo settings from a TOML file (requires the `toml-config` feature)
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Log timer transitions to stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,
}
