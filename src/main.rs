mod cli;
mod config;
mod demo;

use std::process;

use clap::Parser;
use timerpro_timer::Timer;
use timerpro_utils::init_logging;
use tracing::debug;

use crate::cli::Cli;
use crate::config::DemoConfig;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(&cli) {
        eprintln!("error: {err:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let base = match &cli.config {
        Some(path) => DemoConfig::from_file(path)?,
        None => DemoConfig::from_env(),
    };
    let config = base.merge_with_args(cli);
    config.validate()?;
    debug!(?config, "demo configuration");

    if config.run_manual {
        println!("Manual Timer:");
        let mut timer = Timer::named("Manual");
        demo::run_manual(&mut timer, config.manual_secs)?;
    }

    if config.run_manual && config.run_block {
        println!();
    }

    if config.run_block {
        println!("Scoped Timer:");
        let mut timer = Timer::named("Block");
        demo::run_scoped(&mut timer, config.block_secs)?;
    }

    Ok(())
}
