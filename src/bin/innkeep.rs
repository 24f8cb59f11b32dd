//! Innkeep CLI Binary

use clap::Parser;
use innkeep::logging::init_logging;
use innkeep::tooling::cli::{Cli, CliContext};
use std::process;

fn main() {
    let cli = Cli::parse();

    let config = match CliContext::load_config(cli.data_dir.as_deref(), cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            process::exit(1);
        }
    };

    let logging = cli.logging_config(&config.logging);
    if let Err(e) = init_logging(Some(&logging)) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    let context = match CliContext::with_config(config, cli.data_dir.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error resolving data directory: {}", e);
            process::exit(1);
        }
    };

    match context.execute(&cli.command) {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
