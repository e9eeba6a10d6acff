//! Main entry point for assertdiff CLI

use assertdiff::cli::Cli;
use assertdiff::commands::{execute_command, Outcome};
use clap::Parser;

fn main() {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    // Execute the command
    match execute_command(cli.command) {
        Ok(Outcome::Equal) => {}
        Ok(Outcome::Different) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
