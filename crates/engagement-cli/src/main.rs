//! Engagement CLI - validate and enrich a subscription user export.

mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    if let Err(e) = commands::run::run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
