//! appcore-resolve - Appcore binary dependency resolver
//!
//! Decides whether a package build links against a locally built Appcore
//! bundle or the pinned, checksummed release, binds the compiler
//! diagnostics policy that goes with that choice and emits the build graph.

use clap::Parser;

mod cli;
mod commands;
mod common;
mod config;
mod domain;
mod error;
mod hash;
mod logging;
mod resolver;
mod ui;

use cli::{Cli, Commands};
use error::Result;

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Resolve(args) => commands::resolve::run(args),
        Commands::Locate(args) => commands::locate::run(args),
        Commands::Checksum(args) => commands::checksum::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
