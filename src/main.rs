//! oleanpack - Lean library distribution packager
//!
//! Builds a Lean project via the external toolchain, then packages the
//! compiled .olean files of each library on the resulting search path into
//! one deduplicated zip archive per package.

use clap::Parser;

mod cli;
mod commands;
mod error;
mod packager;
mod paths;
mod progress;
mod toolchain;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Package(args) => commands::package::run(args, cli.verbose),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
