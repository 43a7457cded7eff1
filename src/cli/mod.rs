//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - package: Package command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod completions;
pub mod package;

pub use completions::CompletionsArgs;
pub use package::PackageArgs;

/// oleanpack - Lean library distribution packager
///
/// Build a Lean project and package each library on its search path into a
/// deduplicated zip archive.
#[derive(Parser, Debug)]
#[command(
    name = "oleanpack",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Package compiled Lean libraries into zip archives",
    long_about = "oleanpack builds a Lean project with the external toolchain, asks it for the \
                  library search path, and packages the compiled .olean files of each library \
                  into one zip archive per package, skipping files already archived earlier in \
                  the run.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  oleanpack package                          \x1b[90m# Package combined_lib into test_dist/\x1b[0m\n   \
                  oleanpack package --project-dir my_lib     \x1b[90m# Package another project\x1b[0m\n   \
                  oleanpack package -o dist --verbose        \x1b[90m# List every archived file\x1b[0m\n   \
                  oleanpack completions zsh                  \x1b[90m# Generate shell completions\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the project and package each library into a zip archive
    Package(PackageArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
