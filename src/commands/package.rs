//! Package command implementation
//!
//! Builds the project via the Lean toolchain, queries the library search
//! path, and archives each library's object files into the output
//! directory. Summary and duplicate lines go to stdout; the progress bar
//! and diagnostics go to stderr.

use console::Style;
use std::fs;

use crate::cli::PackageArgs;
use crate::error::{OleanpackError, Result};
use crate::packager::{PackageRun, naming};
use crate::progress::PackageProgress;
use crate::toolchain::Toolchain;

/// Run package command
pub fn run(args: PackageArgs, verbose: bool) -> Result<()> {
    if !args.project_dir.is_dir() {
        return Err(OleanpackError::ProjectDirNotFound {
            path: args.project_dir.display().to_string(),
        });
    }

    let toolchain = Toolchain::new(args.lean.as_str(), args.leanpkg.as_str(), &args.project_dir);
    toolchain.report_version()?;
    toolchain.build()?;
    let roots = toolchain.search_path()?;

    fs::create_dir_all(&args.out_dir)?;

    let mut run = PackageRun::new();
    let progress = PackageProgress::new(roots.len() as u64);
    for root in &roots {
        progress.update_library(&naming::package_name(root));

        let summary = match run.package_library(root, &args.out_dir, verbose) {
            Ok(summary) => summary,
            Err(e) => {
                progress.abandon();
                return Err(e);
            }
        };

        match summary {
            Some(summary) => println!(
                "Created {} from {} with {} olean files, {} files total so far",
                Style::new().green().apply_to(summary.archive.display()),
                root.display(),
                summary.written,
                run.distinct_files()
            ),
            None => {
                if verbose {
                    println!("Skipped {} (no new olean files)", root.display());
                }
            }
        }

        progress.inc();
    }
    progress.finish();

    Ok(())
}
