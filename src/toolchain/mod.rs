//! Lean toolchain invocation
//!
//! The packaging run drives three external commands, all with the project
//! directory as their working directory:
//! - `lean -v`: version report, output inherited, exit status ignored
//! - `leanpkg build`: build trigger, output inherited, exit status ignored
//! - `lean -p`: search path query, stdout captured and parsed as JSON
//!
//! Only the query step inspects its exit status. A failed build can still
//! leave usable partial output, so the run continues past it.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{OleanpackError, Result};
use crate::paths;

/// Structured listing printed by `lean -p`
///
/// The toolchain prints more fields (e.g. `leanpkg_path_file`); only the
/// `path` array matters here.
#[derive(Debug, Deserialize)]
struct SearchPathListing {
    path: Vec<String>,
}

/// Handle to the external Lean toolchain for one project directory
pub struct Toolchain {
    lean: String,
    leanpkg: String,
    project_dir: PathBuf,
}

impl Toolchain {
    /// Create a toolchain handle
    pub fn new(
        lean: impl Into<String>,
        leanpkg: impl Into<String>,
        project_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            lean: lean.into(),
            leanpkg: leanpkg.into(),
            project_dir: project_dir.into(),
        }
    }

    /// Report the compiler version to the terminal
    pub fn report_version(&self) -> Result<()> {
        self.run_inherited(&self.lean, &["-v"])
    }

    /// Trigger a build of the project
    ///
    /// A nonzero exit is not an error: partial `.olean` output from a failed
    /// build is still packaged.
    pub fn build(&self) -> Result<()> {
        self.run_inherited(&self.leanpkg, &["build"])
    }

    /// Query the library search path and resolve each entry to an absolute,
    /// symlink-normalized directory
    pub fn search_path(&self) -> Result<Vec<PathBuf>> {
        let command = format!("{} -p", self.lean);
        let output = Command::new(&self.lean)
            .arg("-p")
            .current_dir(&self.project_dir)
            .output()
            .map_err(|e| OleanpackError::ToolInvocationFailed {
                command: command.clone(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let reason = if stderr.trim().is_empty() {
                output.status.to_string()
            } else {
                stderr.trim().to_string()
            };
            return Err(OleanpackError::ToolQueryFailed { command, reason });
        }

        let entries = parse_search_path(&output.stdout)?;
        Ok(entries
            .iter()
            .map(|p| paths::resolve_search_root(&self.project_dir, Path::new(p)))
            .collect())
    }

    /// Run a command with inherited stdio, ignoring its exit status
    fn run_inherited(&self, bin: &str, args: &[&str]) -> Result<()> {
        Command::new(bin)
            .args(args)
            .current_dir(&self.project_dir)
            .status()
            .map_err(|e| OleanpackError::ToolInvocationFailed {
                command: format!("{} {}", bin, args.join(" ")),
                reason: e.to_string(),
            })?;
        Ok(())
    }
}

/// Parse the JSON printed by `lean -p` into its `path` entries
fn parse_search_path(stdout: &[u8]) -> Result<Vec<String>> {
    let listing: SearchPathListing = serde_json::from_slice(stdout)?;
    Ok(listing.path)
}
