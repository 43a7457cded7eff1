//! Library packaging
//!
//! This module is the core of the `package` command:
//! - naming: package name derivation and archive filename allocation
//! - archive: per-library zip construction with run-wide deduplication
//!
//! The run-wide sets (relative paths already archived, archive filenames
//! already allocated) live in [`PackageRun`] and are threaded through the
//! scan routines explicitly, never held as process-wide state.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

pub mod archive;
pub mod naming;

pub use archive::ArchiveSummary;

use crate::error::Result;

/// Mutable state for one packaging run
#[derive(Default)]
pub struct PackageRun {
    /// Relative paths already written into some archive this run
    seen: HashSet<PathBuf>,
    /// Archive filenames already allocated this run
    allocated: HashSet<PathBuf>,
}

impl PackageRun {
    /// Create an empty run
    pub fn new() -> Self {
        Self::default()
    }

    /// Package one library directory into a freshly allocated archive
    ///
    /// Returns `None` when the library contributed no new object files, in
    /// which case no archive remains on disk (its filename slot stays
    /// consumed for the rest of the run).
    pub fn package_library(
        &mut self,
        library_root: &Path,
        out_dir: &Path,
        verbose: bool,
    ) -> Result<Option<ArchiveSummary>> {
        let package = naming::package_name(library_root);
        let archive_path = naming::allocate_archive_path(out_dir, &package, &mut self.allocated);
        archive::build_archive(library_root, &archive_path, &mut self.seen, verbose)
    }

    /// Count of distinct object files written across all archives so far
    pub fn distinct_files(&self) -> usize {
        self.seen.len()
    }
}
