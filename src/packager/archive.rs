//! Archive construction for one library directory

use console::Style;
use std::collections::HashSet;
use std::ffi::OsStr;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::{OleanpackError, Result};

/// Extension of compiled object files
pub const OBJECT_EXTENSION: &str = "olean";

/// Build-cache directory excluded from archives at any depth
pub const BUILD_CACHE_DIR: &str = "_target";

/// Outcome of building one archive
#[derive(Debug)]
pub struct ArchiveSummary {
    /// Path of the archive on disk
    pub archive: PathBuf,
    /// Number of files written into this archive
    pub written: usize,
}

/// Build a zip archive of all object files under `library_root`
///
/// Entry names are paths relative to `library_root`, forward-slash
/// separated. Files whose relative path was already archived this run are
/// skipped with a duplicate notice on stdout; files under a `_target`
/// directory are skipped silently. An archive that ends up empty is removed
/// from disk and `None` is returned.
pub fn build_archive(
    library_root: &Path,
    archive_path: &Path,
    seen: &mut HashSet<PathBuf>,
    verbose: bool,
) -> Result<Option<ArchiveSummary>> {
    let file = File::create(archive_path).map_err(|e| OleanpackError::ArchiveCreateFailed {
        path: archive_path.display().to_string(),
        reason: e.to_string(),
    })?;
    let mut writer = ZipWriter::new(file);

    // Fixed parameters: deflate at maximum level, no zip64. Output past the
    // conventional 4 GiB limit fails instead of switching to the extended
    // format.
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(9))
        .large_file(false);

    let mut written = 0;
    // A dangling search path scans as empty and its archive is discarded
    // below; walking it would error on the missing root.
    let walker = if library_root.is_dir() {
        Some(WalkDir::new(library_root))
    } else {
        None
    };
    for entry in walker.into_iter().flatten() {
        let entry = entry.map_err(|e| OleanpackError::ScanFailed {
            path: library_root.display().to_string(),
            reason: e.to_string(),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension().and_then(OsStr::to_str) != Some(OBJECT_EXTENSION) {
            continue;
        }

        let rel = entry
            .path()
            .strip_prefix(library_root)
            .unwrap_or(entry.path());
        if rel
            .components()
            .any(|c| c.as_os_str().to_str() == Some(BUILD_CACHE_DIR))
        {
            continue;
        }
        if seen.contains(rel) {
            println!(
                "{} {}",
                Style::new().yellow().apply_to("duplicate:"),
                entry.path().display()
            );
            continue;
        }

        let entry_name = rel.to_string_lossy().replace('\\', "/");
        writer
            .start_file(entry_name.as_str(), options)
            .map_err(|e| OleanpackError::ArchiveWriteFailed {
                archive: archive_path.display().to_string(),
                entry: entry_name.clone(),
                reason: e.to_string(),
            })?;
        let mut source =
            File::open(entry.path()).map_err(|e| OleanpackError::FileReadFailed {
                path: entry.path().display().to_string(),
                reason: e.to_string(),
            })?;
        io::copy(&mut source, &mut writer).map_err(|e| OleanpackError::ArchiveWriteFailed {
            archive: archive_path.display().to_string(),
            entry: entry_name.clone(),
            reason: e.to_string(),
        })?;

        seen.insert(rel.to_path_buf());
        written += 1;
        if verbose {
            println!("  adding {entry_name}");
        }
    }

    writer
        .finish()
        .map_err(|e| OleanpackError::ArchiveFinishFailed {
            path: archive_path.display().to_string(),
            reason: e.to_string(),
        })?;

    if written == 0 {
        std::fs::remove_file(archive_path).map_err(|e| OleanpackError::FileRemoveFailed {
            path: archive_path.display().to_string(),
            reason: e.to_string(),
        })?;
        return Ok(None);
    }

    Ok(Some(ArchiveSummary {
        archive: archive_path.to_path_buf(),
        written,
    }))
}
