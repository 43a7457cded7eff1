//! Package naming and archive filename allocation

use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Source-layout directory name that never names a package
const SOURCE_DIR: &str = "src";

/// Derive the package name for a library directory
///
/// The last path segment names the package, unless it is the `src` layout
/// directory, in which case the parent segment is used instead. Paths with
/// too few segments yield an empty name; the toolchain does not report such
/// paths in practice.
pub fn package_name(path: &Path) -> String {
    let mut segments: Vec<&OsStr> = path.iter().collect();
    let mut name = segments.pop();
    if name.and_then(OsStr::to_str) == Some(SOURCE_DIR) {
        name = segments.pop();
    }
    match name {
        Some(n) => n.to_string_lossy().into_owned(),
        None => String::new(),
    }
}

/// Allocate a unique archive path for a package name
///
/// Collisions within a run resolve to `<name>_0.zip`, `<name>_1.zip`, and
/// so on. The winning path is reserved in `allocated` before any file is
/// written, so an archive that ends up empty still consumes its slot.
pub fn allocate_archive_path(
    out_dir: &Path,
    package: &str,
    allocated: &mut HashSet<PathBuf>,
) -> PathBuf {
    let mut candidate = out_dir.join(format!("{package}.zip"));
    let mut suffix = 0;
    while allocated.contains(&candidate) {
        candidate = out_dir.join(format!("{package}_{suffix}.zip"));
        suffix += 1;
    }
    allocated.insert(candidate.clone());
    candidate
}
