//! Search path resolution
//!
//! `lean -p` reports search paths relative to the project directory (or
//! absolute, for toolchain-provided libraries). Each is resolved to an
//! absolute, symlink-normalized form before scanning so that duplicate
//! detection and package naming see one canonical spelling per directory.

use normpath::PathExt;
use std::path::{Path, PathBuf};

/// Resolve a search path reported by the toolchain against the project directory
pub fn resolve_search_root(project_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize(path)
    } else {
        normalize(&project_dir.join(path))
    }
}

/// Normalize a path (canonicalize with Windows path handling)
///
/// For non-existent paths, normalizes the longest existing ancestor and
/// appends the remaining components, so resolution never fails outright; a
/// dangling search path simply scans as an empty directory later.
pub fn normalize(path: &Path) -> PathBuf {
    if let Ok(norm) = path.normalize() {
        return norm.as_path().to_path_buf();
    }

    // Walk up the tree until we find an existing path
    let mut current = path;
    let mut components = Vec::new();

    while !current.exists() {
        if let Some(file_name) = current.file_name() {
            components.push(file_name);
            if let Some(parent) = current.parent() {
                current = parent;
            } else {
                return path.to_path_buf();
            }
        } else {
            return path.to_path_buf();
        }
    }

    let normalized_base = current
        .normalize()
        .map(|norm| norm.as_path().to_path_buf())
        .unwrap_or_else(|_| current.to_path_buf());

    let mut result = normalized_base;
    for component in components.iter().rev() {
        result = result.join(component);
    }

    result
}
