//! Error types and handling for oleanpack
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for oleanpack operations
#[derive(Error, Diagnostic, Debug)]
pub enum OleanpackError {
    // Toolchain errors
    #[error("Failed to invoke '{command}': {reason}")]
    #[diagnostic(
        code(oleanpack::toolchain::invocation_failed),
        help("Check that the Lean toolchain is installed and on PATH")
    )]
    ToolInvocationFailed { command: String, reason: String },

    #[error("Search path query '{command}' failed: {reason}")]
    #[diagnostic(
        code(oleanpack::toolchain::query_failed),
        help("Run the command manually inside the project directory to inspect its output")
    )]
    ToolQueryFailed { command: String, reason: String },

    #[error("Failed to parse search path listing: {reason}")]
    #[diagnostic(
        code(oleanpack::toolchain::search_path_parse_failed),
        help("Expected `lean -p` to print a JSON object with a `path` array of strings")
    )]
    SearchPathParseFailed { reason: String },

    // Project errors
    #[error("Project directory not found: {path}")]
    #[diagnostic(
        code(oleanpack::project::not_found),
        help("Pass --project-dir pointing at a Lean package directory")
    )]
    ProjectDirNotFound { path: String },

    // Archive errors
    #[error("Failed to create archive: {path}")]
    #[diagnostic(code(oleanpack::archive::create_failed))]
    ArchiveCreateFailed { path: String, reason: String },

    #[error("Failed to write entry '{entry}' into archive {archive}: {reason}")]
    #[diagnostic(
        code(oleanpack::archive::write_failed),
        help("Archives are limited to 4 GiB; zip64 output is not produced")
    )]
    ArchiveWriteFailed {
        archive: String,
        entry: String,
        reason: String,
    },

    #[error("Failed to finish archive {path}: {reason}")]
    #[diagnostic(code(oleanpack::archive::finish_failed))]
    ArchiveFinishFailed { path: String, reason: String },

    // File system errors
    #[error("Failed to scan directory: {path}")]
    #[diagnostic(code(oleanpack::fs::scan_failed))]
    ScanFailed { path: String, reason: String },

    #[error("Failed to read file: {path}")]
    #[diagnostic(code(oleanpack::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to remove file: {path}")]
    #[diagnostic(code(oleanpack::fs::remove_failed))]
    FileRemoveFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(oleanpack::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for OleanpackError {
    fn from(err: std::io::Error) -> Self {
        OleanpackError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for OleanpackError {
    fn from(err: serde_json::Error) -> Self {
        OleanpackError::SearchPathParseFailed {
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, OleanpackError>;
