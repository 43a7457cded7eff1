//! Command implementations for oleanpack CLI

pub mod completions;
pub mod package;
pub mod version;
