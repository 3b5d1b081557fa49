//! Generated project content and the scaffolder that writes it
//!
//! This module provides:
//! - The content catalog (relative path -> generator)
//! - The package manifest and tooling config generators
//! - Directory and file creation for a new project

pub mod catalog;
pub mod files;
pub mod manifest;
pub mod scaffold;

pub use catalog::{entries, ContentEntry, CATALOG, DIRECTORIES};
pub use scaffold::{count_files, create_structure, ScaffoldSummary};

/// Pretty-print a JSON document with a trailing newline
pub(crate) fn pretty_json(value: &serde_json::Value) -> String {
    // Serializing a Value cannot fail
    let mut out = serde_json::to_string_pretty(value).unwrap_or_default();
    out.push('\n');
    out
}
