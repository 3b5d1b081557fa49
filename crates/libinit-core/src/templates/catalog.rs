//! Registry of every generated file, keyed by relative path

use super::{files, manifest};
use crate::project::ProjectSpec;

/// Pure content generator for one file
pub type Generator = fn(&ProjectSpec) -> String;

/// Subdirectories created before any file is written, parents first
pub const DIRECTORIES: &[&str] = &["src", ".github", ".github/workflows", "build", "dist", "test"];

/// Every generated file, in write order
///
/// Each path's parent is the project root or an entry of [`DIRECTORIES`].
pub const CATALOG: &[(&str, Generator)] = &[
    ("package.json", manifest::render),
    (".gitignore", files::gitignore),
    (".gitattributes", files::gitattributes),
    ("eslint.config.mjs", files::eslint_config),
    (".prettierrc.json", files::prettier_config),
    (".releaserc.json", files::release_config),
    ("jest.config.json", files::jest_config),
    (".npmignore", files::npmignore),
    (".commitlintrc.json", files::commitlint_config),
    ("tsconfig.json", files::tsconfig),
    ("README.md", files::readme),
    ("CONFIGURATION.md", files::configuration_notes),
    ("LICENSE", files::license),
    (".env", files::empty),
    ("src/index.ts", files::empty),
    (".github/workflows/release.yml", files::release_workflow),
];

/// One generated file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentEntry {
    pub relative_path: &'static str,
    pub content: String,
}

/// Render the full catalog for a project
pub fn entries(spec: &ProjectSpec) -> Vec<ContentEntry> {
    CATALOG
        .iter()
        .map(|&(path, generate)| ContentEntry {
            relative_path: path,
            content: generate(spec),
        })
        .collect()
}
