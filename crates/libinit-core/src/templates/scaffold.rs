//! Project tree creation

use super::catalog::{ContentEntry, DIRECTORIES};
use crate::error::ScaffoldError;
use crate::report::Reporter;
use std::path::{Path, PathBuf};
use tokio::fs;
use walkdir::WalkDir;

/// What the scaffolder put on disk
#[derive(Debug, Clone, Default)]
pub struct ScaffoldSummary {
    pub directories: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
}

/// Create the target directory, the fixed subdirectories, then every entry
///
/// The target must not exist yet. No intermediate directories are created
/// for entries, so every entry's parent must be the root or one of
/// [`DIRECTORIES`].
pub async fn create_structure(
    target_dir: &Path,
    entries: &[ContentEntry],
    reporter: &dyn Reporter,
) -> Result<ScaffoldSummary, ScaffoldError> {
    let mut summary = ScaffoldSummary::default();

    fs::create_dir(target_dir)
        .await
        .map_err(|e| ScaffoldError::io(target_dir, e))?;
    reporter.step(&format!("Created {}", target_dir.display()));
    summary.directories.push(target_dir.to_path_buf());

    for dir in DIRECTORIES {
        let path = target_dir.join(dir);
        fs::create_dir(&path)
            .await
            .map_err(|e| ScaffoldError::io(&path, e))?;
        reporter.step(&format!("Created {}/", dir));
        summary.directories.push(path);
    }

    for entry in entries {
        let path = target_dir.join(entry.relative_path);
        fs::write(&path, entry.content.as_bytes())
            .await
            .map_err(|e| ScaffoldError::io(&path, e))?;
        reporter.step(&format!("Created {}", entry.relative_path));
        summary.files.push(path);
    }

    Ok(summary)
}

/// Count regular files below `dir`
pub fn count_files(dir: &Path) -> usize {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .count()
}
