//! Project description and pre-mutation checks

use crate::config::Settings;
use crate::error::ScaffoldError;
use std::path::{Component, Path, PathBuf};

/// Immutable description of the project being created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSpec {
    pub name: String,
    pub version: String,
    pub author: String,
    pub target_dir: PathBuf,
}

impl ProjectSpec {
    /// Build a spec for `name` under `base_dir`, validating the name first
    pub fn new(
        name: Option<&str>,
        base_dir: &Path,
        settings: &Settings,
    ) -> Result<Self, ScaffoldError> {
        let name = validate_name(name)?;
        Ok(Self {
            name: name.to_string(),
            version: settings.version.clone(),
            author: settings.author().to_string(),
            target_dir: base_dir.join(name),
        })
    }

    /// Last path component of the target directory
    pub fn dir_name(&self) -> String {
        self.target_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.name.clone())
    }

    /// Message for the initial commit
    pub fn commit_message(&self) -> String {
        format!("feat: initial commit {} v{}", self.dir_name(), self.version)
    }
}

/// Reject a missing or empty project name, or one that is not a single
/// directory name
pub fn validate_name(name: Option<&str>) -> Result<&str, ScaffoldError> {
    let name = match name.map(str::trim) {
        Some(n) if !n.is_empty() => n,
        _ => return Err(ScaffoldError::Usage),
    };

    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(part)), None) if part == name => Ok(name),
        _ => Err(ScaffoldError::InvalidName(name.to_string())),
    }
}

/// Validate the name and target directory; touches nothing on disk
pub fn prepare(
    name: Option<&str>,
    base_dir: &Path,
    settings: &Settings,
) -> Result<ProjectSpec, ScaffoldError> {
    let spec = ProjectSpec::new(name, base_dir, settings)?;
    validate_directory_absent(&spec.target_dir)?;
    Ok(spec)
}

/// Reject a target path that already has something on disk
pub fn validate_directory_absent(target_dir: &Path) -> Result<(), ScaffoldError> {
    // symlink_metadata also catches dangling links
    if target_dir.symlink_metadata().is_ok() {
        return Err(ScaffoldError::Conflict {
            path: target_dir.to_path_buf(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_or_blank_name_is_usage_error() {
        assert!(matches!(validate_name(None), Err(ScaffoldError::Usage)));
        assert!(matches!(validate_name(Some("")), Err(ScaffoldError::Usage)));
        assert!(matches!(validate_name(Some("   ")), Err(ScaffoldError::Usage)));
        assert_eq!(validate_name(Some("foo-lib")).unwrap(), "foo-lib");
    }

    #[test]
    fn test_name_must_be_single_directory() {
        for name in ["/abs", "/tmp/elsewhere", "a/b", "..", ".", "./foo", "foo/"] {
            let err = validate_name(Some(name)).unwrap_err();
            assert!(
                matches!(err, ScaffoldError::InvalidName(_)),
                "accepted {}",
                name
            );
            assert_eq!(err.exit_code(), 2);
        }
        assert_eq!(validate_name(Some(" foo-lib ")).unwrap(), "foo-lib");
    }

    #[test]
    fn test_target_stays_under_base() {
        let settings = Settings::default();
        assert!(ProjectSpec::new(Some("/tmp/elsewhere"), Path::new("/work"), &settings).is_err());

        let spec = ProjectSpec::new(Some("foo-lib"), Path::new("/work"), &settings).unwrap();
        assert!(spec.target_dir.starts_with("/work"));
        assert_eq!(spec.target_dir.parent(), Some(Path::new("/work")));
    }

    #[test]
    fn test_spec_from_settings() {
        let mut settings = Settings::default();
        settings.credentials.username = Some("octo".to_string());
        let spec = ProjectSpec::new(Some("foo-lib"), Path::new("/work"), &settings).unwrap();

        assert_eq!(spec.name, "foo-lib");
        assert_eq!(spec.version, "0.0.1");
        assert_eq!(spec.author, "octo");
        assert_eq!(spec.target_dir, PathBuf::from("/work/foo-lib"));
        assert_eq!(spec.commit_message(), "feat: initial commit foo-lib v0.0.1");
    }

    #[test]
    fn test_existing_directory_conflicts() {
        let dir = tempfile::tempdir().unwrap();
        let existing = dir.path().join("taken");
        std::fs::create_dir(&existing).unwrap();
        std::fs::write(existing.join("keep.txt"), "x").unwrap();

        let err = validate_directory_absent(&existing).unwrap_err();
        assert!(matches!(err, ScaffoldError::Conflict { .. }));
        // untouched
        assert_eq!(std::fs::read_to_string(existing.join("keep.txt")).unwrap(), "x");

        assert!(validate_directory_absent(&dir.path().join("free")).is_ok());
    }

    #[test]
    fn test_existing_file_also_conflicts() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("taken");
        std::fs::write(&file, "").unwrap();
        assert!(validate_directory_absent(&file).is_err());
    }
}
