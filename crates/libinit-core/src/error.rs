//! Error taxonomy for the provisioning pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while bootstrapping a project
///
/// Pre-mutation failures (`Usage`, `InvalidName`, `Conflict`) abort before
/// anything touches the disk. `Vcs` failures are logged by the pipeline and
/// never abort it.
/// Everything else is fatal once raised.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("Missing project name.\nUsage: libinit <project-name>")]
    Usage,

    #[error("Invalid project name '{0}': expected a single directory name")]
    InvalidName(String),

    #[error("Directory already exists: {}", .path.display())]
    Conflict { path: PathBuf },

    #[error("Failed to create {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Version control setup failed: {0}")]
    Vcs(String),

    #[error("Dependency installation failed: {0}")]
    Install(String),

    #[error("Release setup failed: {0}")]
    ReleaseSetup(String),

    #[error("Could not open editor: {0}")]
    EditorLaunch(String),

    #[error("Prompt failed: {0}")]
    Prompt(#[from] std::io::Error),
}

impl ScaffoldError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage | Self::InvalidName(_) => 2,
            Self::Conflict { .. } => 3,
            _ => 1,
        }
    }
}

/// Map any pipeline error to a process exit status
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<ScaffoldError>()
        .map(ScaffoldError::exit_code)
        .unwrap_or(1)
}
