//! Local repository initialization

use crate::error::ScaffoldError;
use crate::product::{CommandLine, ProductConfig};
use crate::project::ProjectSpec;
use crate::runtime::process::run_captured;
use std::path::Path;

async fn vcs<C: ProductConfig>(config: &C, dir: &Path, args: &[&str]) -> Result<(), ScaffoldError> {
    let cmd = CommandLine::new(config.vcs_program(), args.iter().copied());
    run_captured(&cmd, dir)
        .await
        .map(|_| ())
        .map_err(|e| ScaffoldError::Vcs(e.to_string()))
}

/// Init, stage everything, and make the initial commit
///
/// Stops at the first failing command.
pub async fn init_local<C: ProductConfig>(
    config: &C,
    spec: &ProjectSpec,
) -> Result<(), ScaffoldError> {
    let dir = spec.target_dir.as_path();
    let message = spec.commit_message();
    vcs(config, dir, &["init"]).await?;
    vcs(config, dir, &["add", "-A"]).await?;
    vcs(config, dir, &["commit", "-m", message.as_str()]).await?;
    Ok(())
}

/// Point `origin` at the remote repository
pub async fn add_remote<C: ProductConfig>(
    config: &C,
    dir: &Path,
    url: &str,
) -> Result<(), ScaffoldError> {
    vcs(config, dir, &["remote", "add", "origin", url]).await
}
