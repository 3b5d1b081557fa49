//! The optional provisioning steps that run after scaffolding
//!
//! Version-control failures are logged and swallowed. Install, release setup
//! and editor failures are returned to the caller.

use super::prompt::Prompter;
use super::state::{ProvisioningState, Stage};
use crate::config::Credentials;
use crate::error::ScaffoldError;
use crate::product::ProductConfig;
use crate::project::ProjectSpec;
use crate::report::Reporter;
use crate::runtime::process::run_streamed;
use crate::vcs::{self, CreateRepoRequest, RepoHost};
use std::path::Path;
use tokio::process::Command as TokioCommand;

/// Commit the scaffolded tree locally, then optionally create the remote
///
/// Only prompt I/O errors escape; every version-control failure is reported
/// and leaves `remote_repo_created` false.
pub async fn initialize_vcs<C: ProductConfig>(
    config: &C,
    host: &RepoHost,
    spec: &ProjectSpec,
    credentials: &Credentials,
    prompter: &dyn Prompter,
    reporter: &dyn Reporter,
    state: ProvisioningState,
) -> Result<ProvisioningState, ScaffoldError> {
    match vcs::init_local(config, spec).await {
        Ok(()) => reporter.step(&format!("Committed \"{}\"", spec.commit_message())),
        Err(e) => reporter.error(&e.to_string()),
    }
    let state = state.advance(Stage::VcsInitialized);

    let question = format!("Create a GitHub repository named {}?", spec.name);
    if !prompter.confirm(&question, false)? {
        reporter.info("Skipping remote repository");
        return Ok(state);
    }
    let private = prompter.confirm("Make the repository private?", true)?;

    match create_remote(config, host, spec, credentials, private).await {
        Ok(url) => {
            reporter.step(&format!("Created remote {}", url));
            Ok(state.with_remote())
        }
        Err(e) => {
            reporter.error(&e.to_string());
            Ok(state)
        }
    }
}

async fn create_remote<C: ProductConfig>(
    config: &C,
    host: &RepoHost,
    spec: &ProjectSpec,
    credentials: &Credentials,
    private: bool,
) -> Result<String, ScaffoldError> {
    let token = credentials
        .token
        .as_deref()
        .ok_or_else(|| ScaffoldError::Vcs("GITHUB_ACCESS_TOKEN is not set".to_string()))?;
    let username = credentials
        .username
        .as_deref()
        .ok_or_else(|| ScaffoldError::Vcs("GITHUB_USERNAME is not set".to_string()))?;

    let request = CreateRepoRequest {
        name: spec.name.clone(),
        private,
    };
    host.create_repo(token, &request).await?;

    let url = vcs::remote_url(username, &spec.name);
    vcs::add_remote(config, &spec.target_dir, &url)
        .await
        .map_err(|e| {
            let detail = match e {
                ScaffoldError::Vcs(detail) => detail,
                other => other.to_string(),
            };
            ScaffoldError::Vcs(format!(
                "repository {} was created but not linked as origin: {}",
                url, detail
            ))
        })?;
    Ok(url)
}

/// Offer to run the package manager's install inside the project
pub async fn install_dependencies<C: ProductConfig>(
    config: &C,
    dir: &Path,
    prompter: &dyn Prompter,
    reporter: &dyn Reporter,
    state: ProvisioningState,
) -> Result<ProvisioningState, ScaffoldError> {
    let cmd = config.install_command();
    if !prompter.confirm(&format!("Install dependencies now ({})?", cmd), true)? {
        reporter.info("Skipping dependency installation");
        return Ok(state.advance(Stage::DepsResolved));
    }

    run_streamed(&cmd, dir)
        .await
        .map_err(|e| ScaffoldError::Install(e.to_string()))?;
    reporter.step("Dependencies installed");

    Ok(state.with_dependencies().advance(Stage::DepsResolved))
}

/// Offer release automation setup; only reachable once a remote exists
pub async fn configure_release<C: ProductConfig>(
    config: &C,
    credentials: &Credentials,
    dir: &Path,
    prompter: &dyn Prompter,
    reporter: &dyn Reporter,
    state: ProvisioningState,
) -> Result<ProvisioningState, ScaffoldError> {
    if !state.remote_repo_created {
        return Ok(state.advance(Stage::ReleaseConfigured));
    }

    if !prompter.confirm("Set up automated releases?", true)? {
        reporter.info("Skipping release setup");
        return Ok(state.advance(Stage::ReleaseConfigured));
    }

    let token = credentials.token.as_deref().unwrap_or_default();
    let cmd = config.release_command(token).with_secret(token);
    run_streamed(&cmd, dir)
        .await
        .map_err(|e| ScaffoldError::ReleaseSetup(e.to_string()))?;
    reporter.step("Release automation configured");

    Ok(state.advance(Stage::ReleaseConfigured))
}

/// Open the project in the configured editor
pub async fn open_editor<C: ProductConfig>(
    config: &C,
    dir: &Path,
    reporter: &dyn Reporter,
    state: ProvisioningState,
) -> Result<ProvisioningState, ScaffoldError> {
    let editor = config.editor();
    let mut cmd = TokioCommand::from(open::with_command(".", editor));
    cmd.current_dir(dir);

    let status = cmd
        .status()
        .await
        .map_err(|e| ScaffoldError::EditorLaunch(format!("{}: {}", editor, e)))?;
    if !status.success() {
        return Err(ScaffoldError::EditorLaunch(format!(
            "{} exited with code {}",
            editor,
            status.code().unwrap_or(-1)
        )));
    }
    reporter.step(&format!("Opened {} in {}", dir.display(), editor));

    Ok(state.advance(Stage::EditorOpened))
}
