//! Fixed-order provisioning pipeline
//!
//! validate -> scaffold -> version control -> install -> release setup ->
//! editor. Nothing is rolled back when a later step fails.

use super::prompt::Prompter;
use super::state::{ProvisioningState, Stage};
use super::steps;
use crate::config::{Credentials, Settings};
use crate::error::ScaffoldError;
use crate::product::ProductConfig;
use crate::project::{self, ProjectSpec};
use crate::report::Reporter;
use crate::runtime::check::missing_tools;
use crate::templates::{self, scaffold};
use crate::vcs::RepoHost;
use anyhow::Result;
use std::path::Path;

pub struct Orchestrator<'a, C: ProductConfig> {
    config: &'a C,
    host: RepoHost,
    prompter: &'a dyn Prompter,
    reporter: &'a dyn Reporter,
    open_editor: bool,
}

impl<'a, C: ProductConfig> Orchestrator<'a, C> {
    pub fn new(
        config: &'a C,
        host: RepoHost,
        prompter: &'a dyn Prompter,
        reporter: &'a dyn Reporter,
    ) -> Self {
        Self {
            config,
            host,
            prompter,
            reporter,
            open_editor: true,
        }
    }

    /// Skip the final editor launch
    pub fn without_editor(mut self) -> Self {
        self.open_editor = false;
        self
    }

    /// Validate the name and target directory; touches nothing on disk
    pub fn prepare(
        &self,
        name: Option<&str>,
        base_dir: &Path,
        settings: &Settings,
    ) -> Result<ProjectSpec, ScaffoldError> {
        project::prepare(name, base_dir, settings)
    }

    /// Validate, then run every step in order
    pub async fn run(
        &self,
        name: Option<&str>,
        base_dir: &Path,
        settings: &Settings,
    ) -> Result<(ProjectSpec, ProvisioningState)> {
        let spec = self.prepare(name, base_dir, settings)?;
        let state = self.execute(&spec, settings).await?;
        Ok((spec, state))
    }

    /// Run every step for a spec returned by [`Orchestrator::prepare`]
    pub async fn execute(
        &self,
        spec: &ProjectSpec,
        settings: &Settings,
    ) -> Result<ProvisioningState> {
        if let Some(warning) = settings.version_warning() {
            self.reporter.warn(&warning);
        }
        let state = ProvisioningState::default().advance(Stage::Validated);
        self.provision(spec, &settings.credentials, state).await
    }

    async fn provision(
        &self,
        spec: &ProjectSpec,
        credentials: &Credentials,
        state: ProvisioningState,
    ) -> Result<ProvisioningState> {
        let dir = spec.target_dir.as_path();

        let entries = templates::entries(spec);
        scaffold::create_structure(dir, &entries, self.reporter).await?;
        self.reporter.info(&format!(
            "Created {} files in {}",
            scaffold::count_files(dir),
            dir.display()
        ));
        let state = state.advance(Stage::Scaffolded);

        self.advise_missing(self.config.vcs_program());
        let state = steps::initialize_vcs(
            self.config,
            &self.host,
            spec,
            credentials,
            self.prompter,
            self.reporter,
            state,
        )
        .await?;

        let install = self.config.install_command();
        self.advise_missing(&install.program);
        let state =
            steps::install_dependencies(self.config, dir, self.prompter, self.reporter, state)
                .await?;

        let state = steps::configure_release(
            self.config,
            credentials,
            dir,
            self.prompter,
            self.reporter,
            state,
        )
        .await?;

        let state = if self.open_editor {
            steps::open_editor(self.config, dir, self.reporter, state).await?
        } else {
            state
        };

        Ok(state.advance(Stage::Done))
    }

    fn advise_missing(&self, program: &str) {
        for tool in missing_tools([program]) {
            self.reporter.warn(&format!("{}; the next step may fail", tool));
        }
    }
}
