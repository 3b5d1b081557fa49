//! Charm-style CLI prompts using cliclack

use crate::config::Settings;
use crate::error::ScaffoldError;
use crate::pipeline::{AssumeYes, Orchestrator, Prompter};
use crate::product::ProductConfig;
use crate::project;
use crate::report::Reporter;
use crate::vcs::RepoHost;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// CLI arguments for creating a project
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project name, also the directory created under the current directory
    pub name: Option<String>,

    /// Settings file to load instead of the default
    pub settings: Option<PathBuf>,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,

    /// Do not open the editor at the end
    pub no_editor: bool,
}

/// Yes/no questions asked inline in the terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct ClackPrompter;

impl Prompter for ClackPrompter {
    fn confirm(&self, question: &str, default: bool) -> Result<bool, ScaffoldError> {
        let answer = cliclack::confirm(question)
            .initial_value(default)
            .interact()?;
        Ok(answer)
    }
}

/// Progress lines rendered with cliclack's log styles
#[derive(Debug, Default, Clone, Copy)]
pub struct ClackReporter;

impl Reporter for ClackReporter {
    fn step(&self, message: &str) {
        let _ = cliclack::log::step(message);
    }

    fn info(&self, message: &str) {
        let _ = cliclack::log::info(message);
    }

    fn warn(&self, message: &str) {
        let _ = cliclack::log::warning(message);
    }

    fn error(&self, message: &str) {
        let _ = cliclack::log::error(message);
    }
}

/// Run the CLI with interactive prompts
pub async fn run<C: ProductConfig>(config: &C, args: CreateArgs) -> Result<()> {
    // Step 1: Load settings before looking at the project name
    let settings = Settings::load(args.settings.as_deref())?;
    let base_dir = std::env::current_dir().context("Failed to read current directory")?;

    // Step 2: Validate before printing or configuring anything else
    let spec = project::prepare(args.name.as_deref(), &base_dir, &settings)?;

    // Step 3: Wire the pipeline
    let host = RepoHost::from_config(config)?;
    let prompter: &dyn Prompter = if args.yes { &AssumeYes } else { &ClackPrompter };
    let reporter = ClackReporter;
    let mut orchestrator = Orchestrator::new(config, host, prompter, &reporter);
    if args.no_editor {
        orchestrator = orchestrator.without_editor();
    }

    cliclack::intro(config.display_name())?;
    if args.yes {
        cliclack::log::info("Accepting all prompts (--yes mode)")?;
    }

    // Step 4: Provision
    let state = match orchestrator.execute(&spec, &settings).await {
        Ok(state) => state,
        Err(e) => {
            cliclack::outro_cancel(format!("Stopped after creating {}", spec.target_dir.display()))?;
            return Err(e);
        }
    };

    // Step 5: Show next steps
    print_next_steps(config, &spec.target_dir, state.dependencies_installed)?;

    Ok(())
}

fn print_next_steps<C: ProductConfig>(
    config: &C,
    project_dir: &Path,
    installed: bool,
) -> Result<()> {
    let steps = config.next_steps(project_dir, installed);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy hacking!")?;

    Ok(())
}
