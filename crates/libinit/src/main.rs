//! libinit CLI - Bootstrap TypeScript library projects

use clap::Parser;
use libinit_core::tui::CreateArgs;
use libinit_core::{CommandLine, ProductConfig};
use std::path::{Path, PathBuf};

/// libinit product configuration
#[derive(Clone)]
pub struct LibConfig;

impl ProductConfig for LibConfig {
    fn name(&self) -> &'static str {
        "libinit"
    }

    fn display_name(&self) -> &'static str {
        "libinit"
    }

    fn vcs_program(&self) -> &str {
        "git"
    }

    fn install_command(&self) -> CommandLine {
        CommandLine::new("npm", ["install"])
    }

    fn release_command(&self, token: &str) -> CommandLine {
        CommandLine::new(
            "npx",
            [
                "semantic-release-cli",
                "setup",
                "--gh-token",
                token,
                "--npm-registry",
                "https://registry.npmjs.org/",
                "--ci",
                "github-actions",
            ],
        )
    }

    fn editor(&self) -> &str {
        "code"
    }

    fn default_api_url(&self) -> &'static str {
        "https://api.github.com"
    }

    fn api_url_env(&self) -> &'static str {
        "GITHUB_API_URL"
    }

    fn next_steps(&self, dir: &Path, installed: bool) -> Vec<String> {
        let mut steps = Vec::new();
        let current = std::env::current_dir().ok();

        // Step 1: cd to directory if not current
        if current.as_deref() != Some(dir) {
            steps.push(format!("cd {}", dir.display()));
        }

        if !installed {
            steps.push("npm install".to_string());
        }

        steps.push("npm test".to_string());
        steps.push("Write your first commit with `feat:` to trigger a release".to_string());

        steps
    }
}

#[derive(Parser, Debug)]
#[command(name = "libinit")]
#[command(about = "CLI for bootstrapping TypeScript library projects")]
#[command(version)]
pub struct Args {
    /// Project name; the directory is created under the current directory
    pub name: Option<String>,

    /// Settings file (YAML) to load instead of ./libinit.yaml
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,

    /// Do not open the project in an editor
    #[arg(long = "no-editor")]
    pub no_editor: bool,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            name: args.name,
            settings: args.settings,
            yes: args.yes,
            no_editor: args.no_editor,
        }
    }
}

#[tokio::main]
async fn main() {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let result = libinit_core::run(&LibConfig, args.into()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(libinit_core::exit_code(&e));
    }
}
