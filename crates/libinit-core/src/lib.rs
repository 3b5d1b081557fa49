//! libinit core - bootstrap a TypeScript library project in one command
//!
//! Given a project name, the library creates the directory tree, writes the
//! tooling boilerplate, commits it to a fresh repository, and optionally
//! creates the remote repository, installs dependencies, configures release
//! automation and opens an editor.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Content catalog, scaffolding, subprocess and
//!   HTTP calls, each testable on its own
//! - **Layer 2: Workflow Orchestration** - `ProductConfig` trait, `Prompter`
//!   abstraction and the `Orchestrator` running the fixed step order
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use libinit_core::{pipeline::AssumeYes, Orchestrator, RepoHost, Settings};
//!
//! // MyReporter implements report::Reporter
//! let settings = Settings::load(None)?;
//! let host = RepoHost::from_config(&MyConfig)?;
//! let orchestrator = Orchestrator::new(&MyConfig, host, &AssumeYes, &MyReporter);
//! let (spec, state) = orchestrator.run(Some("foo-lib"), &cwd, &settings).await?;
//! ```

pub mod config;
pub mod error;
pub mod pipeline;
pub mod product;
pub mod project;
pub mod report;
pub mod runtime;
pub mod templates;
pub mod vcs;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::{Credentials, Settings};
pub use error::{exit_code, ScaffoldError};
pub use pipeline::{Orchestrator, ProvisioningState, Stage};
pub use product::{CommandLine, ProductConfig};
pub use project::ProjectSpec;
pub use vcs::RepoHost;

#[cfg(feature = "tui")]
pub use tui::run;
