//! Provisioning pipeline
//!
//! This module provides:
//! - The confirmation abstraction injected into optional steps
//! - The state value threaded between steps
//! - The version-control, install, release and editor steps
//! - The orchestrator running them in fixed order

pub mod orchestrator;
pub mod prompt;
pub mod state;
pub mod steps;

pub use orchestrator::Orchestrator;
pub use prompt::{AssumeYes, Prompter};
pub use state::{ProvisioningState, Stage};
