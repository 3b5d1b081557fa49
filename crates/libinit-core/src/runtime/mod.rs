//! External process handling
//!
//! This module provides:
//! - Captured and streamed subprocess invocation
//! - Detection of the tools the pipeline depends on

pub mod check;
pub mod process;

pub use check::{check_tool, missing_tools, ToolInfo};
pub use process::{run_captured, run_streamed, ProcessError};
