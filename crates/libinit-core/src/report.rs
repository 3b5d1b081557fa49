//! Progress reporting for pipeline components
//!
//! Components report through this trait so they can run under the cliclack
//! TUI or a recording sink in tests.

pub trait Reporter {
    /// One unit of progress (a created file, a finished command)
    fn step(&self, message: &str);
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}
