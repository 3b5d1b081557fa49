//! Product configuration trait for the CLI binary
//!
//! This trait defines the external tools and endpoints the pipeline drives.
//! The binary supplies the real toolchain; tests supply commands that are
//! guaranteed to fail or succeed.

use std::path::Path;

/// A program plus its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
    /// Argument values masked when the command is displayed
    secrets: Vec<String>,
}

impl CommandLine {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            secrets: Vec::new(),
        }
    }

    /// Mask `secret` wherever it appears as an argument
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        let secret = secret.into();
        if !secret.is_empty() {
            self.secrets.push(secret);
        }
        self
    }
}

impl std::fmt::Display for CommandLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if self.secrets.contains(arg) {
                write!(f, " ****")?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// Configuration trait for the toolchain a generated project is wired to
///
/// Each implementation defines:
/// - Product identity (name, display name)
/// - The version-control binary
/// - Package manager and release-setup command lines
/// - The editor application
/// - The hosting API endpoint
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for CLI command, settings file)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Version-control binary (e.g., "git")
    fn vcs_program(&self) -> &str;

    /// Package manager install command, run inside the new project
    fn install_command(&self) -> CommandLine;

    /// Release automation setup command, parameterized by the access token
    fn release_command(&self, token: &str) -> CommandLine;

    /// Editor application, opened on the new project directory
    fn editor(&self) -> &str;

    /// Default base URL for the repository hosting API
    fn default_api_url(&self) -> &'static str;

    /// Environment variable name for overriding the API base URL
    fn api_url_env(&self) -> &'static str;

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, dir: &Path, installed: bool) -> Vec<String>;

    /// User agent string for HTTP requests
    fn user_agent(&self) -> &'static str {
        self.name()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Toolchain whose commands are configurable per test
    #[derive(Clone)]
    pub struct TestConfig {
        pub vcs: String,
        pub install: CommandLine,
        pub release: CommandLine,
        pub editor: String,
    }

    impl TestConfig {
        /// Every external command succeeds without doing anything
        pub fn succeeding() -> Self {
            Self {
                vcs: "true".to_string(),
                install: CommandLine::new("true", Vec::<String>::new()),
                release: CommandLine::new("true", Vec::<String>::new()),
                editor: "true".to_string(),
            }
        }
    }

    impl ProductConfig for TestConfig {
        fn name(&self) -> &'static str {
            "libinit-test"
        }

        fn display_name(&self) -> &'static str {
            "libinit (test)"
        }

        fn vcs_program(&self) -> &str {
            &self.vcs
        }

        fn install_command(&self) -> CommandLine {
            self.install.clone()
        }

        fn release_command(&self, _token: &str) -> CommandLine {
            self.release.clone()
        }

        fn editor(&self) -> &str {
            &self.editor
        }

        fn default_api_url(&self) -> &'static str {
            "http://127.0.0.1:9"
        }

        fn api_url_env(&self) -> &'static str {
            "LIBINIT_TEST_API_URL"
        }

        fn next_steps(&self, _dir: &Path, _installed: bool) -> Vec<String> {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line_display() {
        let cmd = CommandLine::new("npm", ["install"]);
        assert_eq!(cmd.to_string(), "npm install");

        let bare = CommandLine::new("code", Vec::<String>::new());
        assert_eq!(bare.to_string(), "code");
    }

    #[test]
    fn test_secrets_are_masked_in_display_only() {
        let cmd = CommandLine::new("npx", ["setup", "--gh-token", "abc123"]).with_secret("abc123");
        assert_eq!(cmd.to_string(), "npx setup --gh-token ****");
        assert_eq!(cmd.args[2], "abc123");
    }
}
