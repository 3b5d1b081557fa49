//! Settings file loading and environment overrides

use anyhow::{Context, Result};
use semver::Version;
use serde::Deserialize;
use std::path::Path;

/// Settings file looked up in the current directory when none is given
pub const DEFAULT_SETTINGS_FILE: &str = "libinit.yaml";

/// Version written to new manifests when `INIT_VERSION` is unset
pub const DEFAULT_VERSION: &str = "0.0.1";

const VERSION_ENV: &str = "INIT_VERSION";
const TOKEN_ENV: &str = "GITHUB_ACCESS_TOKEN";
const USERNAME_ENV: &str = "GITHUB_USERNAME";

/// Raw contents of the settings file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsFile {
    #[serde(default)]
    pub init_version: Option<String>,

    #[serde(default)]
    pub github_access_token: Option<String>,

    #[serde(default)]
    pub github_username: Option<String>,
}

impl SettingsFile {
    pub fn parse(content: &str) -> Result<Self> {
        // An empty document deserializes to unit, not a map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).context("Failed to parse settings file")
    }

    /// Read a settings file. A missing file yields empty settings unless it
    /// was requested explicitly.
    pub fn read(path: &Path, required: bool) -> Result<Self> {
        if !path.exists() {
            if required {
                anyhow::bail!("Settings file not found: {}", path.display());
            }
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid settings in {}", path.display()))
    }
}

/// Hosting-service identity used for remote creation and release setup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub token: Option<String>,
    pub username: Option<String>,
}

/// Resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub version: String,
    pub credentials: Credentials,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION.to_string(),
            credentials: Credentials::default(),
        }
    }
}

impl Settings {
    /// Load the settings file (if any) and apply environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(p) => SettingsFile::read(p, true)?,
            None => SettingsFile::read(Path::new(DEFAULT_SETTINGS_FILE), false)?,
        };
        Ok(Self::resolve(file, |key| std::env::var(key).ok()))
    }

    /// Merge file values with an environment lookup; the environment wins and
    /// empty strings count as unset
    pub fn resolve<F>(file: SettingsFile, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let pick = |key: &str, fallback: Option<String>| {
            non_empty(env(key)).or_else(|| non_empty(fallback))
        };

        Self {
            version: pick(VERSION_ENV, file.init_version)
                .unwrap_or_else(|| DEFAULT_VERSION.to_string()),
            credentials: Credentials {
                token: pick(TOKEN_ENV, file.github_access_token),
                username: pick(USERNAME_ENV, file.github_username),
            },
        }
    }

    /// Warning text when the configured version is not semver
    pub fn version_warning(&self) -> Option<String> {
        match parse_version(&self.version) {
            Ok(_) => None,
            Err(e) => Some(format!("{} (using it anyway)", e)),
        }
    }

    /// Author recorded in the manifest and license
    pub fn author(&self) -> &str {
        self.credentials.username.as_deref().unwrap_or("")
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Parse version string, handling a leading 'v'
pub fn parse_version(version_str: &str) -> Result<Version> {
    let cleaned = version_str.strip_prefix('v').unwrap_or(version_str);
    Version::parse(cleaned).map_err(|e| anyhow::anyhow!("Invalid version '{}': {}", version_str, e))
}
