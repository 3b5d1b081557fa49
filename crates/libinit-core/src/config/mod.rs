//! Settings and credentials
//!
//! Values come from an optional YAML settings file, overridden by the
//! environment.

pub mod settings;

pub use settings::{Credentials, Settings, SettingsFile, DEFAULT_SETTINGS_FILE, DEFAULT_VERSION};
