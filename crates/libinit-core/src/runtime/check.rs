//! Tool detection for the programs the pipeline shells out to

use std::fmt;
use std::process::Command;

/// Tool detection result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInfo {
    pub name: String,
    pub version: Option<String>,
    pub available: bool,
}

impl fmt::Display for ToolInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.version, self.available) {
            (Some(v), true) => write!(f, "{} ({})", self.name, v),
            (None, true) => write!(f, "{} (unknown version)", self.name),
            (_, false) => write!(f, "{} (not installed)", self.name),
        }
    }
}

/// Check whether `program --version` runs successfully
pub fn check_tool(program: &str) -> ToolInfo {
    let output = Command::new(program).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout)
                .lines()
                .next()
                .map(|l| l.trim().to_string())
                .filter(|l| !l.is_empty());
            ToolInfo {
                name: program.to_string(),
                version,
                available: true,
            }
        }
        _ => ToolInfo {
            name: program.to_string(),
            version: None,
            available: false,
        },
    }
}

/// Check several tools, returning only the missing ones
pub fn missing_tools<'a>(programs: impl IntoIterator<Item = &'a str>) -> Vec<ToolInfo> {
    programs
        .into_iter()
        .map(check_tool)
        .filter(|info| !info.available)
        .collect()
}
