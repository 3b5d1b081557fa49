//! Typed subprocess invocation
//!
//! Two flavors: captured (for quick version-control commands whose output
//! only matters on failure) and attached (for installers and setup wizards
//! the user should watch and answer live).

use crate::product::CommandLine;
use colored::Colorize;
use std::path::Path;
use std::process::Stdio;
use thiserror::Error;
use tokio::process::{Child, Command as TokioCommand};

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("could not start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with code {code}{}", detail(.stderr))]
    Failed {
        command: String,
        code: i32,
        stderr: String,
    },
}

fn detail(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {}", trimmed)
    }
}

fn command(cmd: &CommandLine, cwd: &Path) -> TokioCommand {
    let mut command = TokioCommand::new(&cmd.program);
    command.args(&cmd.args).current_dir(cwd);
    command
}

/// Run a command to completion, capturing its output
///
/// Returns stdout on success.
pub async fn run_captured(cmd: &CommandLine, cwd: &Path) -> Result<String, ProcessError> {
    let output = command(cmd, cwd)
        .stdin(Stdio::null())
        .output()
        .await
        .map_err(|source| ProcessError::Spawn {
            command: cmd.to_string(),
            source,
        })?;

    if !output.status.success() {
        return Err(ProcessError::Failed {
            command: cmd.to_string(),
            code: output.status.code().unwrap_or(-1),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Run a command attached to the user's terminal
///
/// Shows the command being executed first. The child shares our stdin,
/// stdout and stderr so interactive questionnaires work unbuffered. No
/// timeout is applied.
pub async fn run_streamed(cmd: &CommandLine, cwd: &Path) -> Result<(), ProcessError> {
    let display = cmd.to_string();
    println!();
    println!("{} {}", "Running:".dimmed(), display.yellow());
    println!();

    let mut child = spawn_attached(cmd, cwd, Stdio::inherit())?;
    let status = child.wait().await.map_err(|source| ProcessError::Spawn {
        command: display.clone(),
        source,
    })?;
    println!();

    if status.success() {
        Ok(())
    } else {
        Err(ProcessError::Failed {
            command: display,
            code: status.code().unwrap_or(-1),
            stderr: String::new(),
        })
    }
}

fn spawn_attached(cmd: &CommandLine, cwd: &Path, stdin: Stdio) -> Result<Child, ProcessError> {
    command(cmd, cwd)
        .stdin(stdin)
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|source| ProcessError::Spawn {
            command: cmd.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_captured_returns_stdout() {
        let dir = tempfile::tempdir().unwrap();
        let cmd = CommandLine::new("echo", ["hello"]);
        let out = run_captured(&cmd, dir.path()).await.unwrap();
        assert_eq!(out.trim(), "hello");
    }

    #[tokio::test]
    async fn test_captured_runs_in_working_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("marker"), "").unwrap();
        let out = run_captured(&CommandLine::new("ls", Vec::<String>::new()), dir.path())
            .await
            .unwrap();
        assert!(out.contains("marker"));
    }

    #[tokio::test]
    async fn test_captured_failure_has_exit_code() {
        let dir = tempfile::tempdir().unwrap();
        let err = run_captured(&CommandLine::new("false", Vec::<String>::new()), dir.path())
            .await
            .unwrap_err();
        assert!(matches!(err, ProcessError::Failed { code: 1, .. }));
    }

    #[tokio::test]
    async fn test_missing_program_is_spawn_error() {
        let dir = tempfile::tempdir().unwrap();
        let cmd = CommandLine::new("libinit-definitely-not-a-program", Vec::<String>::new());
        let err = run_captured(&cmd, dir.path()).await.unwrap_err();
        assert!(matches!(err, ProcessError::Spawn { .. }));
        assert!(err.to_string().contains("libinit-definitely-not-a-program"));
    }

    #[tokio::test]
    async fn test_streamed_success_and_failure() {
        let dir = tempfile::tempdir().unwrap();
        let ok = CommandLine::new("sh", ["-c", "echo out; echo err >&2"]);
        assert!(run_streamed(&ok, dir.path()).await.is_ok());

        let failing = CommandLine::new("sh", ["-c", "exit 3"]);
        let err = run_streamed(&failing, dir.path()).await.unwrap_err();
        assert!(matches!(err, ProcessError::Failed { code: 3, .. }));
    }

    #[tokio::test]
    async fn test_attached_child_answers_unterminated_prompt() {
        let dir = tempfile::tempdir().unwrap();
        let answers = dir.path().join("answers");
        std::fs::write(&answers, "bob\n").unwrap();

        let cmd = CommandLine::new(
            "sh",
            ["-c", r#"printf "npm username? "; read x; test "$x" = bob"#],
        );
        let stdin = Stdio::from(std::fs::File::open(&answers).unwrap());
        let mut child = spawn_attached(&cmd, dir.path(), stdin).unwrap();

        // nothing is piped back through us, so partial lines reach the terminal as written
        assert!(child.stdout.is_none());
        assert!(child.stderr.is_none());
        assert!(child.wait().await.unwrap().success());
    }
}
