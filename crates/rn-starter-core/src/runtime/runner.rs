//! External command execution
//!
//! Every package-manager and generator call goes through [`CommandRunner`] so
//! the pipeline can be driven by a fake in tests.

use crate::error::{Result, ScaffoldError};
use async_trait::async_trait;
use std::fmt;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command as TokioCommand;

/// One opaque shell invocation with the label shown next to its spinner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCommand {
    pub label: String,
    pub command: String,
}

impl ShellCommand {
    pub fn new(label: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            command: command.into(),
        }
    }
}

impl fmt::Display for ShellCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command)
    }
}

/// Captured output of a command that exited successfully
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Runs shell commands on behalf of the pipeline
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `command` in `cwd` and wait for it to exit.
    ///
    /// A non-zero exit status is an error carrying the captured output.
    async fn run(&self, command: &ShellCommand, cwd: &Path) -> Result<CommandOutput>;
}

/// Runs commands through the host shell with output captured
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellRunner;

impl ShellRunner {
    fn shell(command: &str) -> TokioCommand {
        if cfg!(windows) {
            let mut cmd = TokioCommand::new("cmd");
            cmd.arg("/C").arg(command);
            cmd
        } else {
            let mut cmd = TokioCommand::new("sh");
            cmd.arg("-c").arg(command);
            cmd
        }
    }
}

#[async_trait]
impl CommandRunner for ShellRunner {
    async fn run(&self, command: &ShellCommand, cwd: &Path) -> Result<CommandOutput> {
        tracing::debug!(cwd = %cwd.display(), command = %command.command, "running");

        let output = Self::shell(&command.command)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| ScaffoldError::CommandFailed {
                label: command.label.clone(),
                command: command.command.clone(),
                status: "could not start".to_string(),
                output: e.to_string(),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            let status = match output.status.code() {
                Some(code) => format!("exit code {}", code),
                None => "terminated by signal".to_string(),
            };
            tracing::debug!(command = %command.command, %status, "command failed");
            return Err(ScaffoldError::CommandFailed {
                label: command.label.clone(),
                command: command.command.clone(),
                status,
                output: join_output(&stdout, &stderr),
            });
        }

        Ok(CommandOutput { stdout, stderr })
    }
}

fn join_output(stdout: &str, stderr: &str) -> String {
    match (stdout.trim().is_empty(), stderr.trim().is_empty()) {
        (false, false) => format!("{}\n{}", stdout.trim_end(), stderr.trim_end()),
        (false, true) => stdout.trim_end().to_string(),
        (true, false) => stderr.trim_end().to_string(),
        (true, true) => String::new(),
    }
}
