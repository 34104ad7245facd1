//! Error types shared by the pipeline, runner and prompts

use crate::pipeline::Step;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while scaffolding a project
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("Invalid project name: {0}")]
    InvalidName(String),

    /// An external command exited non-zero or could not be spawned
    #[error("{label} failed ({status}): {command}")]
    CommandFailed {
        label: String,
        command: String,
        status: String,
        /// Captured stdout followed by stderr
        output: String,
    },

    #[error("{action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The generated babel.config.js does not have the layout the patch expects
    #[error("Unexpected layout in {}: expected a `presets` entry on line {line}", .path.display())]
    UnexpectedBabelLayout { path: PathBuf, line: usize },

    #[error("Invalid configuration in {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error("Setup cancelled.")]
    Cancelled,
}

impl ScaffoldError {
    /// Wrap an I/O error with the action and path that caused it
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScaffoldError::Io {
            action,
            path: path.into(),
            source,
        }
    }

    /// Captured process output, if this error came from an external command
    pub fn command_output(&self) -> Option<&str> {
        match self {
            ScaffoldError::CommandFailed { output, .. } => Some(output.as_str()),
            _ => None,
        }
    }
}

/// A pipeline run that stopped at `step`
#[derive(Debug, Error)]
#[error("{} failed: {source}", .step.label())]
pub struct PipelineError {
    pub step: Step,
    #[source]
    pub source: ScaffoldError,
}

pub type Result<T, E = ScaffoldError> = std::result::Result<T, E>;
