//! rn-starter core - scaffolding for React Native and Expo projects
//!
//! The library turns a [`ProjectRequest`] (name, template, language) into a
//! ready-to-run project by shelling out to the Expo and React Native
//! generators, installing a fixed dependency set and rewriting the generated
//! Babel, ESLint, tsconfig and EAS files.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - name validation, template payloads, command runner, toolchain checks
//! - **Layer 2: Workflow Orchestration** - [`Pipeline`] over an explicit [`PipelineContext`]
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use rn_starter_core::{Language, Pipeline, PipelineContext, ProjectRequest, ShellRunner, SilentReporter, Template};
//!
//! let request = ProjectRequest::new("demo", Template::ExpoManaged, Language::TypeScript)?;
//! let ctx = PipelineContext::new(request, std::env::current_dir()?);
//! Pipeline::new(&ShellRunner, &SilentReporter).run(&ctx).await?;
//! ```

pub mod config;
pub mod error;
pub mod pipeline;
pub mod request;
pub mod runtime;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::{PackageManager, ToolchainConfig};
pub use error::{PipelineError, ScaffoldError};
pub use pipeline::{Pipeline, PipelineContext, Reporter, SilentReporter, Step};
pub use request::{validate_name, Language, ProjectRequest, Template};
pub use runtime::{CommandOutput, CommandRunner, ShellCommand, ShellRunner};
pub use templates::StarterSource;

#[cfg(feature = "tui")]
pub use tui::run;
