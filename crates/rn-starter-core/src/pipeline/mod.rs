//! Scaffolding pipeline
//!
//! A run is a fixed sequence of [`Step`]s over an immutable
//! [`PipelineContext`]. Steps execute strictly in order and the first failure
//! aborts the run with a [`PipelineError`] naming the step; nothing already
//! written is rolled back.

pub mod babel;
mod steps;

pub use steps::create_app_dirs;

use crate::config::ToolchainConfig;
use crate::error::{PipelineError, Result};
use crate::request::{ProjectRequest, Template};
use crate::runtime::{CommandOutput, CommandRunner, ShellCommand};
use crate::templates::{starter, StarterSource};
use std::fmt;
use std::future::Future;
use std::path::{Path, PathBuf};

/// One sequential unit of the scaffolding process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    CreateProject,
    EnterProject,
    CreateSubfolders,
    InstallDependencies,
    ConfigureBabel,
    ConfigureEslint,
    ConfigureEas,
    CopyStarter,
}

impl Step {
    pub const ALL: [Step; 8] = [
        Step::CreateProject,
        Step::EnterProject,
        Step::CreateSubfolders,
        Step::InstallDependencies,
        Step::ConfigureBabel,
        Step::ConfigureEslint,
        Step::ConfigureEas,
        Step::CopyStarter,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Step::CreateProject => "Create project",
            Step::EnterProject => "Enter project directory",
            Step::CreateSubfolders => "Create app folders",
            Step::InstallDependencies => "Install dependencies",
            Step::ConfigureBabel => "Configure Babel",
            Step::ConfigureEslint => "Configure ESLint",
            Step::ConfigureEas => "Configure EAS",
            Step::CopyStarter => "Copy starter files",
        }
    }

    /// Whether this step runs for `request`
    pub fn applies_to(&self, request: &ProjectRequest) -> bool {
        match self {
            Step::ConfigureEas => request.template != Template::Bare,
            Step::CopyStarter => starter::applies_to(request),
            _ => true,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Progress output for a pipeline run
pub trait Reporter: Send + Sync {
    /// A long-running task started
    fn start(&self, label: &str);
    /// The task started last finished successfully
    fn succeed(&self, label: &str);
    /// The task started last failed
    fn fail(&self, label: &str);
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
}

/// Reporter that only forwards to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn start(&self, label: &str) {
        tracing::debug!("{label}...");
    }

    fn succeed(&self, label: &str) {
        tracing::debug!("{label}: done");
    }

    fn fail(&self, label: &str) {
        tracing::debug!("{label}: failed");
    }

    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }
}

/// Everything a run needs; the project directory is explicit so no step
/// changes the process working directory.
#[derive(Debug, Clone)]
pub struct PipelineContext {
    pub request: ProjectRequest,
    /// Directory the project is generated in
    pub parent_dir: PathBuf,
    /// `parent_dir/name`, where every step after creation operates
    pub project_dir: PathBuf,
    pub toolchain: ToolchainConfig,
    pub starter: StarterSource,
}

impl PipelineContext {
    pub fn new(request: ProjectRequest, parent_dir: impl Into<PathBuf>) -> Self {
        let parent_dir = parent_dir.into();
        let project_dir = parent_dir.join(&request.name);
        Self {
            request,
            parent_dir,
            project_dir,
            toolchain: ToolchainConfig::default(),
            starter: StarterSource::default(),
        }
    }

    pub fn with_toolchain(mut self, toolchain: ToolchainConfig) -> Self {
        self.toolchain = toolchain;
        self
    }

    pub fn with_starter(mut self, starter: StarterSource) -> Self {
        self.starter = starter;
        self
    }

    /// Path of a file inside the project
    pub fn project_file(&self, relative: &str) -> PathBuf {
        self.project_dir.join(relative)
    }
}

/// Drives the steps for one context
pub struct Pipeline<'a> {
    runner: &'a dyn CommandRunner,
    reporter: &'a dyn Reporter,
}

impl<'a> Pipeline<'a> {
    pub fn new(runner: &'a dyn CommandRunner, reporter: &'a dyn Reporter) -> Self {
        Self { runner, reporter }
    }

    /// Steps that will run for `request`, in order
    pub fn plan(request: &ProjectRequest) -> Vec<Step> {
        Step::ALL
            .into_iter()
            .filter(|step| step.applies_to(request))
            .collect()
    }

    /// Run every applicable step, stopping at the first failure
    pub async fn run(&self, ctx: &PipelineContext) -> Result<(), PipelineError> {
        for step in Self::plan(&ctx.request) {
            tracing::debug!(step = %step, "starting step");
            self.execute(step, ctx)
                .await
                .map_err(|source| PipelineError { step, source })?;
        }
        Ok(())
    }

    /// Run a single step
    pub async fn execute(&self, step: Step, ctx: &PipelineContext) -> Result<()> {
        match step {
            Step::CreateProject => steps::create_project(self, ctx).await,
            Step::EnterProject => steps::enter_project(self, ctx),
            Step::CreateSubfolders => steps::create_subfolders(self, ctx).await,
            Step::InstallDependencies => steps::install_dependencies(self, ctx).await,
            Step::ConfigureBabel => steps::configure_babel(self, ctx).await,
            Step::ConfigureEslint => steps::configure_eslint(self, ctx).await,
            Step::ConfigureEas => steps::configure_eas(self, ctx).await,
            Step::CopyStarter => steps::copy_starter(self, ctx).await,
        }
    }

    pub(crate) fn reporter(&self) -> &dyn Reporter {
        self.reporter
    }

    /// Run one external command behind a spinner
    pub(crate) async fn command(&self, command: &ShellCommand, cwd: &Path) -> Result<CommandOutput> {
        self.task(&command.label, self.runner.run(command, cwd)).await
    }

    /// Run any fallible task behind a spinner
    pub(crate) async fn task<T, F>(&self, label: &str, work: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        self.reporter.start(label);
        match work.await {
            Ok(value) => {
                self.reporter.succeed(label);
                Ok(value)
            }
            Err(e) => {
                self.reporter.fail(label);
                Err(e)
            }
        }
    }
}
