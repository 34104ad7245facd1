//! Charm-style CLI prompts using cliclack

use crate::config::{PackageManager, ToolchainConfig};
use crate::error::{PipelineError, ScaffoldError};
use crate::pipeline::{Pipeline, PipelineContext, Reporter};
use crate::request::{validate_name, Language, ProjectRequest, Template};
use crate::runtime::{check, ShellRunner};
use crate::templates::{commands, StarterSource};
use anyhow::Result;
use cliclack::ProgressBar;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

/// CLI arguments for a scaffolding run; `None` fields are prompted for
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    pub name: Option<String>,
    pub template: Option<Template>,
    pub language: Option<Language>,

    /// Overrides the package manager from the config file
    pub package_manager: Option<PackageManager>,

    /// Explicit toolchain config file
    pub config: Option<PathBuf>,

    /// Local directory of starter files instead of the embedded set
    pub starter_dir: Option<PathBuf>,

    /// Skip the Node.js / package manager check
    pub skip_checks: bool,
}

/// Run the CLI with interactive prompts
pub async fn run(args: CreateArgs) -> Result<()> {
    cliclack::intro("rn-starter")?;

    let cwd = std::env::current_dir()?;

    // Step 1: Load toolchain config
    let toolchain = load_toolchain(&args, &cwd)?;

    // Step 2: Prompt chain
    let request = prompt_request(&args)?;

    // Step 3: Check toolchain
    if args.skip_checks {
        cliclack::log::info("Skipping toolchain check")?;
    } else {
        check_runtimes(toolchain.package_manager)?;
    }

    // Step 4: Run pipeline
    let starter = args
        .starter_dir
        .clone()
        .map(StarterSource::Local)
        .unwrap_or_default();
    let ctx = PipelineContext::new(request, cwd)
        .with_toolchain(toolchain)
        .with_starter(starter);

    let reporter = CliclackReporter::default();
    if let Err(e) = Pipeline::new(&ShellRunner, &reporter).run(&ctx).await {
        report_failure(&e)?;
        return Err(e.into());
    }

    // Step 5: Show next steps
    print_next_steps(&ctx)?;

    Ok(())
}

fn load_toolchain(args: &CreateArgs, cwd: &std::path::Path) -> Result<ToolchainConfig> {
    let (mut toolchain, source) = ToolchainConfig::load(args.config.as_deref(), cwd)?;
    if let Some(path) = source {
        cliclack::log::info(format!("Using config from {}", path.display()))?;
    }
    if let Some(pm) = args.package_manager {
        toolchain.package_manager = pm;
    }
    Ok(toolchain)
}

/// Map a cancelled prompt to [`ScaffoldError::Cancelled`]
fn interrupted(e: io::Error) -> anyhow::Error {
    if e.kind() == io::ErrorKind::Interrupted {
        ScaffoldError::Cancelled.into()
    } else {
        e.into()
    }
}

/// Ask for every answer not supplied by a flag, in fixed order
pub fn prompt_request(args: &CreateArgs) -> Result<ProjectRequest> {
    let name = match &args.name {
        Some(name) => {
            validate_name(name).map_err(ScaffoldError::InvalidName)?;
            cliclack::log::info(format!("Project name: {}", name))?;
            name.clone()
        }
        None => cliclack::input("What is your app named?")
            .placeholder("my-app")
            .validate(|input: &String| {
                validate_name(input).map_err(|e| format!("Invalid project name: {}", e))
            })
            .interact()
            .map_err(interrupted)?,
    };

    let template = match args.template {
        Some(template) => {
            cliclack::log::info(format!("Template: {}", template.display_name()))?;
            template
        }
        None => {
            let mut select = cliclack::select("Which template are you going to use?");
            for template in Template::ALL {
                select = select.item(template, template.id(), template.display_name());
            }
            select.interact().map_err(interrupted)?
        }
    };

    let language = match args.language {
        Some(language) => {
            cliclack::log::info(format!("Language: {}", language.display_name()))?;
            language
        }
        None => {
            let mut select = cliclack::select("Which language do you prefer?");
            for language in Language::ALL {
                select = select.item(language, language.id(), "");
            }
            select
                .initial_value(Language::TypeScript)
                .interact()
                .map_err(interrupted)?
        }
    };

    Ok(ProjectRequest::new(name, template, language)?)
}

fn check_runtimes(package_manager: PackageManager) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Checking toolchain...");

    match check::check_runtimes(package_manager) {
        Ok(runtimes) => {
            let runtime_info: Vec<String> = runtimes
                .iter()
                .map(|r| format!("{} ({})", r.name, r.version.as_deref().unwrap_or("unknown")))
                .collect();
            spinner.stop(format!("Detected tools: {}", runtime_info.join(", ")));
            Ok(())
        }
        Err(e) => {
            spinner.error("Missing tools");
            cliclack::log::error(format!("{}", e))?;
            anyhow::bail!("Please install the missing tools and try again.");
        }
    }
}

fn report_failure(e: &PipelineError) -> Result<()> {
    if let Some(output) = e.source.command_output() {
        if !output.is_empty() {
            eprintln!("{}", output);
        }
    }
    cliclack::outro_cancel(format!("Aborted at step: {}", e.step))?;
    Ok(())
}

fn print_next_steps(ctx: &PipelineContext) -> Result<()> {
    let steps = commands::next_steps(&ctx.request, ctx.toolchain.package_manager);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy hacking!")?;

    Ok(())
}

/// Reporter that shows one cliclack spinner per task
#[derive(Default)]
pub struct CliclackReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl CliclackReporter {
    fn take(&self) -> Option<ProgressBar> {
        self.spinner.lock().ok().and_then(|mut s| s.take())
    }
}

impl Reporter for CliclackReporter {
    fn start(&self, label: &str) {
        let spinner = cliclack::spinner();
        spinner.start(format!("{}...", label));
        if let Ok(mut current) = self.spinner.lock() {
            *current = Some(spinner);
        }
    }

    fn succeed(&self, label: &str) {
        if let Some(spinner) = self.take() {
            spinner.stop(label);
        }
    }

    fn fail(&self, label: &str) {
        if let Some(spinner) = self.take() {
            spinner.error(label);
        }
    }

    fn info(&self, message: &str) {
        let _ = cliclack::log::info(message);
    }

    fn warn(&self, message: &str) {
        let _ = cliclack::log::warning(message);
    }
}
