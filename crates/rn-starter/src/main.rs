//! rn-starter - Project scaffolding for React Native and Expo

use clap::Parser;
use colored::Colorize;
use rn_starter_core::tui::CreateArgs;
use rn_starter_core::{Language, PackageManager, Template};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "rn-starter")]
#[command(about = "CLI for scaffolding React Native and Expo projects")]
#[command(version)]
pub struct Args {
    /// Project name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Project template
    #[arg(short, long, value_enum)]
    pub template: Option<Template>,

    /// Project language
    #[arg(short, long, value_enum)]
    pub language: Option<Language>,

    /// Package manager used for installs (overrides the config file)
    #[arg(short, long, value_enum)]
    pub package_manager: Option<PackageManager>,

    /// Toolchain config file (defaults to $RN_STARTER_CONFIG, then ./rn-starter.yaml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory of starter files to copy instead of the built-in ones
    #[arg(long = "starter-dir")]
    pub starter_dir: Option<PathBuf>,

    /// Skip the Node.js and package manager check
    #[arg(long = "skip-checks")]
    pub skip_checks: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            name: args.name,
            template: args.template,
            language: args.language,
            package_manager: args.package_manager,
            config: args.config,
            starter_dir: args.starter_dir,
            skip_checks: args.skip_checks,
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[tokio::main]
async fn main() {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    init_logging(args.verbose);

    let result = rn_starter_core::run(args.into()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    if let Err(e) = result {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
