//! Package manager selection and extra dependencies, loaded from YAML

use crate::error::{Result, ScaffoldError};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Environment variable pointing at a config file
pub const CONFIG_ENV: &str = "RN_STARTER_CONFIG";

/// Config file picked up from the working directory when nothing else is given
pub const DEFAULT_CONFIG_FILE: &str = "rn-starter.yaml";

/// Package manager used for dependency installs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Yarn,
    Npm,
}

impl PackageManager {
    /// Binary name, also used for availability checks
    pub fn binary(&self) -> &'static str {
        match self {
            PackageManager::Yarn => "yarn",
            PackageManager::Npm => "npm",
        }
    }

    /// Command adding `packages` to the project in the current directory
    pub fn add_command(&self, packages: &[String], dev: bool) -> String {
        let (verb, dev_flag) = match self {
            PackageManager::Yarn => ("add", "--dev"),
            PackageManager::Npm => ("install", "--save-dev"),
        };
        let mut cmd = format!("{} {} {}", self.binary(), verb, packages.join(" "));
        if dev {
            cmd.push(' ');
            cmd.push_str(dev_flag);
        }
        cmd
    }

    /// Command that starts the development server
    pub fn start_command(&self) -> &'static str {
        match self {
            PackageManager::Yarn => "yarn start",
            PackageManager::Npm => "npm start",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.binary())
    }
}

/// User-tunable parts of the scaffolding toolchain
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolchainConfig {
    #[serde(default)]
    pub package_manager: PackageManager,

    /// Installed after the fixed dependency set
    #[serde(default)]
    pub extra_dependencies: Vec<String>,

    /// Installed as dev dependencies after the fixed dependency set
    #[serde(default)]
    pub extra_dev_dependencies: Vec<String>,
}

impl ToolchainConfig {
    pub fn from_yaml(content: &str, path: &Path) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| ScaffoldError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Read and parse a config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ScaffoldError::io("Failed to read", path, e))?;
        Self::from_yaml(&content, path)
    }

    /// Pick the config file to use: explicit path, then the env value, then
    /// `rn-starter.yaml` in `cwd` if it exists.
    pub fn resolve_path(
        explicit: Option<&Path>,
        env_value: Option<&str>,
        cwd: &Path,
    ) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        if let Some(value) = env_value.filter(|v| !v.trim().is_empty()) {
            return Some(PathBuf::from(value));
        }
        let local = cwd.join(DEFAULT_CONFIG_FILE);
        local.is_file().then_some(local)
    }

    /// Load the effective config, returning the file it came from (if any)
    pub fn load(explicit: Option<&Path>, cwd: &Path) -> Result<(Self, Option<PathBuf>)> {
        let env_value = std::env::var(CONFIG_ENV).ok();
        match Self::resolve_path(explicit, env_value.as_deref(), cwd) {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading toolchain config");
                let config = Self::from_file(&path)?;
                Ok((config, Some(path)))
            }
            None => Ok((Self::default(), None)),
        }
    }
}
