//! Toolchain detection for Node.js, npx and the package manager

use crate::config::PackageManager;
use anyhow::Result;
use std::process::Command;

/// Tool detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

/// Run `<binary> --version` and report whether it succeeded
pub fn check_tool(name: &'static str, binary: &str) -> RuntimeInfo {
    let output = Command::new(binary).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name,
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name,
            version: None,
            available: false,
        },
    }
}

/// Check if Node.js is available
pub fn check_node() -> RuntimeInfo {
    check_tool("Node.js", "node")
}

/// Check if npx is available (runs the React Native and Expo generators)
pub fn check_npx() -> RuntimeInfo {
    check_tool("npx", "npx")
}

pub fn check_package_manager(package_manager: PackageManager) -> RuntimeInfo {
    let name = match package_manager {
        PackageManager::Yarn => "Yarn",
        PackageManager::Npm => "npm",
    };
    check_tool(name, package_manager.binary())
}

/// Check everything the pipeline shells out to; fails listing whatever is missing.
pub fn check_runtimes(package_manager: PackageManager) -> Result<Vec<RuntimeInfo>> {
    let checks = [
        (check_node(), "Node.js (install from https://nodejs.org)"),
        (check_npx(), "npx (ships with npm, install Node.js from https://nodejs.org)"),
        (
            check_package_manager(package_manager),
            match package_manager {
                PackageManager::Yarn => "Yarn (install with `npm install --global yarn`)",
                PackageManager::Npm => "npm (ships with Node.js, https://nodejs.org)",
            },
        ),
    ];

    let mut results = Vec::new();
    let mut missing = Vec::new();
    for (info, hint) in checks {
        if info.available {
            results.push(info);
        } else {
            missing.push(hint);
        }
    }

    if !missing.is_empty() {
        anyhow::bail!(
            "Missing required tools:\n{}",
            missing
                .iter()
                .map(|m| format!("  - {}", m))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    Ok(results)
}
