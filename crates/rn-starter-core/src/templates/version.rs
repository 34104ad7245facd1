//! React version lookup for pinning `@types/react`

use anyhow::Result;
use semver::Version;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct PackageJson {
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    dependencies: BTreeMap<String, String>,
}

/// Parse a version string, tolerating a leading range operator or `v`
pub fn parse_version(version_str: &str) -> Result<Version> {
    let cleaned = version_str
        .trim()
        .trim_start_matches(['^', '~', '=', 'v', '>', ' ']);
    Version::parse(cleaned).map_err(|e| anyhow::anyhow!("Invalid version '{}': {}", version_str, e))
}

/// React version of a generated project.
///
/// Prefers the installed `node_modules/react/package.json`, falling back to
/// the range declared in the project's `package.json`.
pub fn react_version(project_dir: &Path) -> Option<Version> {
    let installed = project_dir.join("node_modules/react/package.json");
    if let Some(version) = read_package(&installed)
        .and_then(|pkg| pkg.version)
        .and_then(|v| parse_version(&v).ok())
    {
        return Some(version);
    }

    read_package(&project_dir.join("package.json"))
        .and_then(|pkg| pkg.dependencies.get("react").cloned())
        .and_then(|v| parse_version(&v).ok())
}

fn read_package(path: &Path) -> Option<PackageJson> {
    let content = std::fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}

/// `@types/react` package specifier matching the React minor version
pub fn types_react_spec(react: Option<&Version>) -> String {
    match react {
        Some(v) => format!("@types/react@~{}.{}.0", v.major, v.minor),
        None => "@types/react".to_string(),
    }
}
