//! Template store: config payloads, dependency sets and starter files
//!
//! This module provides:
//! - Static config payloads (tsconfig, ESLint, EAS, Babel plugin line)
//! - Generator and package-manager commands keyed by template and language
//! - React version lookup for pinning `@types/react`
//! - Starter application files copied into managed TypeScript projects

pub mod commands;
pub mod payloads;
pub mod starter;
pub mod version;

pub use payloads::{eas_config, eslint_config, tsconfig, BABEL_PLUGIN_LINE, ESLINT_IGNORE};
pub use starter::{copy_starter, StarterFile, StarterSource};
pub use version::{react_version, types_react_spec};

/// Subdirectories created under `app/` in every project
pub const SUBFOLDERS: [&str; 8] = [
    "components",
    "screens",
    "navigation",
    "config",
    "utilities",
    "constants",
    "contexts",
    "services",
];
