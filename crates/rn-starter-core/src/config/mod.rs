//! Toolchain configuration

pub mod toolchain;

pub use toolchain::{PackageManager, ToolchainConfig, CONFIG_ENV, DEFAULT_CONFIG_FILE};
