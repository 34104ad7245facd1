//! Toolchain detection and external command execution
//!
//! This module provides:
//! - Detection of Node.js, npx and the configured package manager
//! - The [`CommandRunner`] seam used for every external invocation

pub mod check;
pub mod runner;

pub use check::{check_node, check_npx, check_package_manager, check_runtimes, RuntimeInfo};
pub use runner::{CommandOutput, CommandRunner, ShellCommand, ShellRunner};
