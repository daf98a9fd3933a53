//! nunit-runner - a thin adapter around the NUnit console runner
//!
//! This crate provides functionality to:
//! - Resolve the console-runner executable from configuration (platform
//!   variant selection, quote unwrapping, directory joining)
//! - Synthesize the runner's argument vector from an ordered option map
//! - Spawn the runner (directly on Windows, under mono elsewhere) and turn
//!   its exit code and optional XML report into a run summary
pub mod command;
pub mod config;
pub mod error;
pub mod report;
pub mod runner;
pub mod types;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;

pub use command::{NunitCommand, build_arguments, resolve_executable};
pub use config::{Options, RunConfig};
pub use report::{Passthrough, ReportFormatter};
pub use runner::{NunitRunner, RunSummary};
