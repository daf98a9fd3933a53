use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use nunit_runner_core::Platform;

/// Runs NUnit test assemblies through the console runner
#[derive(Parser, Debug)]
#[command(name = "nunit-runner")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    /// Test assemblies to run
    pub assemblies: Vec<PathBuf>,

    /// JSON config file (default: nearest .nunit-runner.json)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to the console runner, or a directory containing it
    #[arg(short, long)]
    pub executable: Option<String>,

    /// Runner platform variant
    #[arg(long, value_enum)]
    pub platform: Option<PlatformArg>,

    /// Runner switch, e.g. `-o nologo` or `-o config=Release` (repeatable,
    /// passed through in order)
    #[arg(short = 'o', long = "option", value_name = "KEY[=VALUE]")]
    pub options: Vec<String>,

    /// Write an XML report and summarize it into the log
    #[arg(long)]
    pub teamcity: bool,

    /// Log test failures instead of failing the run
    #[arg(long)]
    pub continue_on_error: bool,

    /// Print the command without executing it
    #[arg(short = 'd', long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlatformArg {
    X86,
    Anycpu,
}

impl From<PlatformArg> for Platform {
    fn from(value: PlatformArg) -> Self {
        match value {
            PlatformArg::X86 => Platform::X86,
            PlatformArg::Anycpu => Platform::AnyCpu,
        }
    }
}
