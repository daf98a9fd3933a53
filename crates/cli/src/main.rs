use anyhow::Result;
use clap::Parser;

use nunit_runner::cli::Cli;
use nunit_runner::commands::run_command;

fn main() -> Result<()> {
    // Initialize tracing based on RUST_LOG env var
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    run_command(cli)
}
