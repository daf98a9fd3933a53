use anyhow::{Context, Result};
use nunit_runner_core::{Error, NunitRunner, RunConfig};
use tracing::{debug, info};

use crate::cli::Cli;
use crate::utils::parse_option_arg;

pub fn run_command(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    let runner = NunitRunner::new(config);

    if cli.dry_run {
        let command = runner.command(&cli.assemblies)?;
        println!("{}", command.to_shell_command());
        return Ok(());
    }

    match runner.run(&cli.assemblies) {
        Ok(summary) => {
            debug!(exit_code = summary.exit_code, "run finished");
            Ok(())
        }
        Err(Error::TestsFailed { exit_code }) => {
            // Propagate the child's exit code to the pipeline.
            eprintln!("Error: NUnit tests failed.");
            std::process::exit(if exit_code > 0 { exit_code } else { 1 });
        }
        Err(err) => Err(err.into()),
    }
}

/// Loads the config file (explicit flag, or nearest `.nunit-runner.json` /
/// `nunit-runner.json` above the working directory) and folds the CLI
/// overrides on top.
fn load_config(cli: &Cli) -> Result<RunConfig> {
    let mut config = match &cli.config {
        Some(path) => RunConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => {
            let cwd = std::env::current_dir()?;
            match RunConfig::find_config_file(&cwd) {
                Some(path) => {
                    info!("Using config file {}", path.display());
                    RunConfig::load_from_file(&path)
                        .with_context(|| format!("Failed to load config from {}", path.display()))?
                }
                None => RunConfig::default(),
            }
        }
    };

    if let Some(executable) = &cli.executable {
        config.executable = Some(executable.clone());
    }
    if let Some(platform) = cli.platform {
        config.platform = Some(platform.into());
    }
    for option in &cli.options {
        let (key, value) = parse_option_arg(option);
        config.options.insert(key, value);
    }
    if cli.teamcity {
        config.teamcity = true;
    }
    if cli.continue_on_error {
        config.continue_on_error = true;
    }

    Ok(config)
}
