//! Drives one console-runner invocation: validate targets, synthesize the
//! command, spawn, then interpret the exit code and optional XML report.

use std::io;
use std::path::PathBuf;

use tracing::{debug, error, info};

use crate::command::{NunitCommand, build_arguments, resolve_executable};
use crate::config::RunConfig;
use crate::error::{Error, Result};
use crate::report::{Passthrough, ReportFormatter};
use crate::types::HostOs;

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub exit_code: i32,
    /// Formatted report text when teamcity reporting was requested.
    pub report: Option<String>,
}

/// Orchestrates a single run. The resolver and builder underneath are pure;
/// everything stateful (host detection, temp report path, the child
/// process) lives here.
pub struct NunitRunner {
    config: RunConfig,
    host: HostOs,
    formatter: Box<dyn ReportFormatter>,
}

impl NunitRunner {
    pub fn new(config: RunConfig) -> Self {
        Self {
            config,
            host: HostOs::current(),
            formatter: Box::new(Passthrough),
        }
    }

    pub fn with_host(mut self, host: HostOs) -> Self {
        self.host = host;
        self
    }

    pub fn with_formatter(mut self, formatter: Box<dyn ReportFormatter>) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Synthesizes the command that `run` would spawn, without spawning it
    /// or allocating a temp report path. Used for dry runs.
    pub fn command(&self, assemblies: &[PathBuf]) -> Result<NunitCommand> {
        validate_targets(assemblies)?;
        Ok(self.command_for(&self.config, assemblies))
    }

    pub fn run(&self, assemblies: &[PathBuf]) -> Result<RunSummary> {
        validate_targets(assemblies)?;

        let mut config = self.config.clone();

        // When teamcity reporting is on and no result path was configured,
        // allocate a temp path for this run only. Path-only: the runner
        // creates the file; the TempPath guard deletes whatever is there
        // once the run is over, success or failure.
        let _temp_report;
        if config.teamcity && !config.options.contains_key("result") {
            let temp_path = tempfile::Builder::new()
                .prefix("nunit")
                .suffix(".xml")
                .tempfile()
                .map_err(Error::Io)?
                .into_temp_path();
            let _ = std::fs::remove_file(&temp_path);
            config
                .options
                .insert("result", temp_path.display().to_string());
            _temp_report = temp_path;
        }

        let command = self.command_for(&config, assemblies);
        info!("Running: {}", command.to_shell_command());

        let status = command.execute().map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                Error::ExecutableNotFound(command.program.clone())
            } else {
                Error::Spawn(e)
            }
        })?;
        let exit_code = status.code().unwrap_or(-1);
        debug!(exit_code, "runner process exited");

        let report = if config.teamcity {
            Some(self.read_report(&config)?)
        } else {
            None
        };

        if exit_code != 0 {
            error!("NUnit tests failed.");
            if !config.continue_on_error {
                return Err(Error::TestsFailed { exit_code });
            }
        } else {
            info!("NUnit tests passed");
        }

        Ok(RunSummary { exit_code, report })
    }

    fn command_for(&self, config: &RunConfig, assemblies: &[PathBuf]) -> NunitCommand {
        let executable = resolve_executable(config);
        let args = build_arguments(config, assemblies, self.host);
        NunitCommand::for_host(executable, args, self.host)
    }

    fn read_report(&self, config: &RunConfig) -> Result<String> {
        let path = result_path(config);
        if !path.exists() {
            return Err(Error::ReportMissing(path));
        }
        let text = std::fs::read_to_string(&path)?;
        let summary = self.formatter.summarize(&text);
        info!("{summary}");
        Ok(summary)
    }
}

fn validate_targets(assemblies: &[PathBuf]) -> Result<()> {
    if assemblies.is_empty() {
        return Err(Error::MissingInput("Some assemblies required.".to_string()));
    }
    if assemblies.iter().any(|path| path.as_os_str().is_empty()) {
        return Err(Error::MissingInput("File is required.".to_string()));
    }
    Ok(())
}

fn result_path(config: &RunConfig) -> PathBuf {
    use crate::types::OptionValue;

    match config.options.get("result") {
        Some(OptionValue::Text(path)) => PathBuf::from(path),
        _ => PathBuf::new(),
    }
}
