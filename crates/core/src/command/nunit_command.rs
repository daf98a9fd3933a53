use std::io;
use std::process::{Command, ExitStatus};

use crate::types::HostOs;

/// A fully-resolved, spawnable runner invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct NunitCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl NunitCommand {
    /// Wraps the resolved executable for the host: Windows launches the
    /// console runner directly, everywhere else it runs under mono with
    /// the runner path as the first argument.
    pub fn for_host(executable: String, mut args: Vec<String>, host: HostOs) -> Self {
        match host {
            HostOs::Windows => Self {
                program: executable,
                args,
            },
            HostOs::Unix => {
                args.insert(0, executable);
                Self {
                    program: "mono".to_string(),
                    args,
                }
            }
        }
    }

    /// Display form for dry runs and logging.
    pub fn to_shell_command(&self) -> String {
        let mut cmd = self.program.clone();
        for arg in &self.args {
            cmd.push(' ');
            if arg.contains(' ') {
                cmd.push_str(&format!("'{arg}'"));
            } else {
                cmd.push_str(arg);
            }
        }
        cmd
    }

    /// Spawns the child and waits for it. Stdio is inherited so the
    /// runner's own output streams pass straight through.
    pub fn execute(&self) -> io::Result<ExitStatus> {
        Command::new(&self.program).args(&self.args).status()
    }
}
