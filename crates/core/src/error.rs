use std::io;
use std::path::PathBuf;

/// Errors that can occur while preparing or driving an NUnit run
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    MissingInput(String),

    #[error("Unable to find \"{0}\".")]
    ExecutableNotFound(String),

    /// Spawn failures other than not-found; the underlying message passes
    /// through unchanged.
    #[error("{0}")]
    Spawn(io::Error),

    #[error("NUnit output not found: {}", .0.display())]
    ReportMissing(PathBuf),

    #[error("NUnit tests failed.")]
    TestsFailed { exit_code: i32 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for nunit-runner operations
pub type Result<T> = std::result::Result<T, Error>;
