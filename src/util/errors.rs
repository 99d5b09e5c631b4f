//! Build error types.
//!
//! Every error is fatal: the first one aborts the build, and the binary
//! reports it once as `Build FAILED: <message>` before exiting with 1.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error raised by any step of the build.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("Unable to delete dir {} due to {source}", path.display())]
    CleanFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Unable to create dir {} due to {source}", path.display())]
    CreateDirFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot run command {program}: {source}")]
    CannotRun {
        program: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Command failed (exitCode={code}): {command}")]
    CommandFailed { code: i32, command: String },

    #[error("Command terminated by signal: {command}")]
    CommandTerminated { command: String },
}

/// Broad category of a [`BuildError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A source root or config file is unusable
    Configuration,
    /// A filesystem operation on an output directory failed
    Io,
    /// The compiler could not be started or waited on
    Process,
    /// The compiler ran and reported failure
    Compilation,
}

impl BuildError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BuildError::NotADirectory { .. } | BuildError::Config { .. } => {
                ErrorKind::Configuration
            }
            BuildError::CleanFailed { .. } | BuildError::CreateDirFailed { .. } => ErrorKind::Io,
            BuildError::CannotRun { .. } => ErrorKind::Process,
            BuildError::CommandFailed { .. } | BuildError::CommandTerminated { .. } => {
                ErrorKind::Compilation
            }
        }
    }
}

pub type BuildResult<T> = Result<T, BuildError>;
