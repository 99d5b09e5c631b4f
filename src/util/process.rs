//! Subprocess execution utilities.

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::util::errors::{BuildError, BuildResult};

/// Builder for subprocess execution.
#[derive(Debug, Clone)]
pub struct ProcessBuilder {
    program: OsString,
    args: Vec<OsString>,
}

impl ProcessBuilder {
    /// Create a new process builder for the given program.
    ///
    /// A bare name is looked up on `PATH` when the process is started.
    pub fn new(program: impl AsRef<OsStr>) -> Self {
        ProcessBuilder {
            program: program.as_ref().to_os_string(),
            args: Vec::new(),
        }
    }

    /// Add a single argument.
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    /// Add multiple arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_os_string()));
        self
    }

    /// Get the program name.
    pub fn get_program(&self) -> &OsStr {
        &self.program
    }

    /// Get the arguments.
    pub fn get_args(&self) -> &[OsString] {
        &self.args
    }

    /// Resolve the program to an executable path.
    pub fn resolve_program(&self) -> BuildResult<PathBuf> {
        which::which(&self.program).map_err(|e| BuildError::CannotRun {
            program: self.program.to_string_lossy().into_owned(),
            source: Box::new(e),
        })
    }

    /// Run the process with stdin, stdout and stderr inherited from this
    /// process, and require a zero exit status.
    pub fn run_inherited(&self) -> BuildResult<()> {
        let program = self.resolve_program()?;
        tracing::debug!("running `{}` via {}", self.display_command(), program.display());

        let mut cmd = Command::new(&program);
        cmd.args(&self.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let status = cmd.status().map_err(|e| BuildError::CannotRun {
            program: self.program.to_string_lossy().into_owned(),
            source: Box::new(e),
        })?;

        match status.code() {
            Some(0) => Ok(()),
            Some(code) => Err(BuildError::CommandFailed {
                code,
                command: self.display_command(),
            }),
            None => Err(BuildError::CommandTerminated {
                command: self.display_command(),
            }),
        }
    }

    /// Display the command for timing lines and error messages.
    ///
    /// Arguments that are not valid UTF-8 are shown lossily here only; the
    /// process itself receives them unchanged.
    pub fn display_command(&self) -> String {
        std::iter::once(&self.program)
            .chain(&self.args)
            .map(|part| part.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
