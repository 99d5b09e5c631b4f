//! Centralized console output.
//!
//! Progress and timing lines go to stdout; the single failure line goes to
//! stderr. Diagnostics from `tracing` are separate and also use stderr.

use std::fmt::Display;
use std::time::{Duration, Instant};

use crate::util::errors::BuildResult;

/// Prefix of the line printed when a build aborts.
pub const FAILURE_PREFIX: &str = "Build FAILED: ";

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// --quiet: failure line only
    Quiet,
    /// Default: progress and timing lines
    #[default]
    Normal,
}

/// Central shell for all build output.
#[derive(Debug, Default)]
pub struct Shell {
    verbosity: Verbosity,
}

impl Shell {
    /// Create a new shell with the given verbosity.
    pub fn new(verbosity: Verbosity) -> Self {
        Shell { verbosity }
    }

    /// Create a shell from the `--quiet` flag.
    pub fn from_flags(quiet: bool) -> Self {
        Shell::new(if quiet {
            Verbosity::Quiet
        } else {
            Verbosity::Normal
        })
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// Check if shell is in quiet mode.
    pub fn is_quiet(&self) -> bool {
        self.verbosity == Verbosity::Quiet
    }

    /// Print a progress line to stdout.
    pub fn status(&self, msg: impl Display) {
        if !self.is_quiet() {
            println!("{}", msg);
        }
    }

    /// Print the failure line to stderr. Printed even in quiet mode.
    pub fn error(&self, msg: impl Display) {
        eprintln!("{}{}", FAILURE_PREFIX, msg);
    }

    /// Run `work`, then print `<label> in <seconds> seconds`.
    ///
    /// Nothing is printed when `work` fails; the error is passed through.
    pub fn timing<T, F>(&self, label: impl Display, work: F) -> BuildResult<T>
    where
        F: FnOnce() -> BuildResult<T>,
    {
        let start = Instant::now();
        let value = work()?;
        self.status(format_timing(label, start.elapsed()));
        Ok(value)
    }
}

/// Format a timing line: seconds with two decimals.
pub fn format_timing(label: impl Display, elapsed: Duration) -> String {
    format!("{} in {:.2} seconds", label, elapsed.as_secs_f64())
}
