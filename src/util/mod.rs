//! Shared utilities

pub mod config;
pub mod errors;
pub mod fs;
pub mod process;
pub mod shell;

pub use config::Config;
pub use errors::{BuildError, BuildResult, ErrorKind};
pub use shell::Shell;
