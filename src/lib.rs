//! Drydock - a minimal build orchestrator
//!
//! Discovers source files under each module's source root, clears each
//! module's output root, and compiles every module with one invocation of
//! an external compiler, timing each step.

pub mod builder;
pub mod core;
pub mod ops;
pub mod util;

pub use crate::core::{Layout, Module};
pub use ops::{build, BuildSummary};
pub use util::{BuildError, BuildResult, Config, ErrorKind, Shell};
