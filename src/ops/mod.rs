//! High-level operations.

pub mod drydock_build;

pub use drydock_build::{build, BuildSummary, CompiledModule};
