//! Compiler invocation for a module's sources.

pub mod compiler;

pub use compiler::{compile, CompileCommand};
