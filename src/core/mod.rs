//! Core data structures for Drydock.
//!
//! A build is a fixed, ordered list of modules; each module is a source
//! root compiled into its own output root.

pub mod module;

pub use module::{Layout, Module};
