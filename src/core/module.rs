//! Module definitions - what gets compiled, and where it goes.
//!
//! A Module pairs a source root with an output root. The default layout
//! has two of them, `framework` and `app`, compiled in that order.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A project unit compiled by a single compiler invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    /// Module name, used in log output only
    pub name: String,

    /// Directory tree scanned for sources
    pub src: PathBuf,

    /// Directory compiled artifacts are written to
    pub dist: PathBuf,
}

impl Module {
    /// Create a new module.
    pub fn new(name: impl Into<String>, src: impl Into<PathBuf>, dist: impl Into<PathBuf>) -> Self {
        Module {
            name: name.into(),
            src: src.into(),
            dist: dist.into(),
        }
    }

    /// The `framework` module: `framework/src` -> `dist/framework`.
    pub fn framework() -> Self {
        Module::new("framework", "framework/src", Path::new("dist").join("framework"))
    }

    /// The `app` module: `app/src` -> `dist/app`.
    pub fn app() -> Self {
        Module::new("app", "app/src", Path::new("dist").join("app"))
    }

    /// Re-root the module's relative paths under `base`.
    ///
    /// Absolute paths are left untouched.
    pub fn rooted_at(&self, base: &Path) -> Self {
        Module {
            name: self.name.clone(),
            src: base.join(&self.src),
            dist: base.join(&self.dist),
        }
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} -> {})",
            self.name,
            self.src.display(),
            self.dist.display()
        )
    }
}

/// The ordered list of modules in a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    modules: Vec<Module>,
}

impl Layout {
    /// Create a layout from an ordered module list.
    pub fn new(modules: Vec<Module>) -> Self {
        Layout { modules }
    }

    /// Modules in build order.
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    /// Output roots of every module, in build order.
    pub fn output_dirs(&self) -> Vec<&Path> {
        self.modules.iter().map(|m| m.dist.as_path()).collect()
    }
}

impl Default for Layout {
    fn default() -> Self {
        Layout::new(vec![Module::framework(), Module::app()])
    }
}
