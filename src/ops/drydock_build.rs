//! Implementation of `drydock`'s build.
//!
//! Clean every output root, discover every module's sources, then compile
//! the modules one after another. The first error stops the build.

use std::path::PathBuf;

use crate::builder::compile;
use crate::core::Module;
use crate::util::config::Config;
use crate::util::errors::BuildResult;
use crate::util::fs::{find_sources, prepare_clean_dirs};
use crate::util::shell::Shell;

/// Label of the final timing line.
pub const SUCCESS_LABEL: &str = "Build SUCCESS";

/// A module that was compiled.
#[derive(Debug, Clone)]
pub struct CompiledModule {
    /// Module name
    pub name: String,
    /// Source files passed to the compiler
    pub sources: Vec<PathBuf>,
    /// Output root
    pub dist: PathBuf,
}

/// Result of a successful build.
#[derive(Debug, Clone, Default)]
pub struct BuildSummary {
    /// Compiled modules, in build order
    pub modules: Vec<CompiledModule>,
}

impl BuildSummary {
    /// Total number of source files compiled.
    pub fn source_count(&self) -> usize {
        self.modules.iter().map(|m| m.sources.len()).sum()
    }
}

/// Run a full build.
pub fn build(config: &Config, shell: &Shell) -> BuildResult<BuildSummary> {
    shell.timing(SUCCESS_LABEL, || {
        shell.status("Building...");

        let layout = config.layout();
        prepare_clean_dirs(&layout.output_dirs())?;

        // Every source root is checked before the first compiler runs.
        let discovered = layout
            .modules()
            .iter()
            .map(|module| -> BuildResult<_> {
                let sources = find_sources(&module.src, &config.toolchain.source_suffix)?;
                tracing::debug!("{}: {} source file(s)", module.name, sources.len());
                Ok((module, sources))
            })
            .collect::<BuildResult<Vec<_>>>()?;

        let mut summary = BuildSummary::default();
        for (module, sources) in discovered {
            summary.modules.push(compile_module(config, module, sources, shell)?);
        }

        Ok(summary)
    })
}

fn compile_module(
    config: &Config,
    module: &Module,
    sources: Vec<PathBuf>,
    shell: &Shell,
) -> BuildResult<CompiledModule> {
    tracing::debug!("compiling {}", module);
    compile(&config.toolchain, &sources, &module.dist, shell)?;

    Ok(CompiledModule {
        name: module.name.clone(),
        sources,
        dist: module.dist.clone(),
    })
}
