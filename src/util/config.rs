//! Build configuration.
//!
//! The default configuration is the fixed project layout:
//! - `framework/src` compiled into `dist/framework`
//! - `app/src` compiled into `dist/app`
//!
//! using `javac <sources...> -d <dist>`. No file is read unless one is passed
//! explicitly with `--config`. A config file looks like:
//!
//! ```toml
//! [toolchain]
//! compiler = "javac"
//! source_suffix = ".java"
//! output_flag = "-d"
//!
//! [[modules]]
//! name = "framework"
//! src = "framework/src"
//! dist = "dist/framework"
//! ```
//!
//! Relative module paths in a config file are resolved against the file's
//! directory. Omitted keys keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{Layout, Module};
use crate::util::errors::{BuildError, BuildResult};

/// Default compiler executable.
pub const DEFAULT_COMPILER: &str = "javac";

/// Default source-file suffix.
pub const DEFAULT_SOURCE_SUFFIX: &str = ".java";

/// Default output-directory flag.
pub const DEFAULT_OUTPUT_FLAG: &str = "-d";

/// Drydock configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Compiler settings
    pub toolchain: ToolchainSettings,

    /// Modules in build order
    pub modules: Vec<Module>,
}

/// How the external compiler is invoked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolchainSettings {
    /// Compiler executable, looked up on PATH
    pub compiler: String,

    /// Files whose names end with this are passed to the compiler
    pub source_suffix: String,

    /// Flag preceding the destination directory
    pub output_flag: String,
}

impl Default for ToolchainSettings {
    fn default() -> Self {
        ToolchainSettings {
            compiler: DEFAULT_COMPILER.to_string(),
            source_suffix: DEFAULT_SOURCE_SUFFIX.to_string(),
            output_flag: DEFAULT_OUTPUT_FLAG.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            toolchain: ToolchainSettings::default(),
            modules: Layout::default().modules().to_vec(),
        }
    }
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> BuildResult<Self> {
        let invalid = |message: String| BuildError::Config {
            path: path.to_path_buf(),
            message,
        };

        let contents = std::fs::read_to_string(path).map_err(|e| invalid(e.to_string()))?;
        let config = Self::parse(&contents).map_err(|e| match e {
            BuildError::Config { message, .. } => invalid(message),
            other => other,
        })?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        if base.as_os_str().is_empty() {
            return Ok(config);
        }

        tracing::debug!("resolving module paths against {}", base.display());
        Ok(Config {
            modules: config.modules.iter().map(|m| m.rooted_at(base)).collect(),
            ..config
        })
    }

    /// Parse and validate configuration from toml text.
    pub fn parse(contents: &str) -> BuildResult<Self> {
        let config: Config = toml::from_str(contents).map_err(|e| BuildError::Config {
            path: Default::default(),
            message: e.message().to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> BuildResult<()> {
        let invalid = |message: &str| {
            Err(BuildError::Config {
                path: Default::default(),
                message: message.to_string(),
            })
        };

        if self.toolchain.compiler.trim().is_empty() {
            return invalid("`toolchain.compiler` must not be empty");
        }
        if self.toolchain.source_suffix.is_empty() {
            return invalid("`toolchain.source_suffix` must not be empty");
        }
        if self.modules.is_empty() {
            return invalid("at least one module is required");
        }
        Ok(())
    }

    /// Modules in build order.
    pub fn layout(&self) -> Layout {
        Layout::new(self.modules.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.toolchain.compiler, "javac");
        assert_eq!(config.toolchain.source_suffix, ".java");
        assert_eq!(config.toolchain.output_flag, "-d");
        assert_eq!(config.layout(), Layout::default());
    }

    #[test]
    fn test_parse_empty_is_default() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_partial_toolchain() {
        let config = Config::parse(
            r#"
[toolchain]
compiler = "kotlinc"
source_suffix = ".kt"
"#,
        )
        .unwrap();

        assert_eq!(config.toolchain.compiler, "kotlinc");
        assert_eq!(config.toolchain.source_suffix, ".kt");
        assert_eq!(config.toolchain.output_flag, "-d");
        assert_eq!(config.modules.len(), 2);
    }

    #[test]
    fn test_parse_modules() {
        let config = Config::parse(
            r#"
[[modules]]
name = "core"
src = "core/src"
dist = "out/core"
"#,
        )
        .unwrap();

        let layout = config.layout();
        assert_eq!(layout.modules().len(), 1);
        assert_eq!(layout.modules()[0], Module::new("core", "core/src", "out/core"));
    }

    #[test]
    fn test_parse_rejects_empty_modules() {
        let err = Config::parse("modules = []").unwrap_err();
        assert!(err.to_string().contains("at least one module"));
    }

    #[test]
    fn test_parse_rejects_empty_compiler() {
        let err = Config::parse("[toolchain]\ncompiler = \"\"").unwrap_err();
        assert!(err.to_string().contains("toolchain.compiler"));
    }

    #[test]
    fn test_parse_invalid_toml() {
        assert!(Config::parse("[toolchain\ncompiler =").is_err());
    }

    #[test]
    fn test_load_resolves_relative_paths() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("drydock.toml");
        std::fs::write(
            &path,
            r#"
[[modules]]
name = "app"
src = "app/src"
dist = "dist/app"
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.modules[0].src, tmp.path().join("app/src"));
        assert_eq!(config.modules[0].dist, tmp.path().join("dist/app"));
    }

    #[test]
    fn test_load_missing_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("missing.toml");

        let err = Config::load(&path).unwrap_err();
        match err {
            BuildError::Config { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_error_names_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.toml");
        std::fs::write(&path, "modules = []").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(err.to_string().contains(&*path.to_string_lossy()));
    }
}
