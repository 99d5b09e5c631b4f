//! Compiler invocation.
//!
//! One invocation per module: `<compiler> <sources...> <output-flag> <dest>`.

use std::path::{Path, PathBuf};

use crate::util::config::ToolchainSettings;
use crate::util::errors::BuildResult;
use crate::util::fs::ensure_dir;
use crate::util::process::ProcessBuilder;
use crate::util::shell::Shell;

/// A fully assembled compiler command line.
#[derive(Debug, Clone)]
pub struct CompileCommand {
    process: ProcessBuilder,
    destination: PathBuf,
}

impl CompileCommand {
    /// Build the command for `sources`, in the order given, writing to `destination`.
    pub fn new(toolchain: &ToolchainSettings, sources: &[PathBuf], destination: &Path) -> Self {
        let process = ProcessBuilder::new(&toolchain.compiler)
            .args(sources)
            .arg(&toolchain.output_flag)
            .arg(destination);

        CompileCommand {
            process,
            destination: destination.to_path_buf(),
        }
    }

    #[cfg(test)]
    fn argv(&self) -> Vec<String> {
        std::iter::once(self.process.get_program())
            .chain(self.process.get_args().iter().map(|a| a.as_os_str()))
            .map(|part| part.to_string_lossy().into_owned())
            .collect()
    }

    /// Space-joined command line.
    pub fn display_command(&self) -> String {
        self.process.display_command()
    }

    /// Create the destination directory and run the compiler, printing a
    /// timing line once it exits successfully.
    pub fn run(&self, shell: &Shell) -> BuildResult<()> {
        ensure_dir(&self.destination)?;

        let label = format!("Command '{}' executed", self.display_command());
        shell.timing(label, || self.process.run_inherited())
    }
}

/// Compile `sources` into `destination` with a single compiler invocation.
pub fn compile(
    toolchain: &ToolchainSettings,
    sources: &[PathBuf],
    destination: &Path,
    shell: &Shell,
) -> BuildResult<()> {
    if sources.is_empty() {
        tracing::debug!(
            "no sources to compile into {}; invoking compiler anyway",
            destination.display()
        );
    }

    CompileCommand::new(toolchain, sources, destination).run(shell)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::errors::{BuildError, ErrorKind};
    use crate::util::shell::Verbosity;

    fn toolchain(compiler: &str) -> ToolchainSettings {
        ToolchainSettings {
            compiler: compiler.to_string(),
            ..ToolchainSettings::default()
        }
    }

    #[test]
    fn test_command_line_order() {
        let sources = vec![PathBuf::from("app/src/B.java"), PathBuf::from("app/src/A.java")];
        let cmd = CompileCommand::new(&toolchain("javac"), &sources, Path::new("dist/app"));

        assert_eq!(
            cmd.argv(),
            ["javac", "app/src/B.java", "app/src/A.java", "-d", "dist/app"]
        );
        assert_eq!(
            cmd.display_command(),
            "javac app/src/B.java app/src/A.java -d dist/app"
        );
    }

    #[test]
    fn test_command_line_no_sources() {
        let cmd = CompileCommand::new(&toolchain("javac"), &[], Path::new("out"));
        assert_eq!(cmd.argv(), ["javac", "-d", "out"]);
    }

    #[test]
    fn test_custom_output_flag() {
        let settings = ToolchainSettings {
            compiler: "kotlinc".to_string(),
            source_suffix: ".kt".to_string(),
            output_flag: "-output".to_string(),
        };
        let cmd = CompileCommand::new(&settings, &[PathBuf::from("Main.kt")], Path::new("out"));
        assert_eq!(cmd.argv(), ["kotlinc", "Main.kt", "-output", "out"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_run_creates_destination() {
        let tmp = tempfile::TempDir::new().unwrap();
        let dest = tmp.path().join("dist/app");
        let shell = Shell::new(Verbosity::Quiet);

        // `true` ignores its arguments
        compile(&toolchain("true"), &[], &dest, &shell).unwrap();

        assert!(dest.is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn test_run_failure_reports_command() {
        let tmp = tempfile::TempDir::new().unwrap();
        let dest = tmp.path().join("out");
        let shell = Shell::new(Verbosity::Quiet);

        let err = compile(&toolchain("false"), &[PathBuf::from("X.java")], &dest, &shell)
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Compilation);
        match err {
            BuildError::CommandFailed { code, command } => {
                assert_eq!(code, 1);
                assert_eq!(command, format!("false X.java -d {}", dest.display()));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_run_missing_compiler() {
        let tmp = tempfile::TempDir::new().unwrap();
        let shell = Shell::new(Verbosity::Quiet);

        let err = compile(
            &toolchain("drydock-missing-compiler"),
            &[],
            &tmp.path().join("out"),
            &shell,
        )
        .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Process);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_source_reaches_compiler() {
        use std::ffi::OsStr;
        use std::fs;
        use std::os::unix::ffi::OsStrExt;
        use std::os::unix::fs::PermissionsExt;

        use crate::util::fs::find_sources;

        let tmp = tempfile::TempDir::new().unwrap();
        let src = tmp.path().join("src");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join(OsStr::from_bytes(b"\xffA.java")), "").unwrap();

        // Fails unless every argument other than the flag names an existing path
        let stub = tmp.path().join("checkc");
        fs::write(
            &stub,
            "#!/bin/sh\nfor a in \"$@\"; do\n  [ \"$a\" = -d ] || [ -e \"$a\" ] || exit 3\ndone\n",
        )
        .unwrap();
        fs::set_permissions(&stub, fs::Permissions::from_mode(0o755)).unwrap();

        let sources = find_sources(&src, ".java").unwrap();
        assert_eq!(sources.len(), 1);

        let shell = Shell::new(Verbosity::Quiet);
        compile(
            &toolchain(&stub.to_string_lossy()),
            &sources,
            &tmp.path().join("out"),
            &shell,
        )
        .unwrap();
    }
}
