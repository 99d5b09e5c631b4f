//! Filesystem utilities.
//!
//! Source discovery and output-directory cleaning. Both walk the tree with
//! `walkdir`; discovery tolerates unreadable subtrees, cleaning does not.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::util::errors::{BuildError, BuildResult};

/// Recursively find every file under `root` whose name ends with `suffix`.
///
/// Files come back in depth-first order, siblings sorted by file name.
/// Directories that cannot be listed contribute nothing.
pub fn find_sources(root: &Path, suffix: &str) -> BuildResult<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(BuildError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!("skipping unreadable entry: {}", e);
                continue;
            }
        };

        if entry.file_type().is_dir() {
            continue;
        }

        if entry.file_name().to_string_lossy().ends_with(suffix) {
            tracing::debug!("found source {}", entry.path().display());
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// Delete each directory and everything under it, deepest entries first.
///
/// Directories that do not exist are skipped. The first failed deletion
/// aborts; remaining directories are left alone.
pub fn prepare_clean_dirs<P: AsRef<Path>>(dirs: &[P]) -> BuildResult<()> {
    for dir in dirs {
        remove_tree(dir.as_ref())?;
    }
    Ok(())
}

fn remove_tree(dir: &Path) -> BuildResult<()> {
    if fs::symlink_metadata(dir).is_err() {
        tracing::debug!("nothing to clean at {}", dir.display());
        return Ok(());
    }

    let failed = |source: io::Error| BuildError::CleanFailed {
        path: dir.to_path_buf(),
        source,
    };

    for entry in WalkDir::new(dir)
        .follow_root_links(false)
        .contents_first(true)
    {
        let entry = entry.map_err(|e| failed(e.into()))?;
        let path = entry.path();

        let removed = if entry.file_type().is_dir() {
            fs::remove_dir(path)
        } else {
            fs::remove_file(path)
        };

        removed.map_err(|e| {
            failed(io::Error::new(
                e.kind(),
                format!("{}: {}", path.display(), e),
            ))
        })?;
    }

    tracing::debug!("removed {}", dir.display());
    Ok(())
}

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> BuildResult<()> {
    if !path.is_dir() {
        fs::create_dir_all(path).map_err(|source| BuildError::CreateDirFailed {
            path: path.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}
