//! File operation functionality
//!
//! This module contains functions for turning a rendered relative path into a
//! destination and moving files there.

use std::fs::create_dir_all;
use std::path::{Component, Path, PathBuf};

use fs_extra::file::{CopyOptions, move_file};
use log::debug;

use crate::constants::PATH_SEPARATOR;
use crate::errors::{
    Result, destination_exists_error, file_operation_error, unsafe_destination_error,
};

/// Result of performing a file action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileActionResult {
    /// The source path
    pub source_path: PathBuf,
    /// The target path
    pub target_path: PathBuf,
    /// Whether the file was actually moved (false in dry-run mode)
    pub performed: bool,
}

/// Resolves a rendered `/`-separated relative path under `root`
///
/// Empty and `.` segments are ignored. The last segment is the new file name.
///
/// Each segment is also checked with [`Path::components`], so separators the
/// platform accepts besides `/` cannot smuggle in a parent directory.
///
/// # Errors
/// Returns an error for absolute paths, `..` components and empty file names
pub fn destination_for(root: &Path, relative: &str) -> Result<PathBuf> {
    if relative.starts_with(PATH_SEPARATOR) || Path::new(relative).has_root() {
        return Err(unsafe_destination_error(relative, "absolute path"));
    }

    let segments: Vec<&str> = relative
        .split(PATH_SEPARATOR)
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect();

    // A segment may still hold platform separators or prefixes, e.g. `..\x` on Windows
    for segment in &segments {
        for component in Path::new(segment).components() {
            match component {
                Component::Normal(_) | Component::CurDir => {}
                Component::ParentDir => {
                    return Err(unsafe_destination_error(
                        relative,
                        "parent directory component",
                    ));
                }
                Component::RootDir | Component::Prefix(_) => {
                    return Err(unsafe_destination_error(relative, "absolute path"));
                }
            }
        }
    }

    if relative.ends_with(PATH_SEPARATOR) || segments.is_empty() {
        return Err(unsafe_destination_error(relative, "empty file name"));
    }

    Ok(segments
        .iter()
        .fold(root.to_path_buf(), |path, segment| path.join(segment)))
}

/// Moves a file to its destination, creating missing parent directories
///
/// Parent directories are created with `create_dir_all`, which succeeds when
/// they already exist.
///
/// # Arguments
/// * `source_path` - The file to move
/// * `target_path` - Where the file ends up
/// * `overwrite` - Whether an existing destination file may be replaced
/// * `run_execution` - Whether to actually move (true) or just simulate (false)
///
/// # Errors
/// * Returns an error if the destination exists and `overwrite` is false
/// * Returns an error if a directory cannot be created or the move fails
pub fn perform_move(
    source_path: &Path,
    target_path: &Path,
    overwrite: bool,
    run_execution: bool,
) -> Result<FileActionResult> {
    if target_path.exists() && !overwrite {
        return Err(destination_exists_error(target_path.to_path_buf()));
    }

    if !run_execution {
        debug!(
            "Simulating move: {} -> {}",
            source_path.display(),
            target_path.display()
        );
        return Ok(FileActionResult {
            source_path: source_path.to_path_buf(),
            target_path: target_path.to_path_buf(),
            performed: false,
        });
    }

    if let Some(parent) = target_path.parent() {
        create_dir_all(parent)
            .map_err(|e| file_operation_error(e, parent.to_path_buf(), "create directory"))?;
    }

    debug!(
        "Moving file: {} -> {}",
        source_path.display(),
        target_path.display()
    );
    let options = CopyOptions::new().overwrite(overwrite);
    move_file(source_path, target_path, &options).map_err(|e| {
        file_operation_error(std::io::Error::other(e), source_path.to_path_buf(), "move")
    })?;

    Ok(FileActionResult {
        source_path: source_path.to_path_buf(),
        target_path: target_path.to_path_buf(),
        performed: true,
    })
}
