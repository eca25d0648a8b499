//! Directory scanning functionality
//!
//! This module contains functions for listing the video files of a directory.

use std::fs::read_dir;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use log::{debug, warn};

use crate::errors::{directory_not_found_error, file_operation_error, invalid_filename_error};

/// Information about a file found during scanning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    /// The path to the file
    pub path: PathBuf,
    /// The filename of the file
    pub filename: String,
}

impl FileInfo {
    /// Creates a new FileInfo from a path
    ///
    /// # Errors
    /// Returns an error if the path has no filename or it is not valid Unicode
    pub fn new(path: PathBuf) -> Result<Self> {
        let filename = path
            .file_name()
            .ok_or_else(|| anyhow!("Failed to get filename from path: {}", path.display()))?
            .to_str()
            .ok_or_else(|| invalid_filename_error(path.clone()))?
            .to_string();

        Ok(FileInfo { path, filename })
    }
}

/// Checks a filename against the extension allow-list (case-sensitive suffix match)
pub fn is_video_file(filename: &str, extensions: &[String]) -> bool {
    extensions.iter().any(|ext| filename.ends_with(ext.as_str()))
}

/// Scans a directory for video files
///
/// Only regular files directly inside `directory` whose name ends with one of
/// `extensions` are returned, sorted by filename. Files with names that are
/// not valid Unicode are skipped with a warning.
///
/// # Errors
/// Returns an error if the directory does not exist or cannot be read
pub fn scan_directory(directory: &Path, extensions: &[String]) -> Result<Vec<FileInfo>> {
    debug!("Scanning directory: {}", directory.display());

    if !directory.is_dir() {
        return Err(directory_not_found_error(directory.to_path_buf()).into());
    }

    let entries = read_dir(directory)
        .map_err(|e| file_operation_error(e, directory.to_path_buf(), "read directory"))?;

    let mut files: Vec<FileInfo> = entries
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter_map(|path| match FileInfo::new(path) {
            Ok(info) => Some(info),
            Err(e) => {
                warn!("Skipping file: {e}");
                None
            }
        })
        .filter(|info| is_video_file(&info.filename, extensions))
        .collect();

    files.sort_by(|a, b| a.filename.cmp(&b.filename));

    debug!("Found {} video files in directory", files.len());

    Ok(files)
}
