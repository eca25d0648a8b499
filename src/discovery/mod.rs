//! File discovery module
//!
//! This module contains components for scanning the working directory for video files.

mod scanner;

pub use scanner::{FileInfo, is_video_file, scan_directory};
