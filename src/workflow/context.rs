//! Workflow context
//!
//! This module defines the state collected while a batch is processed.

use std::path::PathBuf;

/// Represents a planned move for dry-run mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedOperation {
    /// The source path of the file
    pub source: PathBuf,
    /// The destination path of the file
    pub destination: PathBuf,
}

/// Statistics about the workflow
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowStats {
    /// Number of video files found
    pub files_found: usize,
    /// Number of files moved (or planned to be moved in dry-run mode)
    pub files_renamed: usize,
    /// Number of files already at their destination
    pub files_unchanged: usize,
    /// Number of files whose name does not fit the input pattern
    pub files_skipped: usize,
    /// Number of errors
    pub errors: usize,
}

/// Context for the workflow
#[derive(Debug, Clone, Default)]
pub struct WorkflowContext {
    /// Whether file operations are only simulated
    pub dry_run: bool,
    /// Statistics about the processing
    pub stats: WorkflowStats,
    /// Planned operations for dry-run mode
    pub planned_operations: Vec<PlannedOperation>,
}

impl WorkflowContext {
    pub fn new(dry_run: bool) -> Self {
        WorkflowContext {
            dry_run,
            ..WorkflowContext::default()
        }
    }

    pub fn add_planned_operation(&mut self, operation: PlannedOperation) {
        self.planned_operations.push(operation);
    }

    pub fn increment_files_found(&mut self) {
        self.stats.files_found += 1;
    }

    pub fn increment_files_renamed(&mut self) {
        self.stats.files_renamed += 1;
    }

    pub fn increment_files_unchanged(&mut self) {
        self.stats.files_unchanged += 1;
    }

    pub fn increment_files_skipped(&mut self) {
        self.stats.files_skipped += 1;
    }

    pub fn increment_errors(&mut self) {
        self.stats.errors += 1;
    }

    /// Whether every file was either renamed or already in place
    pub fn is_clean(&self) -> bool {
        self.stats.errors == 0 && self.stats.files_skipped == 0
    }
}
