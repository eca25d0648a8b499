//! Workflow module
//!
//! This module contains components for orchestrating a batch rename.

mod context;
mod engine;

pub use context::{PlannedOperation, WorkflowContext, WorkflowStats};
pub use engine::{ProcessingOptions, process_files, run_batch};
