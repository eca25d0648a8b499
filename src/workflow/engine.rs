//! Workflow engine
//!
//! This module contains the engine that orchestrates a batch rename.

use std::collections::HashSet;
use std::io;
use std::path::PathBuf;

use anyhow::Result;
use log::{debug, error, info, warn};

use crate::config::{Settings, load_or_initialize};
use crate::discovery::scan_directory;
use crate::errors::{apply_error, destination_exists_error};
use crate::file_ops::{destination_for, perform_move};
use crate::logging::format_rename;
use crate::pattern::CompiledSpec;
use crate::transform::{MatchMode, apply};

use super::context::{PlannedOperation, WorkflowContext};

/// Options for processing files
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessingOptions {
    /// Directory whose video files are renamed; destinations are relative to it
    pub directory: PathBuf,
    /// Location of the naming scheme file
    pub spec_path: PathBuf,
    /// Extensions of the files to pick up
    pub extensions: Vec<String>,
    /// Whether literal text is verified while matching filenames
    pub match_mode: MatchMode,
    /// Whether existing destination files may be replaced
    pub overwrite: bool,
    /// Whether to only simulate file operations
    pub dry_run: bool,
}

impl ProcessingOptions {
    pub fn from_settings(settings: &Settings, dry_run: bool) -> Self {
        ProcessingOptions {
            directory: settings.directory.clone(),
            spec_path: settings.spec_path(),
            extensions: settings.extensions.clone(),
            match_mode: settings.match_mode,
            overwrite: settings.overwrite,
            dry_run,
        }
    }
}

/// Processes the working directory
///
/// 1. Load the naming scheme, asking for it on standard input if the file is absent
/// 2. Rename every video file of the directory with [`run_batch`]
///
/// # Errors
/// Returns an error if the naming scheme cannot be loaded or compiled, or the
/// directory cannot be scanned. No file is touched in that case.
pub fn process_files(options: ProcessingOptions) -> Result<WorkflowContext> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut writer = io::stdout();
    let spec = load_or_initialize(&options.spec_path, &mut reader, &mut writer)?;

    run_batch(&options, &spec)
}

/// Renames every video file of the working directory with a compiled scheme
///
/// Files that do not fit the input pattern are skipped with a warning, and
/// failing moves are logged; neither stops the batch. A destination claimed
/// by an earlier file of the batch counts as existing, so a dry run reports
/// the same outcome as the real one.
///
/// # Errors
/// Returns an error if the directory cannot be scanned
pub fn run_batch(options: &ProcessingOptions, spec: &CompiledSpec) -> Result<WorkflowContext> {
    let mut context = WorkflowContext::new(options.dry_run);
    let mut claimed: HashSet<PathBuf> = HashSet::new();

    let files = scan_directory(&options.directory, &options.extensions)?;

    if files.is_empty() {
        info!("No video files found in {}", options.directory.display());
        return Ok(context);
    }

    info!(
        "Processing {} files{}...",
        files.len(),
        if options.dry_run { " (dry run)" } else { "" }
    );

    for file_info in files {
        debug!("Processing file: {}", file_info.path.display());
        context.increment_files_found();

        let relative = match apply(spec, &file_info.filename, options.match_mode) {
            Ok(relative) => relative,
            Err(e) => {
                warn!("Skipping {}", apply_error(&file_info.filename, e));
                context.increment_files_skipped();
                continue;
            }
        };

        let target = match destination_for(&options.directory, &relative) {
            Ok(target) => target,
            Err(e) => {
                error!("Skipping '{}': {e}", file_info.filename);
                context.increment_errors();
                continue;
            }
        };

        if target == file_info.path {
            debug!("{} is already in place", file_info.filename);
            context.increment_files_unchanged();
            continue;
        }

        if claimed.contains(&target) {
            if options.overwrite {
                warn!(
                    "'{}' replaces a file renamed earlier in this run",
                    file_info.filename
                );
            } else {
                error!(
                    "Failed to move '{}': {}",
                    file_info.filename,
                    destination_exists_error(target)
                );
                context.increment_errors();
                continue;
            }
        }

        match perform_move(&file_info.path, &target, options.overwrite, !options.dry_run) {
            Ok(result) => {
                claimed.insert(target);
                info!("{}", format_rename(&file_info.filename, &relative));
                context.increment_files_renamed();
                if !result.performed {
                    context.add_planned_operation(PlannedOperation {
                        source: result.source_path,
                        destination: result.target_path,
                    });
                }
            }
            Err(e) => {
                error!("Failed to move '{}': {e}", file_info.filename);
                context.increment_errors();
            }
        }
    }

    info!(
        "Finished: {} renamed, {} unchanged, {} skipped, {} errors",
        context.stats.files_renamed,
        context.stats.files_unchanged,
        context.stats.files_skipped,
        context.stats.errors
    );

    if options.dry_run && !context.planned_operations.is_empty() {
        print_plan(&context);
    }

    Ok(context)
}

fn print_plan(context: &WorkflowContext) {
    println!("\nDetailed plan of operations:");
    println!("===========================");
    for op in &context.planned_operations {
        println!("  From: {}", op.source.display());
        println!("  To:   {}", op.destination.display());
    }

    println!("\nSummary:");
    println!("--------");
    println!("  Files to be moved:    {}", context.planned_operations.len());
    println!("  Files skipped:        {}", context.stats.files_skipped);
    println!("\nRun without --dry flag to execute these operations.");
}
