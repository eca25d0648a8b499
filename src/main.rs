use std::process::ExitCode;

use anyhow::Result;
use human_panic::setup_panic;
use log::warn;

use show_sort::cli::{get_log_file, get_matches, get_verbosity, processing_options};
use show_sort::logging::init_logger;
use show_sort::workflow::process_files;

fn main() -> ExitCode {
    setup_panic!();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let matches = get_matches();

    let log_file = get_log_file(&matches)?;
    init_logger(get_verbosity(&matches), log_file.as_deref())?;

    let options = processing_options(&matches)?;
    let context = process_files(options)?;

    if !context.is_clean() {
        warn!(
            "{} files did not fit the naming scheme and {} failed",
            context.stats.files_skipped,
            context.stats.errors
        );
    }

    Ok(())
}
