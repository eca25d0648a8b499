use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command, command};

use crate::config::load_settings_or_default;
use crate::constants::{
    CONFIG_HELP, DIRECTORY_HELP, DRY_RUN_HELP, LOCAL_LOGGING_HELP, LOG_FILE_DEFAULT,
    LOG_FILE_HELP, LOG_LEVEL_HELP, MATCH_MODE_HELP, OVERWRITE_HELP, SPEC_HELP, VERBOSE_HELP,
};
use crate::errors;
use crate::logging::Verbosity;
use crate::transform::MatchMode;
use crate::utils::{expand_path, find_project_folder};
use crate::workflow::ProcessingOptions;

/// Defines the command-line interface
///
/// - `directory`: Directory whose video files are renamed
/// - `spec`: Naming scheme file
/// - `config`: Optional YAML settings file
/// - `dry`: Run without moving any files
/// - `match_mode`: Strict or lenient filename matching
/// - `overwrite`: Replace existing destination files
/// - `verbose`: Increase verbosity level
/// - `log_level`: Set the verbosity level by name
pub fn build_command() -> Command {
    let arg_directory = Arg::new("directory")
        .short('d')
        .long("directory")
        .help(DIRECTORY_HELP);

    let arg_spec = Arg::new("spec").short('s').long("spec").help(SPEC_HELP);

    let arg_config = Arg::new("config").short('c').long("config").help(CONFIG_HELP);

    let arg_dry = Arg::new("dry")
        .short('n')
        .long("dry")
        .help(DRY_RUN_HELP)
        .action(ArgAction::SetTrue);

    let arg_match_mode = Arg::new("match_mode")
        .short('m')
        .long("match-mode")
        .help(MATCH_MODE_HELP)
        .value_parser(MatchMode::from_str);

    let arg_overwrite = Arg::new("overwrite")
        .long("overwrite")
        .help(OVERWRITE_HELP)
        .action(ArgAction::SetTrue);

    let arg_verbose = Arg::new("verbose")
        .short('v')
        .long("verbose")
        .help(VERBOSE_HELP)
        .action(ArgAction::Count);

    let arg_log_level = Arg::new("log_level")
        .long("log-level")
        .help(LOG_LEVEL_HELP)
        .value_parser(Verbosity::from_str)
        .conflicts_with("verbose");

    let log_file = Arg::new("log_file")
        .short('l')
        .long("log-file")
        .help(LOG_FILE_HELP)
        .default_value(LOG_FILE_DEFAULT);

    let log_locally = Arg::new("log_locally")
        .short('L')
        .long("log-locally")
        .help(LOCAL_LOGGING_HELP)
        .action(ArgAction::SetTrue);

    command!()
        .arg(arg_directory)
        .arg(arg_spec)
        .arg(arg_config)
        .arg(arg_dry)
        .arg(arg_match_mode)
        .arg(arg_overwrite)
        .arg(arg_verbose)
        .arg(arg_log_level)
        .arg(log_file)
        .arg(log_locally)
}

/// Parses the process arguments
pub fn get_matches() -> ArgMatches {
    build_command().get_matches()
}

/// Gets the verbosity level from `--log-level`, or from the number of -v/--verbose flags
pub fn get_verbosity(matches: &ArgMatches) -> Verbosity {
    matches
        .get_one::<Verbosity>("log_level")
        .copied()
        .unwrap_or_else(|| Verbosity::from_occurrences(matches.get_count("verbose")))
}

/// Resolves the log file location
///
/// Returns `None` when the log file name is empty. Unless `--log-locally` is
/// given, the file is placed in the platform config directory.
pub fn get_log_file(matches: &ArgMatches) -> errors::Result<Option<PathBuf>> {
    let filename = matches
        .get_one::<String>("log_file")
        .map(String::as_str)
        .unwrap_or(LOG_FILE_DEFAULT);

    if filename.is_empty() {
        return Ok(None);
    }

    if matches.get_flag("log_locally") {
        Ok(Some(PathBuf::from(filename)))
    } else {
        let folder = find_project_folder()?;
        Ok(Some(folder.config_dir().join(filename)))
    }
}

/// Builds the processing options from the settings file and the command line
///
/// Values given on the command line win over the settings file.
///
/// # Errors
/// Returns an error if the settings file cannot be loaded
pub fn processing_options(matches: &ArgMatches) -> Result<ProcessingOptions> {
    let config = matches.get_one::<String>("config").map(|raw| expand_path(raw));
    let mut settings = load_settings_or_default(config.as_deref())?;

    if let Some(directory) = matches.get_one::<String>("directory") {
        settings.directory = expand_path(directory);
    }
    if let Some(spec) = matches.get_one::<String>("spec") {
        settings.spec = Some(expand_path(spec));
    }
    if let Some(match_mode) = matches.get_one::<MatchMode>("match_mode") {
        settings.match_mode = *match_mode;
    }
    if matches.get_flag("overwrite") {
        settings.overwrite = true;
    }

    Ok(ProcessingOptions::from_settings(
        &settings,
        matches.get_flag("dry"),
    ))
}
