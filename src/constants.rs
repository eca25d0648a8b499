//! Constants used throughout the application
//!
//! This module centralises all constants used in the application to make
//! them easier to manage and update.

use once_cell::sync::Lazy;

/// Qualifier string used for application identification
pub const QUALIFIER: &str = "com";

/// Organisation name used for application identification
pub const ORGANIZATION: &str = "Ondřej Vágner";

/// Application name used for identification
///
/// This is the name used for the platform configuration directory that
/// holds the default log file.
pub const APPLICATION: &str = "show_sort";

/// Opens a variable in a pattern line
pub const VARIABLE_OPEN: char = '<';

/// Closes a variable in a pattern line
pub const VARIABLE_CLOSE: char = '>';

/// Escapes a following `<` so it is read as literal text
pub const ESCAPE: char = '\\';

/// Separates the stem of a filename from its extension
pub const EXTENSION_SEPARATOR: char = '.';

/// Separates directory segments in a rendered destination
pub const PATH_SEPARATOR: char = '/';

/// Video file extensions picked up from the working directory (case-sensitive)
pub const VIDEO_EXTENSIONS: [&str; 23] = [
    ".mp4", ".m4v", ".mov", ".qt", ".avi", ".wmv", ".mkv", ".webm", ".flv", ".f4v", ".3gp",
    ".3g2", ".mpg", ".mpeg", ".m2v", ".ts", ".m2ts", ".mts", ".vob", ".rm", ".rmvb", ".ogv",
    ".mxf",
];

/// Owned copy of [`VIDEO_EXTENSIONS`] used as the settings default
pub static DEFAULT_EXTENSIONS: Lazy<Vec<String>> =
    Lazy::new(|| VIDEO_EXTENSIONS.iter().map(|ext| ext.to_string()).collect());

/// Name of the naming scheme file looked up in the working directory
pub const DEFAULT_SPEC_FILE: &str = "name-scheme.format";

/// Working directory used when none is given
pub const DEFAULT_DIRECTORY: &str = ".";

/// Default log file name
pub const LOG_FILE_DEFAULT: &str = "ssort.log";

/// Prompt for the first scheme line on first run
pub const INPUT_PROMPT: &str = "Enter input format (e.g. <show> - <season>x<episode> - <title>): ";

/// Prompt for the second scheme line on first run
pub const OUTPUT_PROMPT: &str =
    "Enter output format (e.g. <show>/Season <season>/<episode> - <title>): ";

/// Help text for the directory command-line option
pub const DIRECTORY_HELP: &str = "Directory whose video files are renamed [default: .]";

/// Help text for the naming scheme command-line option
pub const SPEC_HELP: &str =
    "Naming scheme file (two lines: input pattern, output pattern) [default: <DIRECTORY>/name-scheme.format]";

/// Help text for the config command-line option
pub const CONFIG_HELP: &str = "Read settings from a specific YAML file";

/// Help text for the dry-run command-line option
pub const DRY_RUN_HELP: &str = "Run without moving any files";

/// Help text for the match mode command-line option
pub const MATCH_MODE_HELP: &str = "How filenames are matched: strict verifies literal text, lenient produces best-effort paths [possible values: strict, lenient]";

/// Help text for the overwrite command-line option
pub const OVERWRITE_HELP: &str = "Replace files that already exist at the destination";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the log level command-line option
pub const LOG_LEVEL_HELP: &str =
    "Set the log level explicitly (error, warn, info, debug, trace); overrides -v";

/// Help text for the log file command-line option
pub const LOG_FILE_HELP: &str = "Log file name; an empty value disables file logging";

/// Help text for the local logging command-line option
pub const LOCAL_LOGGING_HELP: &str =
    "Write the log file relative to the current directory instead of the config directory";
