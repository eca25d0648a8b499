use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use chrono::SecondsFormat;
use colored::Colorize;
use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;

/// Verbosity level for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Error messages only
    Error,
    /// Warning and error messages
    Warning,
    /// Info, warning, and error messages (default)
    Info,
    /// Debug, info, warning, and error messages
    Debug,
    /// Everything, including per-token matching detail
    Trace,
}

impl FromStr for Verbosity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Verbosity::Error),
            "warn" | "warning" => Ok(Verbosity::Warning),
            "info" => Ok(Verbosity::Info),
            "debug" => Ok(Verbosity::Debug),
            "trace" => Ok(Verbosity::Trace),
            _ => Err(format!("Unknown verbosity level: {s}")),
        }
    }
}

impl Verbosity {
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            Verbosity::Error => LevelFilter::Error,
            Verbosity::Warning => LevelFilter::Warn,
            Verbosity::Info => LevelFilter::Info,
            Verbosity::Debug => LevelFilter::Debug,
            Verbosity::Trace => LevelFilter::Trace,
        }
    }

    /// Get the verbosity level from the number of `-v` flags
    pub fn from_occurrences(occurrences: u8) -> Self {
        match occurrences {
            0 => Verbosity::Info,
            1 => Verbosity::Debug,
            _ => Verbosity::Trace,
        }
    }
}

/// Initialise the logger
///
/// Messages go to stdout coloured by level. When `log_file` is given, the
/// same messages are appended to it with a timestamp, level and target.
///
/// # Errors
/// Returns an error if the log file cannot be opened or a logger is already set
pub fn init_logger(verbosity: Verbosity, log_file: Option<&Path>) -> Result<()> {
    let level = verbosity.to_level_filter();

    let colors_line = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::White)
        .debug(Color::White)
        .trace(Color::BrightBlack);

    let output_logger = Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "\x1B[{}m{}\x1B[0m",
                colors_line.get_color(&record.level()).to_fg_str(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stdout());

    let mut base_logger = Dispatch::new().level(level).chain(output_logger);

    if let Some(path) = log_file {
        let file_logger = Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{} {} {}] {}",
                    chrono::Local::now().to_rfc3339_opts(SecondsFormat::Secs, true),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .level(level)
            .chain(
                fern::log_file(path)
                    .with_context(|| format!("Failed to open log file {}", path.display()))?,
            );
        base_logger = base_logger.chain(file_logger);
    }

    base_logger.apply()?;

    log::debug!("Logger initialized with verbosity level: {verbosity:?}");

    Ok(())
}

/// Format a message with colour support
///
/// Returns `colored_message` when stdout is a terminal, `message` otherwise.
pub fn format_message(message: &str, colored_message: &str) -> String {
    if atty::is(atty::Stream::Stdout) {
        colored_message.to_string()
    } else {
        message.to_string()
    }
}

/// Formats a `source -> destination` line for the log
pub fn format_rename(source: &str, destination: &str) -> String {
    let message = format!("{source} -> {destination}");
    let colored_message = format!("{} -> {}", source, destination.bold().green());
    format_message(&message, &colored_message)
}
