use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Which of the two scheme lines a compile error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternLine {
    /// First line: the shape of the existing filenames
    Input,
    /// Second line: the shape of the resulting path
    Output,
}

impl fmt::Display for PatternLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternLine::Input => write!(f, "input pattern (line 1)"),
            PatternLine::Output => write!(f, "output pattern (line 2)"),
        }
    }
}

/// Errors raised while compiling a naming scheme
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// The scheme text does not consist of exactly two lines
    MalformedSpec { lines: usize },
    /// A `<` was opened but the line ended before the closing `>`
    UnterminatedVariable { line: PatternLine, name: String },
    /// Two variables follow each other in the input pattern without a delimiter
    AdjacentVariables { first: String, second: String },
    /// The output pattern uses a variable the input pattern never declares
    UndeclaredOutputVariable(String),
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::MalformedSpec { lines } => write!(
                f,
                "Naming scheme must have exactly two lines (input and output pattern), found {lines}"
            ),
            CompileError::UnterminatedVariable { line, name } => {
                write!(f, "Unterminated variable `<{name}` in the {line}")
            }
            CompileError::AdjacentVariables { first, second } => write!(
                f,
                "Variables `<{first}>` and `<{second}>` in the {} must be separated by literal text",
                PatternLine::Input
            ),
            CompileError::UndeclaredOutputVariable(name) => write!(
                f,
                "Undeclared variable `{name}` in the {}",
                PatternLine::Output
            ),
        }
    }
}

impl StdError for CompileError {}

/// Errors raised while matching a filename against a compiled scheme
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyError {
    /// Expected literal text was not found at the cursor (byte offset into the stem)
    PatternMismatch { expected: String, position: usize },
    /// Text remained after the whole input pattern was consumed
    TrailingInput { position: usize, remainder: String },
    /// Two variables with no delimiter between them cannot be split
    AdjacentVariables { first: String, second: String },
    /// The output pattern refers to a variable with no extracted value
    UnboundVariable(String),
}

impl fmt::Display for ApplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplyError::PatternMismatch { expected, position } => {
                write!(f, "Expected '{expected}' at position {position}")
            }
            ApplyError::TrailingInput {
                position,
                remainder,
            } => write!(
                f,
                "Unmatched text '{remainder}' left over at position {position}"
            ),
            ApplyError::AdjacentVariables { first, second } => write!(
                f,
                "Cannot split adjacent variables `<{first}>` and `<{second}>`"
            ),
            ApplyError::UnboundVariable(name) => write!(f, "No value extracted for `{name}`"),
        }
    }
}

impl StdError for ApplyError {}

/// Errors raised while loading the naming scheme file
#[derive(Debug)]
pub enum SpecLoadError {
    /// The scheme file does not exist
    MissingSpecFile(PathBuf),
    /// The scheme file exists but cannot be read as UTF-8 text
    Unreadable { path: PathBuf, source: io::Error },
}

impl fmt::Display for SpecLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecLoadError::MissingSpecFile(path) => {
                write!(f, "Naming scheme file '{}' does not exist", path.display())
            }
            SpecLoadError::Unreadable { path, .. } => {
                write!(f, "Failed to read naming scheme file '{}'", path.display())
            }
        }
    }
}

impl StdError for SpecLoadError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            SpecLoadError::Unreadable { source, .. } => Some(source),
            SpecLoadError::MissingSpecFile(_) => None,
        }
    }
}

/// Custom error type for the Show Sort application
#[derive(Debug)]
pub enum Error {
    /// Error related to file operations
    FileOperation {
        source: io::Error,
        path: PathBuf,
        operation: String,
    },
    /// Error related to settings parsing
    ConfigParsing {
        source: Box<dyn StdError + Send + Sync>,
        detail: String,
    },
    /// The naming scheme file could not be loaded
    SpecLoad(SpecLoadError),
    /// The naming scheme could not be compiled
    Compile(CompileError),
    /// A filename did not fit the input pattern
    Apply { filename: String, source: ApplyError },
    /// A rendered destination would leave the working directory
    UnsafeDestination { destination: String, detail: String },
    /// The destination file already exists and overwriting is disabled
    DestinationExists { path: PathBuf },
    /// Error when a filename is not valid Unicode
    InvalidFilename { path: PathBuf },
    /// Error when a directory is not found
    DirectoryNotFound { path: PathBuf },
    /// Generic error with a message
    Generic { message: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FileOperation {
                path, operation, ..
            } => {
                write!(f, "Failed to {} file: {}", operation, path.display())
            }
            Error::ConfigParsing { detail, .. } => {
                write!(f, "Settings parsing error: {detail}")
            }
            Error::SpecLoad(err) => write!(f, "{err}"),
            Error::Compile(err) => write!(f, "Invalid naming scheme: {err}"),
            Error::Apply { filename, source } => {
                write!(f, "'{filename}' does not fit the input pattern: {source}")
            }
            Error::UnsafeDestination {
                destination,
                detail,
            } => {
                write!(f, "Refusing destination '{destination}': {detail}")
            }
            Error::DestinationExists { path } => {
                write!(f, "Destination already exists: {}", path.display())
            }
            Error::InvalidFilename { path } => {
                write!(f, "Filename is not valid unicode: {}", path.display())
            }
            Error::DirectoryNotFound { path } => {
                write!(f, "Directory not found: {}", path.display())
            }
            Error::Generic { message } => {
                write!(f, "{message}")
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::FileOperation { source, .. } => Some(source),
            Error::ConfigParsing { source, .. } => Some(source.as_ref()),
            Error::SpecLoad(err) => err.source(),
            Error::Apply { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::FileOperation {
            source: err,
            path: PathBuf::new(),
            operation: "perform operation on".to_string(),
        }
    }
}

impl From<SpecLoadError> for Error {
    fn from(err: SpecLoadError) -> Self {
        Error::SpecLoad(err)
    }
}

impl From<CompileError> for Error {
    fn from(err: CompileError) -> Self {
        Error::Compile(err)
    }
}

/// Custom Result type for the Show Sort application
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create a file operation error
pub fn file_operation_error(err: io::Error, path: PathBuf, operation: &str) -> Error {
    Error::FileOperation {
        source: err,
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create a settings parsing error
pub fn config_parsing_error<E: StdError + Send + Sync + 'static>(err: E, detail: &str) -> Error {
    Error::ConfigParsing {
        source: Box::new(err),
        detail: detail.to_string(),
    }
}

/// Helper function to attach the offending filename to a match failure
pub fn apply_error(filename: &str, source: ApplyError) -> Error {
    Error::Apply {
        filename: filename.to_string(),
        source,
    }
}

/// Helper function to create an unsafe destination error
pub fn unsafe_destination_error(destination: &str, detail: &str) -> Error {
    Error::UnsafeDestination {
        destination: destination.to_string(),
        detail: detail.to_string(),
    }
}

pub fn destination_exists_error(path: PathBuf) -> Error {
    Error::DestinationExists { path }
}

/// Helper function to create an invalid filename error
pub fn invalid_filename_error(path: PathBuf) -> Error {
    Error::InvalidFilename { path }
}

/// Helper function to create a directory not found error
pub fn directory_not_found_error(path: PathBuf) -> Error {
    Error::DirectoryNotFound { path }
}

/// Helper function to create a generic error
pub fn generic_error(message: &str) -> Error {
    Error::Generic {
        message: message.to_string(),
    }
}
