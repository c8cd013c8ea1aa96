use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Custom error type for the File Mint application
#[derive(Debug)]
pub enum Error {
    /// Error related to file operations
    FileOperation {
        source: io::Error,
        path: PathBuf,
        operation: String,
    },
    /// Error related to path operations
    PathOperation { path: PathBuf, operation: String },
    /// Error when a filename is not valid Unicode
    InvalidFilename { path: PathBuf },
    /// Error when the copy count input is not a positive integer
    InvalidCount { input: String },
    /// Error when the format menu selection is out of range
    InvalidSelection { input: String, max: usize },
    /// Error when the naming pattern input is empty
    EmptyPattern,
    /// Error related to settings parsing
    ConfigParsing {
        source: Box<dyn StdError + Send + Sync>,
        detail: String,
    },
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
            Error::PathOperation { path, operation } => {
                write!(f, "Failed to {} path: {}", operation, path.display())
            }
            Error::InvalidFilename { path } => {
                write!(f, "Filename is not valid unicode: {}", path.display())
            }
            Error::InvalidCount { input } => {
                write!(
                    f,
                    "Copy count must be a positive integer, got '{}'",
                    input.trim()
                )
            }
            Error::InvalidSelection { input, max } => {
                write!(
                    f,
                    "Selection must be a number between 1 and {}, got '{}'",
                    max,
                    input.trim()
                )
            }
            Error::EmptyPattern => {
                write!(f, "Naming pattern cannot be empty")
            }
            Error::ConfigParsing { detail, .. } => {
                write!(f, "Settings parsing error: {detail}")
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

/// Custom Result type for the File Mint application
///
/// This type alias simplifies error handling throughout the application by
/// using the custom Error type. It's used as the return type for most
/// library functions that can fail.
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create a file operation error
pub fn file_operation_error(err: io::Error, path: PathBuf, operation: &str) -> Error {
    Error::FileOperation {
        source: err,
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create a path operation error
pub fn path_operation_error(path: PathBuf, operation: &str) -> Error {
    Error::PathOperation {
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create an invalid filename error
pub fn invalid_filename_error(path: PathBuf) -> Error {
    Error::InvalidFilename { path }
}

/// Helper function to create an invalid count error
pub fn invalid_count_error(input: &str) -> Error {
    Error::InvalidCount {
        input: input.to_string(),
    }
}

/// Helper function to create an invalid selection error
pub fn invalid_selection_error(input: &str, max: usize) -> Error {
    Error::InvalidSelection {
        input: input.to_string(),
        max,
    }
}

/// Helper function to create an empty pattern error
pub fn empty_pattern_error() -> Error {
    Error::EmptyPattern
}

/// Helper function to create a settings parsing error
pub fn config_parsing_error<E: StdError + Send + Sync + 'static>(err: E, detail: &str) -> Error {
    Error::ConfigParsing {
        source: Box::new(err),
        detail: detail.to_string(),
    }
}

/// Helper function to create a generic error
pub fn generic_error(message: &str) -> Error {
    Error::Generic {
        message: message.to_string(),
    }
}
