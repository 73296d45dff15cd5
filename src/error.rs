//! Error types for INI parsing, lookup and file handling.

use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

/// Errors produced while loading, querying or writing an INI configuration
#[derive(Debug, Error)]
pub enum IniError {
    #[error("Empty input: nothing to parse")]
    EmptyInput,

    #[error("Missing filename: no file to read or write")]
    MissingFilename,

    #[error("Malformed line: {line:?} is not a valid key/value pair")]
    MalformedLine { line: String },

    #[error("Invalid integer {value:?} for key '{key}' in section '{section}': {source}")]
    InvalidInteger {
        section: String,
        key: String,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Invalid float {value:?} for key '{key}' in section '{section}': {source}")]
    InvalidFloat {
        section: String,
        key: String,
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("Input is not valid UTF-8: {0}")]
    InvalidEncoding(#[from] std::str::Utf8Error),

    #[error("Parse options error: {0}")]
    Options(String),

    #[error("Logging setup error: {0}")]
    Logging(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for IniError {
    fn from(err: config::ConfigError) -> Self {
        IniError::Options(err.to_string())
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, IniError>;
