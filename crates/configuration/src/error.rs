//! Errors that can be thrown when processing configuration.

use std::path::PathBuf;

use thiserror::Error;

use crate::environment::EnvironmentError;

/// The errors that can be thrown when reading configuration from disk.
#[derive(Debug, Error)]
pub enum ParseConfigurationError {
    #[error("parse error on {path}:{line}:{column}: {message}", path = .file_path.display())]
    ParseError {
        file_path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },
    #[error("I/O error: {0}")]
    IoErrorButStringified(String),
}

/// The errors that can be thrown when writing configuration back out.
#[derive(Debug, Error)]
pub enum WriteParsedConfigurationError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// The errors that can be thrown when elaborating runtime configuration.
#[derive(Debug, Error)]
pub enum MakeRuntimeConfigurationError {
    #[error("invalid configuration version: expected {expected}, got {got}")]
    UnexpectedVersion { expected: u32, got: u32 },
    #[error(transparent)]
    Environment(#[from] EnvironmentError),
}

/// The errors that can be thrown when normalizing an adapter URI.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseUriError {
    #[error("invalid adapter uri: {0}")]
    Invalid(String),
    #[error("unexpected uri scheme '{0}', expected 'salesforce'")]
    UnexpectedScheme(String),
    #[error("adapter uri is missing a username or password")]
    MissingCredentials,
}
