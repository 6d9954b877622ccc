//! Errors for execution.

use thiserror::Error;

/// Failures reported by the connection layer.
#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("unable to open a session against the remote store: {0}")]
    Session(String),
    #[error("the remote store rejected the request: {0}")]
    Rejected(String),
    #[error("transport failure: {0}")]
    Transport(String),
}

/// Execution errors.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Connection(#[from] ConnectionError),
    #[error("field '{field}' not found in model '{model}'")]
    UnknownField { field: String, model: String },
    #[error("the connection returned {got} outcomes for {expected} objects")]
    MismatchedOutcomes { expected: usize, got: usize },
}
