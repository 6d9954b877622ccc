//! Errors for translation.

use thiserror::Error;

/// A type for translation errors. All of these indicate a contract
/// violation by the upstream query layer and abort translation.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("model '{0}' not found")]
    ModelNotFound(String),
    #[error("field '{0}' not found in model '{1}'")]
    FieldNotFoundInModel(String, String),
    #[error("relationship '{0}' not found in model '{1}'")]
    RelationshipNotFound(String, String),
    #[error("values of this shape cannot be rendered as literals: {0}")]
    UnsupportedValue(serde_json::Value),
}
