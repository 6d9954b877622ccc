//! Secrets that can be written literally or resolved from the environment.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A configuration value given in plain text, or the name of an
/// environment variable to read it from at startup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum Secret {
    Plain(String),
    FromEnvironment { variable: String },
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Secret::Plain(value)
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}
