use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Secret;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct Username(pub Secret);

impl From<String> for Username {
    fn from(value: String) -> Self {
        Self(value.into())
    }
}

impl From<&str> for Username {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct Password(pub Secret);

impl From<String> for Password {
    fn from(value: String) -> Self {
        Self(value.into())
    }
}

impl From<&str> for Password {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct LoginEndpoint(pub Secret);

impl From<String> for LoginEndpoint {
    fn from(value: String) -> Self {
        Self(value.into())
    }
}

impl From<&str> for LoginEndpoint {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}
