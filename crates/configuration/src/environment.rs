//! Infrastructure for resolving configuration values from the environment.

use std::collections::BTreeMap;

use thiserror::Error;

/// The environment secrets are resolved against.
pub trait Environment {
    fn read(&self, variable: &str) -> Result<String, EnvironmentError>;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnvironmentError {
    #[error("environment variable '{0}' is not set")]
    VariableNotPresent(String),
    #[error("environment variable '{0}' is not valid unicode")]
    NonUnicodeValue(String),
}

/// An environment that reads from the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn read(&self, variable: &str) -> Result<String, EnvironmentError> {
        match std::env::var(variable) {
            Ok(value) => Ok(value),
            Err(std::env::VarError::NotPresent) => {
                Err(EnvironmentError::VariableNotPresent(variable.to_string()))
            }
            Err(std::env::VarError::NotUnicode(_)) => {
                Err(EnvironmentError::NonUnicodeValue(variable.to_string()))
            }
        }
    }
}

/// A fixed set of variables, for tests.
#[derive(Debug, Clone, Default)]
pub struct FixedEnvironment(pub BTreeMap<String, String>);

impl Environment for FixedEnvironment {
    fn read(&self, variable: &str) -> Result<String, EnvironmentError> {
        let FixedEnvironment(variables) = self;
        variables
            .get(variable)
            .cloned()
            .ok_or_else(|| EnvironmentError::VariableNotPresent(variable.to_string()))
    }
}
