//! Remote session connection settings.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::values::{LoginEndpoint, Password, Secret, Username};

pub const DEFAULT_USERNAME_VARIABLE: &str = "SALESFORCE_USERNAME";
pub const DEFAULT_PASSWORD_VARIABLE: &str = "SALESFORCE_PASSWORD";
pub const DEFAULT_LOGIN_ENDPOINT_VARIABLE: &str = "SALESFORCE_LOGIN_ENDPOINT";

/// Connection settings for the remote store session.
#[derive(Clone, PartialEq, Eq, Debug, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionSettings {
    /// Login username for the remote session.
    pub username: Username,
    /// Login password, with the security token appended when the store
    /// requires one.
    pub password: Password,
    /// Host and endpoint path to log in against.
    pub login_endpoint: LoginEndpoint,
}

impl ConnectionSettings {
    pub fn empty() -> Self {
        Self {
            username: Username(Secret::FromEnvironment {
                variable: DEFAULT_USERNAME_VARIABLE.into(),
            }),
            password: Password(Secret::FromEnvironment {
                variable: DEFAULT_PASSWORD_VARIABLE.into(),
            }),
            login_endpoint: LoginEndpoint(Secret::FromEnvironment {
                variable: DEFAULT_LOGIN_ENDPOINT_VARIABLE.into(),
            }),
        }
    }
}
