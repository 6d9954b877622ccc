//! Metadata information regarding the remote store and tracked models.

pub mod models;

// re-export without modules
pub use models::*;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Metadata information.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct Metadata {
    pub models: ModelsInfo,
}

impl Metadata {
    pub fn empty() -> Self {
        Metadata {
            models: ModelsInfo::empty(),
        }
    }
}
