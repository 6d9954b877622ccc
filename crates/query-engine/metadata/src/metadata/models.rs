//! Metadata about the models tracked by the adapter and the names the
//! remote store knows them by.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Name of a repository scope under which storage names resolve.
///
/// Logically distinct repositories may map the same models onto different
/// storage backends, so resolution is always performed against one scope.
#[derive(
    Debug, Clone, PartialOrd, PartialEq, Eq, Ord, Hash, Deserialize, Serialize, JsonSchema,
)]
pub struct RepositoryName(pub String);

impl RepositoryName {
    pub fn new(name: impl Into<String>) -> Self {
        RepositoryName(name.into())
    }
}

impl std::fmt::Display for RepositoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let RepositoryName(name) = self;
        write!(f, "{name}")
    }
}

/// Mapping from a model name to its information.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct ModelsInfo(pub BTreeMap<String, ModelInfo>);

impl ModelsInfo {
    pub fn empty() -> Self {
        ModelsInfo(BTreeMap::new())
    }

    pub fn merge(&mut self, ModelsInfo(models): ModelsInfo) {
        self.0.extend(models);
    }
}

/// Information about one tracked model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ModelInfo {
    /// The name the remote store knows this model by.
    pub storage_name: String,
    /// Storage names that replace the default under specific repositories.
    #[serde(default)]
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub storage_name_overrides: BTreeMap<RepositoryName, String>,
    pub fields: BTreeMap<String, FieldInfo>,
    #[serde(default)]
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub relationships: BTreeMap<String, Relationship>,
}

impl ModelInfo {
    /// The storage name of this model under the given repository scope.
    pub fn storage_name(&self, repository: &RepositoryName) -> &str {
        self.storage_name_overrides
            .get(repository)
            .map_or(self.storage_name.as_str(), String::as_str)
    }

    /// The field holding this model's identity key, if one is declared.
    pub fn key_field(&self) -> Option<(&String, &FieldInfo)> {
        self.fields.iter().find(|(_, field)| field.is_key)
    }
}

/// Can this field contain null values.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub enum Nullable {
    #[default]
    Nullable,
    NonNullable,
}

/// Information about one field of a model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FieldInfo {
    /// The name the remote store knows this field by.
    pub name: String,
    pub r#type: ScalarType,
    /// Whether this field is part of the model's identity key.
    #[serde(default)]
    pub is_key: bool,
    #[serde(default)]
    pub nullable: Nullable,
}

/// A relationship hop from one model to another.
///
/// The clause text of a hop is the storage name of the model the hop hangs
/// off, resolved lazily under the repository scope in play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Relationship {
    pub target_model: String,
}

/// The scalar types the remote store exposes on fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ScalarType {
    Id,
    Boolean,
    Integer,
    Double,
    String,
    Date,
    Datetime,
    Any,
}
