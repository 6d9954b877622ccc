//! In-memory resources whose lifecycle the adapter bridges to the store.

use indexmap::IndexMap;

use query_engine_execution::connection::ObjectId;

/// One in-memory resource tracked against a remote object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    /// The model this resource belongs to.
    pub model: String,
    /// Attribute values pending transfer to the store, keyed by field name.
    pub attributes: IndexMap<String, serde_json::Value>,
    /// The store-assigned identity. Set by the adapter after a successful
    /// create.
    pub id: Option<ObjectId>,
}

impl Resource {
    pub fn new(model: impl Into<String>) -> Self {
        Resource {
            model: model.into(),
            attributes: IndexMap::new(),
            id: None,
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.attributes.insert(name.into(), value);
        self
    }
}
