//! The connection contract the adapter drives.
//!
//! Opening a session, running SOQL, and mutating remote objects all happen
//! behind this trait; the core never touches the wire itself. Mapping
//! between exposed field names and storage field names is likewise the
//! connection's responsibility, which is why record values are only ever
//! read through [`Connection::field_value`].

use async_trait::async_trait;
use indexmap::IndexMap;

use crate::error::ConnectionError;

/// The identity the remote store assigns to an object on creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectId(pub String);

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let ObjectId(id) = self;
        write!(f, "{id}")
    }
}

/// A remote object payload for create and update calls, keyed by storage
/// field names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectPayload {
    /// The storage-level type name of the object.
    pub type_name: String,
    pub fields: IndexMap<String, serde_json::Value>,
}

/// The per-object outcome of a create, update, or delete call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationOutcome {
    /// The identity of the affected object, when the store reports one.
    pub id: Option<ObjectId>,
    pub success: bool,
    /// Store-supplied diagnostic for failed items.
    pub message: Option<String>,
}

impl MutationOutcome {
    pub fn succeeded(id: ObjectId) -> Self {
        MutationOutcome {
            id: Some(id),
            success: true,
            message: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        MutationOutcome {
            id: None,
            success: false,
            message: Some(message.into()),
        }
    }
}

/// A session against the remote store.
///
/// Implementations are expected to be internally thread-safe: the adapter
/// opens one connection and reuses it for its lifetime.
#[async_trait]
pub trait Connection: Send + Sync {
    /// An opaque record returned for one matched remote object.
    type Record: Send + Sync;

    /// Run a query, returning the matched records. `None` means the store
    /// reported no result set at all, which callers treat as zero rows.
    async fn execute(&self, soql: &str) -> Result<Option<Vec<Self::Record>>, ConnectionError>;

    /// Look up one scalar on a record by storage object and field name.
    fn field_value(&self, record: &Self::Record, object: &str, field: &str) -> serde_json::Value;

    /// Build an object payload in whatever shape the wire wants.
    fn make_object(
        &self,
        type_name: &str,
        fields: IndexMap<String, serde_json::Value>,
    ) -> ObjectPayload {
        ObjectPayload {
            type_name: type_name.to_string(),
            fields,
        }
    }

    /// Create remote objects; one outcome per payload, in order.
    async fn create(
        &self,
        objects: Vec<ObjectPayload>,
    ) -> Result<Vec<MutationOutcome>, ConnectionError>;

    /// Update remote objects addressed by the identity carried in each
    /// payload; one outcome per payload, in order.
    async fn update(
        &self,
        objects: Vec<ObjectPayload>,
    ) -> Result<Vec<MutationOutcome>, ConnectionError>;

    /// Delete remote objects by identity; one outcome per id, in order.
    async fn delete(&self, ids: Vec<ObjectId>) -> Result<Vec<MutationOutcome>, ConnectionError>;
}
