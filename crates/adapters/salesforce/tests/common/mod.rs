//! A scripted in-memory connection and catalog fixtures for the adapter
//! tests.

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use query_engine_execution::connection::{Connection, MutationOutcome, ObjectId, ObjectPayload};
use query_engine_execution::error::ConnectionError;
use query_engine_metadata::metadata;
use salesforce_adapter::state::Connect;
use salesforce_adapter::SalesforceAdapter;
use salesforce_configuration::{Configuration, ResolvedConnectionSettings};

/// A record holds values keyed by `Object.field`.
#[derive(Debug, Clone)]
pub struct MockRecord(pub HashMap<String, serde_json::Value>);

pub fn record(entries: &[(&str, serde_json::Value)]) -> MockRecord {
    MockRecord(
        entries
            .iter()
            .map(|(key, value)| ((*key).to_string(), value.clone()))
            .collect(),
    )
}

#[derive(Debug, Default)]
pub struct Script {
    pub executed: Mutex<Vec<String>>,
    pub results: Mutex<VecDeque<Option<Vec<MockRecord>>>>,
    pub mutation_outcomes: Mutex<VecDeque<Vec<MutationOutcome>>>,
    pub created: Mutex<Vec<ObjectPayload>>,
    pub updated: Mutex<Vec<ObjectPayload>>,
    pub deleted: Mutex<Vec<ObjectId>>,
    id_counter: AtomicUsize,
}

/// A scripted connection: canned query results are popped per `execute`
/// call, canned outcome batches per mutation call, and everything sent is
/// captured for inspection. Clones share the same script.
#[derive(Debug, Clone, Default)]
pub struct MockConnection(pub Arc<Script>);

impl MockConnection {
    pub fn queue_result(&self, records: Option<Vec<MockRecord>>) {
        self.0.results.lock().unwrap().push_back(records);
    }

    pub fn queue_outcomes(&self, outcomes: Vec<MutationOutcome>) {
        self.0.mutation_outcomes.lock().unwrap().push_back(outcomes);
    }

    pub fn executed(&self) -> Vec<String> {
        self.0.executed.lock().unwrap().clone()
    }

    /// The next scripted outcome batch, or one success per object with a
    /// generated identity.
    fn next_outcomes(&self, count: usize) -> Vec<MutationOutcome> {
        self.0
            .mutation_outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                (0..count)
                    .map(|_| {
                        let n = self.0.id_counter.fetch_add(1, Ordering::SeqCst) + 1;
                        MutationOutcome::succeeded(ObjectId(format!("003000000000{n:03}")))
                    })
                    .collect()
            })
    }
}

#[async_trait]
impl Connection for MockConnection {
    type Record = MockRecord;

    async fn execute(&self, soql: &str) -> Result<Option<Vec<MockRecord>>, ConnectionError> {
        self.0.executed.lock().unwrap().push(soql.to_string());
        Ok(self.0.results.lock().unwrap().pop_front().unwrap_or(None))
    }

    fn field_value(&self, record: &MockRecord, object: &str, field: &str) -> serde_json::Value {
        record
            .0
            .get(&format!("{object}.{field}"))
            .cloned()
            .unwrap_or(serde_json::Value::Null)
    }

    async fn create(
        &self,
        objects: Vec<ObjectPayload>,
    ) -> Result<Vec<MutationOutcome>, ConnectionError> {
        let outcomes = self.next_outcomes(objects.len());
        self.0.created.lock().unwrap().extend(objects);
        Ok(outcomes)
    }

    async fn update(
        &self,
        objects: Vec<ObjectPayload>,
    ) -> Result<Vec<MutationOutcome>, ConnectionError> {
        let outcomes = self.next_outcomes(objects.len());
        self.0.updated.lock().unwrap().extend(objects);
        Ok(outcomes)
    }

    async fn delete(&self, ids: Vec<ObjectId>) -> Result<Vec<MutationOutcome>, ConnectionError> {
        let outcomes = self.next_outcomes(ids.len());
        self.0.deleted.lock().unwrap().extend(ids);
        Ok(outcomes)
    }
}

#[async_trait]
impl Connect for MockConnection {
    async fn connect(_settings: &ResolvedConnectionSettings) -> Result<Self, ConnectionError> {
        Ok(MockConnection::default())
    }
}

fn field(name: &str, storage: &str, r#type: metadata::ScalarType) -> (String, metadata::FieldInfo) {
    (
        name.to_string(),
        metadata::FieldInfo {
            name: storage.to_string(),
            r#type,
            is_key: false,
            nullable: metadata::Nullable::Nullable,
        },
    )
}

pub fn models() -> metadata::ModelsInfo {
    metadata::ModelsInfo(BTreeMap::from([(
        "Person".to_string(),
        metadata::ModelInfo {
            storage_name: "Person".to_string(),
            storage_name_overrides: BTreeMap::new(),
            fields: BTreeMap::from([
                (
                    "id".to_string(),
                    metadata::FieldInfo {
                        name: "id".to_string(),
                        r#type: metadata::ScalarType::Id,
                        is_key: true,
                        nullable: metadata::Nullable::NonNullable,
                    },
                ),
                field("name", "name", metadata::ScalarType::String),
                field("age", "age", metadata::ScalarType::Integer),
            ]),
            relationships: BTreeMap::new(),
        },
    )]))
}

pub fn configuration() -> Configuration {
    Configuration {
        metadata: metadata::Metadata { models: models() },
        connection: ResolvedConnectionSettings {
            username: "user@example.com".to_string(),
            password: "hunter2".to_string(),
            login_endpoint: "login.salesforce.com/services/Soap/u/28.0".to_string(),
        },
    }
}

/// An adapter wired to a shared scripted connection.
pub fn adapter() -> (SalesforceAdapter<MockConnection>, MockConnection) {
    let connection = MockConnection::default();
    let mut registry = prometheus::Registry::new();
    let adapter = SalesforceAdapter::with_connection(
        metadata::RepositoryName::new("default"),
        configuration(),
        &mut registry,
        connection.clone(),
    )
    .unwrap();
    (adapter, connection)
}
