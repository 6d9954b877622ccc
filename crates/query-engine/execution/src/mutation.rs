//! Build remote object payloads and run mutations against the store.

use indexmap::IndexMap;

use query_engine_metadata::metadata;

use crate::connection::{Connection, MutationOutcome, ObjectId, ObjectPayload};
use crate::error::Error;
use crate::metrics;

/// The key an existing object's identity travels under in a mutation
/// payload.
pub const IDENTITY_KEY: &str = "id";

/// Aggregate of one mutation call. The per-item outcomes stay visible so a
/// partial failure is never collapsed into a single pass/fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationSummary {
    /// Number of objects the store accepted.
    pub affected: usize,
    pub outcomes: Vec<MutationOutcome>,
}

impl MutationSummary {
    pub fn from_outcomes(outcomes: Vec<MutationOutcome>) -> Self {
        let affected = outcomes.iter().filter(|outcome| outcome.success).count();
        MutationSummary { affected, outcomes }
    }

    /// A zero-affected summary for operations that matched nothing.
    pub fn empty() -> Self {
        MutationSummary {
            affected: 0,
            outcomes: vec![],
        }
    }
}

/// Rewrite an attribute map keyed by field names into a payload keyed by
/// storage field names, optionally carrying an existing object's identity
/// under its canonical key.
pub fn build_object_payload<C: Connection>(
    connection: &C,
    model_name: &str,
    model: &metadata::ModelInfo,
    repository: &metadata::RepositoryName,
    attributes: &IndexMap<String, serde_json::Value>,
    identity: Option<&ObjectId>,
) -> Result<ObjectPayload, Error> {
    let mut fields = IndexMap::with_capacity(attributes.len() + 1);
    if let Some(ObjectId(id)) = identity {
        fields.insert(
            IDENTITY_KEY.to_string(),
            serde_json::Value::String(id.clone()),
        );
    }
    for (name, value) in attributes {
        let field = model.fields.get(name).ok_or_else(|| Error::UnknownField {
            field: name.clone(),
            model: model_name.to_string(),
        })?;
        fields.insert(field.name.clone(), value.clone());
    }
    Ok(connection.make_object(model.storage_name(repository), fields))
}

/// Create remote objects; one outcome per payload, in order.
pub async fn create<C: Connection>(
    connection: &C,
    metrics: &metrics::Metrics,
    payloads: Vec<ObjectPayload>,
) -> Result<Vec<MutationOutcome>, Error> {
    let expected = payloads.len();
    check_outcomes(metrics, expected, connection.create(payloads).await)
}

/// Update remote objects; one outcome per payload, in order.
pub async fn update<C: Connection>(
    connection: &C,
    metrics: &metrics::Metrics,
    payloads: Vec<ObjectPayload>,
) -> Result<Vec<MutationOutcome>, Error> {
    let expected = payloads.len();
    check_outcomes(metrics, expected, connection.update(payloads).await)
}

/// Delete remote objects by identity; one outcome per id, in order.
pub async fn delete<C: Connection>(
    connection: &C,
    metrics: &metrics::Metrics,
    ids: Vec<ObjectId>,
) -> Result<Vec<MutationOutcome>, Error> {
    let expected = ids.len();
    check_outcomes(metrics, expected, connection.delete(ids).await)
}

/// Outcomes must line up one-to-one with the submitted objects, or the
/// per-item reporting contract is broken.
fn check_outcomes(
    metrics: &metrics::Metrics,
    expected: usize,
    outcomes: Result<Vec<MutationOutcome>, crate::error::ConnectionError>,
) -> Result<Vec<MutationOutcome>, Error> {
    match outcomes {
        Ok(outcomes) if outcomes.len() == expected => {
            metrics.record_successful_mutation();
            Ok(outcomes)
        }
        Ok(outcomes) => {
            metrics.record_failed_mutation();
            Err(Error::MismatchedOutcomes {
                expected,
                got: outcomes.len(),
            })
        }
        Err(err) => {
            metrics.record_failed_mutation();
            Err(Error::Connection(err))
        }
    }
}
