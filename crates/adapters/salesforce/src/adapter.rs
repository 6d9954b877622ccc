//! The adapter façade: read, create, update, and delete against the store.

use indexmap::IndexMap;
use thiserror::Error;

use query_engine_execution::connection::ObjectId;
use query_engine_execution::error::ConnectionError;
use query_engine_execution::mutation::{self, MutationSummary};
use query_engine_execution::query::{self, ResultRow};
use query_engine_metadata::metadata;
use query_engine_translation::translation;
use salesforce_configuration::Configuration;

use crate::resource::Resource;
use crate::state::{self, Connect, State};

/// The adapter: one repository scope, one configuration, one lazily-opened
/// connection shared for its lifetime.
pub struct SalesforceAdapter<C: Connect> {
    repository: metadata::RepositoryName,
    configuration: Configuration,
    state: State<C>,
}

/// Errors surfaced by the adapter façade.
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error(transparent)]
    Translation(#[from] translation::error::Error),
    #[error(transparent)]
    Execution(#[from] query_engine_execution::error::Error),
    #[error(transparent)]
    Connection(#[from] ConnectionError),
    #[error("model '{0}' is not tracked in the adapter metadata")]
    UnknownModel(String),
    #[error("model '{0}' has no identity field")]
    NoIdentityField(String),
}

impl<C: Connect> SalesforceAdapter<C> {
    /// Create an adapter bound to a repository scope. The connection is not
    /// opened until the first verb needs it.
    pub fn new(
        repository: metadata::RepositoryName,
        configuration: Configuration,
        metrics_registry: &mut prometheus::Registry,
    ) -> Result<Self, state::InitializationError> {
        let state = state::create_state(metrics_registry)?;
        Ok(SalesforceAdapter {
            repository,
            configuration,
            state,
        })
    }

    /// Create an adapter that reuses an already-open connection.
    pub fn with_connection(
        repository: metadata::RepositoryName,
        configuration: Configuration,
        metrics_registry: &mut prometheus::Registry,
        connection: C,
    ) -> Result<Self, state::InitializationError> {
        let state = state::create_state_with_connection(metrics_registry, connection)?;
        Ok(SalesforceAdapter {
            repository,
            configuration,
            state,
        })
    }

    /// The repository scope this adapter was created under.
    pub fn repository(&self) -> &metadata::RepositoryName {
        &self.repository
    }

    async fn connection(&self) -> Result<&C, AdapterError> {
        Ok(self
            .state
            .connection(&self.configuration.connection)
            .await?)
    }

    /// Run a read query and return one tuple per matched record, each in
    /// requested-field order.
    pub async fn read(
        &self,
        request: &translation::request::Query,
    ) -> Result<Vec<ResultRow>, AdapterError> {
        let plan = translation::translate(&self.configuration.metadata.models, request)?;
        let connection = self.connection().await?;
        Ok(query::execute(connection, &self.state.metrics, &plan).await?)
    }

    /// Create remote objects for the given resources and write the
    /// store-assigned identity back onto each successfully created one.
    pub async fn create(
        &self,
        resources: &mut [Resource],
    ) -> Result<MutationSummary, AdapterError> {
        if resources.is_empty() {
            return Ok(MutationSummary::empty());
        }

        let connection = self.connection().await?;

        let mut payloads = Vec::with_capacity(resources.len());
        for resource in resources.iter() {
            let model = self.lookup_model(&resource.model)?;
            payloads.push(mutation::build_object_payload(
                connection,
                &resource.model,
                model,
                &self.repository,
                &resource.attributes,
                None,
            )?);
        }

        let outcomes = mutation::create(connection, &self.state.metrics, payloads).await?;

        for (resource, outcome) in resources.iter_mut().zip(&outcomes) {
            if outcome.success {
                resource.id = outcome.id.clone();
            }
        }

        Ok(MutationSummary::from_outcomes(outcomes))
    }

    /// Update every object matched by the query with the given attributes.
    ///
    /// Without a direct identity condition the matching identities are
    /// resolved with a read first. The two phases are not isolated against
    /// concurrent writers; an empty match is a zero-affected success.
    pub async fn update(
        &self,
        attributes: &IndexMap<String, serde_json::Value>,
        request: &translation::request::Query,
    ) -> Result<MutationSummary, AdapterError> {
        let ids = self.target_identities(request).await?;
        if ids.is_empty() {
            return Ok(MutationSummary::empty());
        }

        let connection = self.connection().await?;
        let model = self.lookup_model(&request.model)?;
        let payloads = ids
            .iter()
            .map(|id| {
                mutation::build_object_payload(
                    connection,
                    &request.model,
                    model,
                    &request.repository,
                    attributes,
                    Some(id),
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        let outcomes = mutation::update(connection, &self.state.metrics, payloads).await?;
        Ok(MutationSummary::from_outcomes(outcomes))
    }

    /// Delete every object matched by the query.
    pub async fn delete(
        &self,
        request: &translation::request::Query,
    ) -> Result<MutationSummary, AdapterError> {
        let ids = self.target_identities(request).await?;
        if ids.is_empty() {
            return Ok(MutationSummary::empty());
        }

        let connection = self.connection().await?;
        let outcomes = mutation::delete(connection, &self.state.metrics, ids).await?;
        Ok(MutationSummary::from_outcomes(outcomes))
    }

    /// The identities a mutating query addresses: the value of a direct
    /// identity condition when one is present, otherwise the matching set
    /// resolved with a read.
    async fn target_identities(
        &self,
        request: &translation::request::Query,
    ) -> Result<Vec<ObjectId>, AdapterError> {
        if let Some(id) = self.key_condition(request)? {
            return Ok(vec![id]);
        }

        let model = self.lookup_model(&request.model)?;
        let (key_name, _) = model
            .key_field()
            .ok_or_else(|| AdapterError::NoIdentityField(request.model.clone()))?;

        tracing::debug!("resolving '{}' identities with a read", request.model);

        let key_query = translation::request::Query {
            model: request.model.clone(),
            repository: request.repository.clone(),
            fields: vec![translation::request::Target::Field {
                name: key_name.clone(),
            }],
            conditions: request.conditions.clone(),
            order: None,
            limit: None,
        };

        let rows = self.read(&key_query).await?;
        Ok(rows
            .into_iter()
            .filter_map(|mut row| match row.pop() {
                Some(serde_json::Value::String(id)) => Some(ObjectId(id)),
                _ => None,
            })
            .collect())
    }

    /// A condition that directly pins the model's identity key. A key
    /// condition whose value is not a plain identity falls through to the
    /// read-based resolution.
    fn key_condition(
        &self,
        request: &translation::request::Query,
    ) -> Result<Option<ObjectId>, AdapterError> {
        let model = self.lookup_model(&request.model)?;
        for condition in &request.conditions {
            if let translation::request::Target::Field { name } = &condition.target {
                if model.fields.get(name).is_some_and(|field| field.is_key) {
                    if let serde_json::Value::String(id) = &condition.value {
                        return Ok(Some(ObjectId(id.clone())));
                    }
                }
            }
        }
        Ok(None)
    }

    fn lookup_model(&self, name: &str) -> Result<&metadata::ModelInfo, AdapterError> {
        let metadata::ModelsInfo(models) = &self.configuration.metadata.models;
        models
            .get(name)
            .ok_or_else(|| AdapterError::UnknownModel(name.to_string()))
    }

    /// Storage lifecycle is owned by the remote store; accept and ignore so
    /// migrations can run.
    pub fn create_model_storage(&self, _model: &str) -> bool {
        true
    }

    /// See [`Self::create_model_storage`].
    pub fn destroy_model_storage(&self, _model: &str) -> bool {
        true
    }
}
