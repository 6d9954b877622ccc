//! Transient state used by the adapter.
//!
//! Metrics are initialized on startup; the connection itself is only opened
//! on first use and then shared for the adapter's lifetime.

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::OnceCell;

use query_engine_execution::connection::Connection;
use query_engine_execution::error::ConnectionError;
use query_engine_execution::metrics;
use salesforce_configuration::ResolvedConnectionSettings;

/// Connections that can open themselves from resolved settings.
#[async_trait]
pub trait Connect: Connection + Sized {
    async fn connect(settings: &ResolvedConnectionSettings) -> Result<Self, ConnectionError>;
}

/// State for the adapter.
pub struct State<C> {
    pub metrics: metrics::Metrics,
    connection: OnceCell<C>,
}

/// Set up metrics and an empty connection slot.
pub fn create_state<C>(
    metrics_registry: &mut prometheus::Registry,
) -> Result<State<C>, InitializationError> {
    let metrics =
        metrics::Metrics::initialize(metrics_registry).map_err(InitializationError::MetricsError)?;

    Ok(State {
        metrics,
        connection: OnceCell::new(),
    })
}

/// Set up state around an already-open connection, for callers that manage
/// the session themselves.
pub fn create_state_with_connection<C>(
    metrics_registry: &mut prometheus::Registry,
    connection: C,
) -> Result<State<C>, InitializationError> {
    let metrics =
        metrics::Metrics::initialize(metrics_registry).map_err(InitializationError::MetricsError)?;

    Ok(State {
        metrics,
        connection: OnceCell::new_with(Some(connection)),
    })
}

impl<C: Connect> State<C> {
    /// The shared connection, opened exactly once on first use. Concurrent
    /// first callers are serialized by the cell, so duplicate sessions are
    /// never created.
    pub async fn connection(
        &self,
        settings: &ResolvedConnectionSettings,
    ) -> Result<&C, ConnectionError> {
        self.connection
            .get_or_try_init(|| C::connect(settings))
            .await
    }
}

/// State initialization error.
#[derive(Debug, Error)]
pub enum InitializationError {
    #[error("error initializing metrics: {0}")]
    MetricsError(prometheus::Error),
}
