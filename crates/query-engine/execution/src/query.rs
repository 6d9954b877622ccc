//! Execute an execution plan against the remote store.

use query_engine_soql::soql::execution_plan::{ExecutionPlan, FieldBinding};

use crate::connection::Connection;
use crate::error::Error;
use crate::metrics;

/// One result tuple. Scalars appear in requested-field order and the
/// length always equals the plan's binding count.
pub type ResultRow = Vec<serde_json::Value>;

/// Run a query plan and map the returned records into result tuples.
pub async fn execute<C: Connection>(
    connection: &C,
    metrics: &metrics::Metrics,
    plan: &ExecutionPlan,
) -> Result<Vec<ResultRow>, Error> {
    let query = plan.query();

    tracing::info!("Generated SOQL: {}", query.soql);

    let records = match connection.execute(&query.soql).await {
        Ok(records) => records,
        Err(err) => {
            metrics.record_failed_query();
            return Err(Error::Connection(err));
        }
    };

    // a missing result set is a valid "no rows" outcome
    let rows = match records {
        None => vec![],
        Some(records) => map_records(connection, &plan.bindings, records).collect(),
    };

    metrics.record_successful_query();
    Ok(rows)
}

/// Map each record to one tuple by reading every binding back through the
/// connection's field-lookup contract. Yields tuples lazily, mirroring the
/// record sequence.
pub fn map_records<'a, C: Connection>(
    connection: &'a C,
    bindings: &'a [FieldBinding],
    records: Vec<C::Record>,
) -> impl Iterator<Item = ResultRow> + 'a
where
    C::Record: 'a,
{
    records.into_iter().map(move |record| {
        bindings
            .iter()
            .map(|binding| connection.field_value(&record, &binding.object, &binding.field))
            .collect()
    })
}
