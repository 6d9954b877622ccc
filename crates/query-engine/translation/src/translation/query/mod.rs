//! Translate one query request.

pub mod fields;
pub mod filtering;
pub mod helpers;
pub mod sorting;
pub mod values;

use query_engine_metadata::metadata;
use query_engine_soql::soql;

use crate::translation::error::Error;
use crate::translation::request;

/// Translate a query request to a SOQL execution plan.
pub fn translate(
    models_info: &metadata::ModelsInfo,
    query: &request::Query,
) -> Result<soql::execution_plan::ExecutionPlan, Error> {
    let env = helpers::Env::new(models_info, &query.repository);
    let root = env.lookup_model(&query.model)?;

    let (select_list, bindings) = fields::translate_fields(&env, &query.model, &query.fields)?;

    let mut select = soql::helpers::simple_select(
        select_list,
        soql::ast::ObjectName(root.storage_name(&query.repository).to_string()),
    );

    select.where_ = soql::ast::Where(
        query
            .conditions
            .iter()
            .map(|condition| filtering::translate_condition(&env, &query.model, condition))
            .collect::<Result<Vec<_>, Error>>()?,
    );

    select.order_by = sorting::translate_order_by(&env, &query.model, query.order.as_ref())?;

    select.limit = soql::ast::Limit { limit: query.limit };

    tracing::debug!("SOQL AST: {:?}", select);

    Ok(soql::execution_plan::ExecutionPlan {
        root_model: query.model.clone(),
        query: select,
        bindings,
    })
}
