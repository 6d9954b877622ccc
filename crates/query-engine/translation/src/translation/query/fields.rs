//! Translate the requested-field list and precompute result bindings.

use query_engine_soql::soql;

use super::helpers::Env;
use crate::translation::error::Error;
use crate::translation::request;

/// Translate the requested fields to a select list, pairing each with the
/// precomputed storage coordinates the result mapper will read it back
/// through. Order and duplicates are preserved exactly.
pub fn translate_fields(
    env: &Env,
    model_name: &str,
    targets: &[request::Target],
) -> Result<
    (
        Vec<soql::ast::ColumnReference>,
        Vec<soql::execution_plan::FieldBinding>,
    ),
    Error,
> {
    let mut select_list = Vec::with_capacity(targets.len());
    let mut bindings = Vec::with_capacity(targets.len());

    for target in targets {
        let (reference, terminal_model) = env.resolve_target(model_name, target)?;
        bindings.push(soql::execution_plan::FieldBinding {
            object: env.storage_name(&terminal_model)?.to_string(),
            field: reference.name.clone(),
        });
        select_list.push(reference);
    }

    Ok((select_list, bindings))
}
