//! Translate filter conditions to SOQL expressions.

use query_engine_soql::soql;

use super::helpers::Env;
use super::values;
use crate::translation::error::Error;
use crate::translation::request;

/// Translate one condition to a clause expression.
///
/// Equality and inequality switch to set-membership operators when the
/// value is a collection; the remaining operators map one-to-one
/// regardless of value shape.
pub fn translate_condition(
    env: &Env,
    model_name: &str,
    condition: &request::Condition,
) -> Result<soql::ast::Expression, Error> {
    let (target, _) = env.resolve_target(model_name, &condition.target)?;

    match &condition.operator {
        request::Operator::Equals => equality(
            target,
            &condition.value,
            soql::ast::BinaryOperator::Equals,
            soql::ast::BinaryArrayOperator::In,
        ),
        request::Operator::NotEquals => equality(
            target,
            &condition.value,
            soql::ast::BinaryOperator::NotEquals,
            soql::ast::BinaryArrayOperator::NotIn,
        ),
        request::Operator::Like => comparison(target, &condition.value, soql::ast::BinaryOperator::Like),
        request::Operator::GreaterThan => {
            comparison(target, &condition.value, soql::ast::BinaryOperator::GreaterThan)
        }
        request::Operator::GreaterThanOrEqualTo => comparison(
            target,
            &condition.value,
            soql::ast::BinaryOperator::GreaterThanOrEqualTo,
        ),
        request::Operator::LessThan => {
            comparison(target, &condition.value, soql::ast::BinaryOperator::LessThan)
        }
        request::Operator::LessThanOrEqualTo => comparison(
            target,
            &condition.value,
            soql::ast::BinaryOperator::LessThanOrEqualTo,
        ),
        request::Operator::Raw(rest) => Ok(soql::ast::Expression::RawOperator {
            target,
            rest: rest.clone(),
        }),
    }
}

/// Equality against a collection is set membership.
fn equality(
    target: soql::ast::ColumnReference,
    value: &serde_json::Value,
    scalar_operator: soql::ast::BinaryOperator,
    collection_operator: soql::ast::BinaryArrayOperator,
) -> Result<soql::ast::Expression, Error> {
    match value {
        serde_json::Value::Array(items) => Ok(soql::ast::Expression::BinaryArrayOperator {
            target,
            operator: collection_operator,
            values: values::translate_json_values(items)?,
        }),
        value => Ok(soql::ast::Expression::BinaryOperator {
            target,
            operator: scalar_operator,
            value: values::translate_json_value(value)?,
        }),
    }
}

fn comparison(
    target: soql::ast::ColumnReference,
    value: &serde_json::Value,
    operator: soql::ast::BinaryOperator,
) -> Result<soql::ast::Expression, Error> {
    Ok(soql::ast::Expression::BinaryOperator {
        target,
        operator,
        value: values::translate_json_value(value)?,
    })
}
