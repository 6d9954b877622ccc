//! Translate the ordering directive.

use query_engine_soql::soql;

use super::helpers::Env;
use crate::translation::error::Error;
use crate::translation::request;

/// Convert the ordering directive, if any, to a SOQL `ORDER BY` clause.
pub fn translate_order_by(
    env: &Env,
    model_name: &str,
    order: Option<&request::OrderDirective>,
) -> Result<soql::ast::OrderBy, Error> {
    match order {
        None => Ok(soql::helpers::empty_order_by()),
        Some(directive) => {
            let (target, _) = env.resolve_target(model_name, &directive.target)?;
            let direction = match directive.direction {
                request::OrderDirection::Ascending => soql::ast::OrderByDirection::Asc,
                request::OrderDirection::Descending => soql::ast::OrderByDirection::Desc,
            };
            Ok(soql::ast::OrderBy {
                element: Some(soql::ast::OrderByElement { target, direction }),
            })
        }
    }
}
