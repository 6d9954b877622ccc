//! Helpers for building soql::ast types in certain shapes and patterns.

use super::ast::*;
use super::string::SOQL;

/// An empty `WHERE` clause.
pub fn empty_where() -> Where {
    Where(vec![])
}

/// An empty `ORDER BY` clause.
pub fn empty_order_by() -> OrderBy {
    OrderBy { element: None }
}

/// Empty `LIMIT` clause.
pub fn empty_limit() -> Limit {
    Limit { limit: None }
}

/// Build a simple select with a select list and source object, and the rest
/// empty.
pub fn simple_select(select_list: Vec<ColumnReference>, from: ObjectName) -> Select {
    Select {
        select_list: SelectList(select_list),
        from,
        where_: empty_where(),
        order_by: empty_order_by(),
        limit: empty_limit(),
    }
}

/// Render a select to its string form.
pub fn select_to_soql(select: &Select) -> SOQL {
    let mut soql = SOQL::new();
    select.to_soql(&mut soql);
    soql
}
