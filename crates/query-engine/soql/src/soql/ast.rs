//! Type definitions of a SOQL AST representation.

#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub select_list: SelectList,
    pub from: ObjectName,
    pub where_: Where,
    pub order_by: OrderBy,
    pub limit: Limit,
}

/// The requested fields, in request order. Duplicates are preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectList(pub Vec<ColumnReference>);

/// The storage-level name of a remote object type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectName(pub String);

/// A reference to a field, possibly reached through relationship hops.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnReference {
    /// Storage names of the relationship hops, outermost first.
    pub path: Vec<String>,
    /// The storage name of the field itself.
    pub name: String,
}

/// Filter conditions, implicitly conjoined.
#[derive(Debug, Clone, PartialEq)]
pub struct Where(pub Vec<Expression>);

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    BinaryOperator {
        target: ColumnReference,
        operator: BinaryOperator,
        value: Value,
    },
    BinaryArrayOperator {
        target: ColumnReference,
        operator: BinaryArrayOperator,
        values: Vec<Value>,
    },
    /// Pre-rendered operator and operand text, appended verbatim after the
    /// target.
    RawOperator {
        target: ColumnReference,
        rest: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Equals,
    NotEquals,
    GreaterThan,
    GreaterThanOrEqualTo,
    LessThan,
    LessThanOrEqualTo,
    Like,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryArrayOperator {
    In,
    NotIn,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Array(Vec<Value>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub element: Option<OrderByElement>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderByElement {
    pub target: ColumnReference,
    pub direction: OrderByDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderByDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limit {
    /// A limit of zero is meaningful and rendered; only `None` is omitted.
    pub limit: Option<u32>,
}
