//! The abstract query shapes handed to the adapter by the upstream query
//! layer. These arrive already validated and are read-only inputs to
//! translation.

use serde::{Deserialize, Serialize};

use query_engine_metadata::metadata::RepositoryName;

/// A read request against one model under one repository scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    pub model: String,
    pub repository: RepositoryName,
    /// The fields to return, in the order the caller wants them back.
    pub fields: Vec<Target>,
    /// Filter conditions, implicitly conjoined.
    #[serde(default)]
    pub conditions: Vec<Condition>,
    #[serde(default)]
    pub order: Option<OrderDirective>,
    /// Zero is a meaningful limit, distinct from absent.
    #[serde(default)]
    pub limit: Option<u32>,
}

/// A field to select or filter on: either a field of the query's own model,
/// or one reached through a chain of relationship hops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    Field {
        name: String,
    },
    Path {
        relationships: Vec<String>,
        name: String,
    },
}

/// One filter predicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub operator: Operator,
    pub target: Target,
    /// A scalar, or an ordered collection of scalars for set membership
    /// under `Equals`/`NotEquals`.
    pub value: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Equals,
    NotEquals,
    Like,
    GreaterThan,
    GreaterThanOrEqualTo,
    LessThan,
    LessThanOrEqualTo,
    /// Pre-rendered operator and operand text, used verbatim. The
    /// condition's value is not consulted.
    Raw(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDirective {
    pub target: Target,
    pub direction: OrderDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderDirection {
    Ascending,
    Descending,
}
