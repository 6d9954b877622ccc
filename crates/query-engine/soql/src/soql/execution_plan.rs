//! Definition of an execution plan to be run against the remote store.

use super::ast;
use super::helpers;
use super::string::SOQL;

/// A translated query together with the precomputed bindings needed to map
/// returned records back into tuples.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionPlan {
    /// The model the request was issued against.
    pub root_model: String,
    /// The query.
    pub query: ast::Select,
    /// One binding per requested field, in request order.
    pub bindings: Vec<FieldBinding>,
}

/// The storage-level coordinates of one requested field: for relationship
/// paths, the object is the final hop's model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldBinding {
    /// Storage name of the object the field lives on.
    pub object: String,
    /// Storage name of the field itself.
    pub field: String,
}

impl ExecutionPlan {
    /// Extract the query component as SOQL text.
    pub fn query(&self) -> SOQL {
        helpers::select_to_soql(&self.query)
    }
}
