//! A data-access adapter for a Salesforce-style record store.
//!
//! Abstract queries are compiled to SOQL text, executed through a
//! [`connection`](query_engine_execution::connection::Connection), and the
//! returned records are mapped back into tuples aligned with the requested
//! fields. Create, update, and delete bridge in-memory resources to remote
//! object mutations, writing store-assigned identifiers back after create.

pub mod adapter;
pub mod resource;
pub mod state;

pub use adapter::{AdapterError, SalesforceAdapter};
pub use resource::Resource;
pub use state::Connect;
