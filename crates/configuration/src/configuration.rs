//! Runtime configuration for the adapter.

use query_engine_metadata::metadata;

/// The 'Configuration' type collects all the information necessary to serve
/// requests at runtime: the tracked models plus fully resolved connection
/// settings.
///
/// 'ParsedConfiguration' deals with the on-disk format and its secrets;
/// values of this type are produced from one using
/// 'make_runtime_configuration'.
#[derive(Debug, Clone)]
pub struct Configuration {
    pub metadata: metadata::Metadata,
    pub connection: ResolvedConnectionSettings,
}

/// Connection settings with every secret resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConnectionSettings {
    pub username: String,
    pub password: String,
    pub login_endpoint: String,
}
