//! Lookup helpers shared by the translation steps.

use query_engine_metadata::metadata;
use query_engine_soql::soql;

use crate::translation::error::Error;
use crate::translation::request;

/// The catalog and repository scope a request is translated under. Storage
/// names resolve lazily against the scope, so the same request may render
/// differently under different repositories.
pub struct Env<'a> {
    models_info: &'a metadata::ModelsInfo,
    repository: &'a metadata::RepositoryName,
}

impl<'a> Env<'a> {
    pub fn new(
        models_info: &'a metadata::ModelsInfo,
        repository: &'a metadata::RepositoryName,
    ) -> Env<'a> {
        Env {
            models_info,
            repository,
        }
    }

    /// Look up a model in the catalog.
    pub fn lookup_model(&self, name: &str) -> Result<&'a metadata::ModelInfo, Error> {
        let metadata::ModelsInfo(models) = self.models_info;
        models
            .get(name)
            .ok_or_else(|| Error::ModelNotFound(name.to_string()))
    }

    /// Look up a field on a model.
    pub fn lookup_field(
        &self,
        model_name: &str,
        field_name: &str,
    ) -> Result<&'a metadata::FieldInfo, Error> {
        self.lookup_model(model_name)?
            .fields
            .get(field_name)
            .ok_or_else(|| {
                Error::FieldNotFoundInModel(field_name.to_string(), model_name.to_string())
            })
    }

    /// Look up a relationship hanging off a model.
    pub fn lookup_relationship(
        &self,
        model_name: &str,
        relationship_name: &str,
    ) -> Result<&'a metadata::Relationship, Error> {
        self.lookup_model(model_name)?
            .relationships
            .get(relationship_name)
            .ok_or_else(|| {
                Error::RelationshipNotFound(relationship_name.to_string(), model_name.to_string())
            })
    }

    /// The storage name of a model under this scope.
    pub fn storage_name(&self, model_name: &str) -> Result<&'a str, Error> {
        Ok(self.lookup_model(model_name)?.storage_name(self.repository))
    }

    /// Resolve a target to its column reference, also returning the name of
    /// the model the terminal field lives on.
    pub fn resolve_target(
        &self,
        model_name: &str,
        target: &request::Target,
    ) -> Result<(soql::ast::ColumnReference, String), Error> {
        match target {
            request::Target::Field { name } => {
                let field = self.lookup_field(model_name, name)?;
                Ok((
                    soql::ast::ColumnReference {
                        path: vec![],
                        name: field.name.clone(),
                    },
                    model_name.to_string(),
                ))
            }
            request::Target::Path {
                relationships,
                name,
            } => {
                let mut path = Vec::with_capacity(relationships.len());
                let mut current = model_name.to_string();
                for relationship_name in relationships {
                    let relationship = self.lookup_relationship(&current, relationship_name)?;
                    // each hop renders as the storage name of the model it
                    // hangs off
                    path.push(self.storage_name(&current)?.to_string());
                    current = relationship.target_model.clone();
                }
                let field = self.lookup_field(&current, name)?;
                Ok((
                    soql::ast::ColumnReference {
                        path,
                        name: field.name.clone(),
                    },
                    current,
                ))
            }
        }
    }
}
