//! Catalog fixtures and helpers shared by the translation tests.

use std::collections::BTreeMap;

use query_engine_metadata::metadata;
use query_engine_soql::soql;
use query_engine_translation::translation;

pub fn field(name: &str, storage: &str, r#type: metadata::ScalarType) -> (String, metadata::FieldInfo) {
    (
        name.to_string(),
        metadata::FieldInfo {
            name: storage.to_string(),
            r#type,
            is_key: false,
            nullable: metadata::Nullable::Nullable,
        },
    )
}

pub fn key_field(name: &str, storage: &str) -> (String, metadata::FieldInfo) {
    (
        name.to_string(),
        metadata::FieldInfo {
            name: storage.to_string(),
            r#type: metadata::ScalarType::Id,
            is_key: true,
            nullable: metadata::Nullable::NonNullable,
        },
    )
}

/// Three chained models: Person -> company -> Company -> country -> Country.
/// Person's storage names match its field names; the others are remapped.
pub fn models() -> metadata::ModelsInfo {
    metadata::ModelsInfo(BTreeMap::from([
        (
            "Person".to_string(),
            metadata::ModelInfo {
                storage_name: "Person".to_string(),
                storage_name_overrides: BTreeMap::from([(
                    metadata::RepositoryName::new("legacy"),
                    "Person__c".to_string(),
                )]),
                fields: BTreeMap::from([
                    key_field("id", "id"),
                    field("name", "name", metadata::ScalarType::String),
                    field("age", "age", metadata::ScalarType::Integer),
                ]),
                relationships: BTreeMap::from([(
                    "company".to_string(),
                    metadata::Relationship {
                        target_model: "Company".to_string(),
                    },
                )]),
            },
        ),
        (
            "Company".to_string(),
            metadata::ModelInfo {
                storage_name: "Company".to_string(),
                storage_name_overrides: BTreeMap::new(),
                fields: BTreeMap::from([
                    key_field("id", "Id"),
                    field("name", "Name", metadata::ScalarType::String),
                ]),
                relationships: BTreeMap::from([(
                    "country".to_string(),
                    metadata::Relationship {
                        target_model: "Country".to_string(),
                    },
                )]),
            },
        ),
        (
            "Country".to_string(),
            metadata::ModelInfo {
                storage_name: "Country".to_string(),
                storage_name_overrides: BTreeMap::new(),
                fields: BTreeMap::from([field("code", "Code", metadata::ScalarType::String)]),
                relationships: BTreeMap::new(),
            },
        ),
    ]))
}

pub fn translate(query: &translation::request::Query) -> soql::execution_plan::ExecutionPlan {
    translation::translate(&models(), query).unwrap()
}

/// Translate and render the generated query text.
pub fn soql_text(query: &translation::request::Query) -> String {
    translate(query).query().soql
}
