//! Handle the translation of literal values.

use query_engine_soql::soql;

use crate::translation::error::Error;

/// Convert a JSON value into a SOQL value. Objects have no literal form
/// and abort translation.
pub fn translate_json_value(value: &serde_json::Value) -> Result<soql::ast::Value, Error> {
    match value {
        serde_json::Value::Null => Ok(soql::ast::Value::Null),
        serde_json::Value::Bool(b) => Ok(soql::ast::Value::Bool(*b)),
        serde_json::Value::Number(num) => match num.as_i64() {
            Some(int) => Ok(soql::ast::Value::Int(int)),
            None => num
                .as_f64()
                .map(soql::ast::Value::Float)
                .ok_or_else(|| Error::UnsupportedValue(value.clone())),
        },
        serde_json::Value::String(s) => Ok(soql::ast::Value::String(s.clone())),
        serde_json::Value::Array(items) => {
            Ok(soql::ast::Value::Array(translate_json_values(items)?))
        }
        serde_json::Value::Object(_) => Err(Error::UnsupportedValue(value.clone())),
    }
}

/// Convert a collection of JSON values, preserving order and recursing into
/// nested collections.
pub fn translate_json_values(values: &[serde_json::Value]) -> Result<Vec<soql::ast::Value>, Error> {
    values.iter().map(translate_json_value).collect()
}
