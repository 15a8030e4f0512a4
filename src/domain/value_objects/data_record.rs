//! Data records - one SWAPI entity as an ordered set of fields

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single entity (person, planet or starship) as returned by the dataset
///
/// Fields keep the order in which they appeared in the source JSON. The
/// parser's answer recovery scans fields in that order and takes the first
/// match, so the order is part of the observable behaviour.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataRecord {
    fields: Map<String, Value>,
}

#[derive(Debug, thiserror::Error)]
pub enum DataRecordError {
    #[error("Context is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("Context must be a JSON object, got {0}")]
    NotAnObject(&'static str),
}

impl DataRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON-encoded record, as sent in the `context` request field
    pub fn from_json_str(json: &str) -> Result<Self, DataRecordError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, DataRecordError> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            Value::Null => Err(DataRecordError::NotAnObject("null")),
            Value::Bool(_) => Err(DataRecordError::NotAnObject("a boolean")),
            Value::Number(_) => Err(DataRecordError::NotAnObject("a number")),
            Value::String(_) => Err(DataRecordError::NotAnObject("a string")),
            Value::Array(_) => Err(DataRecordError::NotAnObject("an array")),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// The field's value if it is a JSON string
    pub fn get_text(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Value::as_str)
    }

    /// The record's `name` field, when it is non-empty text
    pub fn name(&self) -> Option<&str> {
        self.get_text("name").filter(|name| !name.is_empty())
    }

    /// Fields in insertion order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Serialize back to the compact JSON form handed to the model
    pub fn to_json_string(&self) -> String {
        Value::Object(self.fields.clone()).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_keep_document_order() {
        let record =
            DataRecord::from_json_str(r#"{"name":"Tatooine","terrain":"desert","climate":"arid"}"#)
                .unwrap();

        let names: Vec<&str> = record.fields().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["name", "terrain", "climate"]);
    }

    #[test]
    fn test_rejects_non_objects() {
        assert!(matches!(
            DataRecord::from_json_str("[1, 2]"),
            Err(DataRecordError::NotAnObject("an array"))
        ));
        assert!(matches!(
            DataRecord::from_json_str("not json"),
            Err(DataRecordError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_get_text_ignores_numbers() {
        let record = DataRecord::new()
            .with_field("name", "Slave I")
            .with_field("crew", 1);

        assert_eq!(record.get_text("name"), Some("Slave I"));
        assert_eq!(record.get_text("crew"), None);
        assert_eq!(record.fields().count(), 2);
    }

    #[test]
    fn test_empty_name_is_treated_as_missing() {
        let record = DataRecord::new().with_field("name", "");
        assert_eq!(record.name(), None);
    }
}
