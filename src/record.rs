use serde::Serialize;
use serde_json::{Map, Value};

use crate::{log_level::LogLevel, LoggerError, Result};

/// The ordered mapping produced for a single `log` call.
///
/// Fields are merged in a fixed order: the root tag, then the payload, then the level. A
/// later write to an existing key replaces its value but keeps the key where it was first
/// inserted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LogRecord {
    fields: Map<String, Value>,
}

impl LogRecord {
    pub fn build(root: &str, payload: &Value, level: Option<&str>) -> Result<Self> {
        let mut fields = Map::new();

        if !root.is_empty() {
            fields.insert("root".to_string(), Value::String(root.to_string()));
        }

        match payload {
            Value::String(message) => {
                fields.insert("message".to_string(), Value::String(message.clone()));
            }
            Value::Object(map) => {
                for (key, value) in map {
                    fields.insert(key.clone(), value.clone());
                }
            }
            other => {
                return Err(LoggerError::InvalidPayloadType {
                    found: json_type_name(other),
                })
            }
        }

        let level = level
            .filter(|level| !level.is_empty())
            .unwrap_or(LogLevel::Info.label());
        fields.insert("level".to_string(), Value::String(level.to_string()));

        Ok(Self { fields })
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn root(&self) -> Option<&str> {
        self.get("root").and_then(Value::as_str)
    }

    pub fn message(&self) -> Option<&str> {
        self.get("message").and_then(Value::as_str)
    }

    /// Always present on a built record.
    pub fn level(&self) -> &str {
        self.get("level").and_then(Value::as_str).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.fields
    }
}

impl From<LogRecord> for Value {
    fn from(record: LogRecord) -> Self {
        Value::Object(record.fields)
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
