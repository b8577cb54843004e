use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Field name to the messages collected for it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationErrors {
    fields: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.fields
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn has(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn messages(&self, field: &str) -> &[String] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Folds the object errors reported by `serde_valid` into per-field messages.
    pub fn merge_serde_valid(&mut self, errors: serde_valid::validation::Errors) {
        let value = match serde_json::to_value(&errors) {
            Ok(value) => value,
            Err(_) => {
                self.add("form", errors.to_string());
                return;
            }
        };

        if let Some(properties) = value.get("properties").and_then(Value::as_object) {
            for (field, property) in properties {
                let messages = property
                    .get("errors")
                    .and_then(Value::as_array)
                    .cloned()
                    .unwrap_or_default();
                for message in messages {
                    match message {
                        Value::String(text) => self.add(field, text),
                        other => self.add(field, other.to_string()),
                    }
                }
            }
        }

        if let Some(messages) = value.get("errors").and_then(Value::as_array) {
            for message in messages {
                self.add("form", message.as_str().map(String::from).unwrap_or_else(|| message.to_string()));
            }
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .fields
            .iter()
            .map(|(field, messages)| format!("{}: {}", field, messages.join(", ")))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}
