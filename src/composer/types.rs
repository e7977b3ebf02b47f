use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// The only failure mode of the composer boundary. Inside the boundary the
/// composer is total: missing or wrong-shaped optional fields read as absent,
/// never as errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ComposeError {
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
}

/// Wire-shaped request bundling everything the composer consumes, so a backend
/// recommendation payload deserializes straight into a compose call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComposeRequest {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub attributes: Value,
    #[serde(default)]
    pub recommendations: Value,
}

impl ComposeRequest {
    pub fn compose(&self) -> Result<String, ComposeError> {
        super::compose(&self.query, &self.attributes, &self.recommendations)
    }
}

/// Get-with-default view over the parsed query attributes.
///
/// Every recognized key is optional and its value may arrive with the wrong
/// shape; all of that reads as absent/false here so the callers never branch
/// on lookup failure.
#[derive(Debug, Clone, Copy)]
pub struct AttrView<'a> {
    attrs: Option<&'a Map<String, Value>>,
}

impl<'a> AttrView<'a> {
    pub fn new(attrs: Option<&'a Map<String, Value>>) -> Self {
        Self { attrs }
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        self.attrs.and_then(|m| m.get(key))
    }

    /// String attribute. Empty strings count as absent.
    pub fn text(&self, key: &str) -> Option<&'a str> {
        self.get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    /// Boolean flag, false when absent or not a bool.
    pub fn flag(&self, key: &str) -> bool {
        self.get(key).and_then(Value::as_bool).unwrap_or(false)
    }

    /// Array attribute rendered element-by-element to text.
    pub fn text_list(&self, key: &str) -> Vec<String> {
        match self.get(key) {
            Some(Value::Array(items)) => items.iter().map(value_text).collect(),
            _ => Vec::new(),
        }
    }

    /// Attribute that may be a single string or a list, normalized to one
    /// comma-joined text. None when absent or empty.
    pub fn text_or_list(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Array(items) if !items.is_empty() => {
                Some(items.iter().map(value_text).collect::<Vec<_>>().join(", "))
            }
            _ => None,
        }
    }
}

fn value_text(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
