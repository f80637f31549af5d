//! Request definitions
//!
//! Inputs accepted by the lookup and insert operations.

use serde::Deserialize;
use serde_json::Value;

/// Query string of a lookup request (`?word=...`)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LookupQuery {
    pub word: Option<String>,
}

/// Body of an insert request
///
/// Fields are `None` when missing or when the JSON value is not a string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InsertPayload {
    pub word: Option<String>,
    pub definition: Option<String>,
}

impl InsertPayload {
    /// Build a payload from two strings
    pub fn new(word: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            word: Some(word.into()),
            definition: Some(definition.into()),
        }
    }

    /// Extract `word` and `definition` from an arbitrary JSON body
    pub fn from_json(body: &Value) -> Self {
        let field = |name: &str| body.get(name).and_then(Value::as_str).map(str::to_string);

        Self {
            word: field("word"),
            definition: field("definition"),
        }
    }
}
