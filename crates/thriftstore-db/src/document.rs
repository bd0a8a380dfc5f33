//! Documents, equality filters and write outcomes.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::StoreError;

/// A stored JSON object.
pub type Document = Map<String, Value>;

/// Field holding a document's identifier.
pub const ID_FIELD: &str = "_id";

/// `(collection, field)` pairs whose values must be unique across the
/// collection. Mirrored by unique indexes in the PostgreSQL schema.
pub const UNIQUE_KEYS: &[(&str, &str)] = &[("users", "userEmail")];

/// Conjunction of field equality conditions.
///
/// Values are compared as whole JSON scalars. A document matches when every
/// condition's field is present and equal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter(Document);

impl Filter {
    /// Matches every document.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn by_id(id: impl Into<String>) -> Self {
        Self::new().eq(ID_FIELD, id.into())
    }

    pub fn eq(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.0.insert(field.to_string(), value.into());
        self
    }

    pub fn matches(&self, doc: &Document) -> bool {
        self.0
            .iter()
            .all(|(field, expected)| doc.get(field) == Some(expected))
    }

    pub fn id(&self) -> Option<&str> {
        self.0.get(ID_FIELD).and_then(Value::as_str)
    }

    pub fn as_document(&self) -> &Document {
        &self.0
    }

    pub fn into_document(self) -> Document {
        self.0
    }
}

/// Result of an update, in the acknowledgement shape existing clients read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_id: Option<String>,
}

/// Serializes a value that must become a JSON object.
pub fn to_document<T: Serialize>(value: &T) -> Result<Document, StoreError> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(StoreError::Serialization(serde::ser::Error::custom(
            format!("expected a JSON object, got {}", other),
        ))),
    }
}

pub fn from_document<T: DeserializeOwned>(doc: Document) -> Result<T, StoreError> {
    Ok(serde_json::from_value(Value::Object(doc))?)
}

/// Returns the document's id, assigning a fresh one when missing.
pub fn ensure_id(doc: &mut Document) -> String {
    if let Some(id) = doc.get(ID_FIELD).and_then(Value::as_str) {
        return id.to_string();
    }
    let id = uuid::Uuid::new_v4().to_string();
    doc.insert(ID_FIELD.to_string(), Value::String(id.clone()));
    id
}

/// Merges `set` into `doc`, returning whether any field changed.
pub fn apply_set(doc: &mut Document, set: &Document) -> bool {
    let mut changed = false;
    for (field, value) in set {
        if doc.get(field) != Some(value) {
            doc.insert(field.clone(), value.clone());
            changed = true;
        }
    }
    changed
}
