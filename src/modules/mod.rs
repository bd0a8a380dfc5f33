//! Feature modules.
//!
//! Each module has a `controller` (HTTP handlers), a `service` (store access)
//! and a `router` exposing one route group per access level.

pub mod accounts;
pub mod auth;
pub mod categories;
pub mod health;
pub mod orders;
pub mod payments;
pub mod products;
pub mod reports;
pub mod users;

use serde_json::Value;
use thriftstore_db::Document;

/// A one-field update document.
pub(crate) fn set_field(field: &str, value: impl Into<Value>) -> Document {
    let mut doc = Document::new();
    doc.insert(field.to_string(), value.into());
    doc
}
