//! # Thrift Store CLI
//!
//! Administrative operations that cannot go through the HTTP API.
//!
//! Promoting an account to admin over HTTP requires an existing admin, so
//! the first one is created here.
//!
//! ```ignore
//! use thriftstore_cli::create_admin;
//!
//! let outcome = create_admin(&store, "owner@example.com", Some("Owner")).await?;
//! ```

use serde_json::Value;
use thriftstore_db::{Document, DocumentStore, Filter, StoreError, UpdateOutcome};
use thriftstore_models::{Role, collections, timestamp};

/// Grants the admin role to the account with `email`, creating the account
/// when it does not exist yet.
pub async fn create_admin(
    store: &DocumentStore,
    email: &str,
    name: Option<&str>,
) -> Result<UpdateOutcome, StoreError> {
    let users = store.collection(collections::USERS);
    let filter = Filter::new().eq("userEmail", email);

    let mut set = Document::new();
    set.insert("role".into(), Value::String(Role::Admin.as_str().into()));
    if let Some(name) = name {
        set.insert("userName".into(), Value::String(name.to_string()));
    }

    let outcome = users.update_one(&filter, &set, true).await?;

    if let Some(id) = &outcome.upserted_id {
        let mut fresh = Document::new();
        fresh.insert("isVerified".into(), Value::Bool(false));
        fresh.insert("createdAt".into(), Value::String(timestamp()));
        users.update_one(&Filter::by_id(id), &fresh, false).await?;
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_create_admin_inserts_new_account() {
        let store = DocumentStore::in_memory();

        let outcome = create_admin(&store, "owner@thrift.test", Some("Owner"))
            .await
            .unwrap();
        assert!(outcome.upserted_id.is_some());

        let account = store
            .collection(collections::USERS)
            .find_one(&Filter::new().eq("userEmail", "owner@thrift.test"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(account["role"], json!("admin"));
        assert_eq!(account["userName"], json!("Owner"));
        assert_eq!(account["isVerified"], json!(false));
        assert!(account.contains_key("createdAt"));
    }

    #[tokio::test]
    async fn test_create_admin_promotes_existing_account() {
        let store = DocumentStore::in_memory();
        let users = store.collection(collections::USERS);
        let mut existing = Document::new();
        existing.insert("userEmail".into(), json!("sara@thrift.test"));
        existing.insert("role".into(), json!("seller"));
        let id = users.insert_one(existing).await.unwrap();

        let outcome = create_admin(&store, "sara@thrift.test", None).await.unwrap();
        assert_eq!(outcome.matched_count, 1);
        assert_eq!(outcome.modified_count, 1);
        assert!(outcome.upserted_id.is_none());

        let account = users.find_one(&Filter::by_id(&id)).await.unwrap().unwrap();
        assert_eq!(account["role"], json!("admin"));
        assert_eq!(users.find(&Filter::new()).await.unwrap().len(), 1);
    }
}
