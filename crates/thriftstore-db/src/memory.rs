//! Process-local document store.
//!
//! Collections are vectors kept in insertion order behind a single
//! `RwLock`, so every operation is atomic with respect to the others.
//! Multi-collection sequences performed by callers are not.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::document::{Document, Filter, ID_FIELD, UNIQUE_KEYS, UpdateOutcome, apply_set, ensure_id};
use crate::error::StoreError;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    collections: Arc<RwLock<HashMap<String, Vec<Document>>>>,
    failing: Arc<RwLock<HashSet<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent write to `collection` fail with
    /// [`StoreError::Unavailable`]. Reads keep working.
    #[cfg(any(test, feature = "test-utils"))]
    pub async fn fail_writes_to(&self, collection: &str) {
        self.failing.write().await.insert(collection.to_string());
    }

    #[cfg(any(test, feature = "test-utils"))]
    pub async fn restore_writes_to(&self, collection: &str) {
        self.failing.write().await.remove(collection);
    }

    async fn check_writable(&self, collection: &str) -> Result<(), StoreError> {
        if self.failing.read().await.contains(collection) {
            return Err(StoreError::Unavailable(collection.to_string()));
        }
        Ok(())
    }

    pub async fn find_one(
        &self,
        collection: &str,
        filter: &Filter,
    ) -> Result<Option<Document>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|doc| filter.matches(doc)))
            .cloned())
    }

    pub async fn find(&self, collection: &str, filter: &Filter) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|doc| filter.matches(doc))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    pub async fn insert_one(&self, collection: &str, mut doc: Document) -> Result<String, StoreError> {
        self.check_writable(collection).await?;

        let mut collections = self.collections.write().await;
        let docs = collections.entry(collection.to_string()).or_default();
        let id = ensure_id(&mut doc);

        if docs
            .iter()
            .any(|existing| existing.get(ID_FIELD) == doc.get(ID_FIELD))
            || violates_unique(collection, docs, &doc, None)
        {
            return Err(StoreError::Duplicate {
                collection: collection.to_string(),
            });
        }

        docs.push(doc);
        Ok(id)
    }

    pub async fn update_one(
        &self,
        collection: &str,
        filter: &Filter,
        set: &Document,
        upsert: bool,
    ) -> Result<UpdateOutcome, StoreError> {
        self.check_writable(collection).await?;

        let mut collections = self.collections.write().await;
        let docs = collections.entry(collection.to_string()).or_default();

        if let Some(index) = docs.iter().position(|doc| filter.matches(doc)) {
            let mut updated = docs[index].clone();
            let changed = apply_set(&mut updated, set);
            if changed && violates_unique(collection, docs, &updated, Some(index)) {
                return Err(StoreError::Duplicate {
                    collection: collection.to_string(),
                });
            }
            docs[index] = updated;
            return Ok(UpdateOutcome {
                matched_count: 1,
                modified_count: u64::from(changed),
                upserted_id: None,
            });
        }

        if !upsert {
            return Ok(UpdateOutcome::default());
        }

        let mut doc = filter.clone().into_document();
        apply_set(&mut doc, set);
        let id = ensure_id(&mut doc);
        if violates_unique(collection, docs, &doc, None) {
            return Err(StoreError::Duplicate {
                collection: collection.to_string(),
            });
        }
        docs.push(doc);

        Ok(UpdateOutcome {
            matched_count: 0,
            modified_count: 0,
            upserted_id: Some(id),
        })
    }

    pub async fn update_many(
        &self,
        collection: &str,
        filter: &Filter,
        set: &Document,
    ) -> Result<UpdateOutcome, StoreError> {
        self.check_writable(collection).await?;

        let mut collections = self.collections.write().await;
        let mut outcome = UpdateOutcome::default();
        if let Some(docs) = collections.get_mut(collection) {
            for doc in docs.iter_mut().filter(|doc| filter.matches(doc)) {
                outcome.matched_count += 1;
                if apply_set(doc, set) {
                    outcome.modified_count += 1;
                }
            }
        }
        Ok(outcome)
    }

    pub async fn delete_one(&self, collection: &str, filter: &Filter) -> Result<u64, StoreError> {
        self.check_writable(collection).await?;

        let mut collections = self.collections.write().await;
        let Some(docs) = collections.get_mut(collection) else {
            return Ok(0);
        };
        match docs.iter().position(|doc| filter.matches(doc)) {
            Some(index) => {
                docs.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    pub async fn delete_many(&self, collection: &str, filter: &Filter) -> Result<u64, StoreError> {
        self.check_writable(collection).await?;

        let mut collections = self.collections.write().await;
        let Some(docs) = collections.get_mut(collection) else {
            return Ok(0);
        };
        let before = docs.len();
        docs.retain(|doc| !filter.matches(doc));
        Ok((before - docs.len()) as u64)
    }
}

/// Whether `candidate` collides on a unique key with any document other
/// than the one at `skip`.
fn violates_unique(
    collection: &str,
    docs: &[Document],
    candidate: &Document,
    skip: Option<usize>,
) -> bool {
    UNIQUE_KEYS
        .iter()
        .filter(|(name, _)| *name == collection)
        .any(|(_, field)| {
            let Some(value) = candidate.get(*field) else {
                return false;
            };
            docs.iter()
                .enumerate()
                .filter(|(index, _)| Some(*index) != skip)
                .any(|(_, doc)| doc.get(*field) == Some(value))
        })
}
