use sqlx::PgPool;

use crate::document::{Document, Filter, UpdateOutcome};
use crate::error::StoreError;
use crate::memory::MemoryStore;
use crate::postgres;

/// Data-access handle shared by every request.
///
/// Cheap to clone: both variants are reference counted.
#[derive(Debug, Clone)]
pub enum DocumentStore {
    Postgres(PgPool),
    Memory(MemoryStore),
}

impl DocumentStore {
    /// Connects to PostgreSQL and applies pending migrations.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = postgres::connect(database_url, max_connections).await?;
        postgres::migrate(&pool).await?;
        Ok(Self::Postgres(pool))
    }

    pub fn in_memory() -> Self {
        Self::Memory(MemoryStore::new())
    }

    pub fn memory(&self) -> Option<&MemoryStore> {
        match self {
            Self::Memory(store) => Some(store),
            Self::Postgres(_) => None,
        }
    }

    pub fn collection<'a>(&'a self, name: &'a str) -> Collection<'a> {
        Collection { store: self, name }
    }
}

/// A named collection within a [`DocumentStore`].
#[derive(Debug, Clone, Copy)]
pub struct Collection<'a> {
    store: &'a DocumentStore,
    name: &'a str,
}

impl Collection<'_> {
    pub fn name(&self) -> &str {
        self.name
    }

    pub async fn find_one(&self, filter: &Filter) -> Result<Option<Document>, StoreError> {
        match self.store {
            DocumentStore::Postgres(pool) => postgres::find_one(pool, self.name, filter).await,
            DocumentStore::Memory(mem) => mem.find_one(self.name, filter).await,
        }
    }

    pub async fn find(&self, filter: &Filter) -> Result<Vec<Document>, StoreError> {
        match self.store {
            DocumentStore::Postgres(pool) => postgres::find(pool, self.name, filter).await,
            DocumentStore::Memory(mem) => mem.find(self.name, filter).await,
        }
    }

    /// Inserts `doc`, assigning an `_id` when it has none, and returns the id.
    pub async fn insert_one(&self, doc: Document) -> Result<String, StoreError> {
        match self.store {
            DocumentStore::Postgres(pool) => postgres::insert_one(pool, self.name, doc).await,
            DocumentStore::Memory(mem) => mem.insert_one(self.name, doc).await,
        }
    }

    /// Merges `set` into the first matching document. With `upsert`, a miss
    /// inserts the filter fields merged with `set`.
    pub async fn update_one(
        &self,
        filter: &Filter,
        set: &Document,
        upsert: bool,
    ) -> Result<UpdateOutcome, StoreError> {
        match self.store {
            DocumentStore::Postgres(pool) => {
                postgres::update_one(pool, self.name, filter, set, upsert).await
            }
            DocumentStore::Memory(mem) => mem.update_one(self.name, filter, set, upsert).await,
        }
    }

    pub async fn update_many(
        &self,
        filter: &Filter,
        set: &Document,
    ) -> Result<UpdateOutcome, StoreError> {
        match self.store {
            DocumentStore::Postgres(pool) => postgres::update_many(pool, self.name, filter, set).await,
            DocumentStore::Memory(mem) => mem.update_many(self.name, filter, set).await,
        }
    }

    pub async fn delete_one(&self, filter: &Filter) -> Result<u64, StoreError> {
        match self.store {
            DocumentStore::Postgres(pool) => postgres::delete_one(pool, self.name, filter).await,
            DocumentStore::Memory(mem) => mem.delete_one(self.name, filter).await,
        }
    }

    pub async fn delete_many(&self, filter: &Filter) -> Result<u64, StoreError> {
        match self.store {
            DocumentStore::Postgres(pool) => postgres::delete_many(pool, self.name, filter).await,
            DocumentStore::Memory(mem) => mem.delete_many(self.name, filter).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_collections_are_isolated() {
        let store = DocumentStore::in_memory();
        let doc = json!({"categoryName": "lamps"}).as_object().cloned().unwrap();

        store.collection("categories").insert_one(doc).await.unwrap();

        assert_eq!(store.collection("categories").find(&Filter::new()).await.unwrap().len(), 1);
        assert!(store.collection("products").find(&Filter::new()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_one_missing_is_none() {
        let store = DocumentStore::in_memory();
        let found = store
            .collection("users")
            .find_one(&Filter::new().eq("userEmail", "ghost@x.com"))
            .await
            .unwrap();
        assert!(found.is_none());
    }
}
