//! # Thrift Store DB
//!
//! The document store behind the Thrift Store API.
//!
//! Data is kept as JSON documents grouped in named collections. The
//! [`DocumentStore`] handle is constructed once at startup and injected into
//! request handlers; it is backed either by PostgreSQL (`JSONB` rows, see
//! `migrations/`) or by a process-local [`MemoryStore`].
//!
//! # Example
//!
//! ```ignore
//! use thriftstore_db::{DocumentStore, Filter};
//!
//! let store = DocumentStore::connect(&database_url, 10).await?;
//! let sellers = store
//!     .collection("users")
//!     .find(&Filter::new().eq("role", "seller"))
//!     .await?;
//! ```

pub mod document;
pub mod error;
pub mod memory;
pub mod postgres;
pub mod store;

pub use document::{Document, Filter, ID_FIELD, UpdateOutcome, from_document, to_document};
pub use error::StoreError;
pub use memory::MemoryStore;
pub use store::{Collection, DocumentStore};

// Re-export PgPool for convenience
pub use sqlx::PgPool;
