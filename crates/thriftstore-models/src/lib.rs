//! # Thrift Store Models
//!
//! Domain models and DTOs for the Thrift Store API.
//!
//! Stored entities are schemaless documents; the types here describe the
//! fields the server itself reads or writes. Request DTOs keep every field
//! they do not name in an `extra` map that is stored unchanged.
//!
//! # Modules
//!
//! - [`accounts`]: accounts, roles and registration
//! - [`categories`]: product categories
//! - [`products`]: product listings and their flags
//! - [`orders`]: buyer orders
//! - [`payments`]: payment intents and completed payments
//! - [`queries`]: query string parameters
//! - [`responses`]: write acknowledgements shared by every resource
//!
//! # Example
//!
//! ```ignore
//! use thriftstore_models::accounts::{RegisterAccountDto, Role};
//! use thriftstore_models::collections;
//!
//! let doc = dto.into_document();
//! store.collection(collections::USERS).insert_one(doc).await?;
//! ```

pub mod accounts;
pub mod categories;
pub mod orders;
pub mod payments;
pub mod products;
pub mod queries;
pub mod responses;

/// Collection names.
pub mod collections {
    pub const USERS: &str = "users";
    pub const CATEGORIES: &str = "categories";
    pub const PRODUCTS: &str = "products";
    pub const ORDERS: &str = "orders";
    pub const PAYMENTS: &str = "payments";
}

/// Current time in the format stored in `createdAt`.
pub fn timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}

pub use accounts::{Account, RegisterAccountDto, Role};
pub use categories::CreateCategoryDto;
pub use orders::{CreateOrderDto, OrderStatus};
pub use payments::{CreatePaymentDto, PaymentIntentDto, PaymentIntentResponse};
pub use products::{
    AdvertiseToggleDto, CreateProductDto, ReportToggleDto, SaleStatus, VerifyToggleDto,
};
pub use queries::{CategoryNameQuery, EmailLookupQuery, EmailQuery};
pub use responses::{
    AccountLookupResponse, CascadeDeleteResponse, CompletePaymentResponse, DeleteResponse,
    InsertResponse, MessageResponse, RegisterResponse, TokenResponse, UpdateResponse,
};
