//! # Thrift Store Config
//!
//! Configuration types for the Thrift Store API, loaded from environment
//! variables (a `.env` file is honoured by the binaries through `dotenvy`).
//!
//! - [`jwt`]: token signing secret and lifetime
//! - [`cors`]: allowed origins
//! - [`payment`]: payment provider credentials and endpoint
//! - [`server`]: listen port
//! - [`store`]: document store backend and connection string
//! - [`toggle`]: how flag toggles interpret the client-supplied value
//!
//! # Example
//!
//! ```ignore
//! use thriftstore_config::{CorsConfig, JwtConfig, PaymentConfig};
//!
//! let jwt_config = JwtConfig::from_env()?;
//! let cors_config = CorsConfig::from_env();
//! let payment_config = PaymentConfig::from_env();
//! ```

pub mod cors;
pub mod error;
pub mod jwt;
pub mod payment;
pub mod server;
pub mod store;
pub mod toggle;

pub use cors::CorsConfig;
pub use error::ConfigError;
pub use jwt::JwtConfig;
pub use payment::PaymentConfig;
pub use server::ServerConfig;
pub use store::{StoreBackend, StoreConfig};
pub use toggle::ToggleSemantics;
