//! # Thrift Store Core
//!
//! Foundational types shared by every Thrift Store crate.
//!
//! - [`errors`]: the application error type and its HTTP response conversion
//!
//! # Example
//!
//! ```ignore
//! use thriftstore_core::AppError;
//!
//! let error = AppError::not_found(anyhow::anyhow!("Product not found"));
//! ```

pub mod errors;

pub use errors::AppError;
