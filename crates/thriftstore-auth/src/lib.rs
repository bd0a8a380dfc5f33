//! # Thrift Store Auth
//!
//! Token claims and JWT utilities.
//!
//! - [`claims`]: the claim set embedded in every token
//! - [`jwt`]: token issuance and verification
//!
//! Tokens identify an account by email only. Roles are not embedded; they
//! are looked up per request so that promotions and demotions take effect
//! immediately.
//!
//! # Example
//!
//! ```ignore
//! use thriftstore_auth::{issue_token, verify_token};
//! use thriftstore_config::JwtConfig;
//!
//! let config = JwtConfig::from_env()?;
//! let token = issue_token("buyer@example.com", &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.email, "buyer@example.com");
//! ```

pub mod claims;
pub mod jwt;

pub use claims::Claims;
pub use jwt::{encode_claims, issue_token, verify_token};
