//! Request interceptors.
//!
//! Protected routes run an ordered chain before their handler:
//!
//! 1. [`auth::verify_jwt`] checks the bearer token and stores the caller's
//!    [`auth::AuthUser`] in the request extensions
//! 2. [`role::require_admin`] or [`role::require_seller`] loads the caller's
//!    account and compares its role, storing the [`Account`] on success
//!
//! Each step either continues with `next.run(req)` or answers the request
//! itself. The chains are assembled by [`crate::router::guard`].
//!
//! [`Account`]: thriftstore_models::Account

pub mod auth;
pub mod role;
