use axum::{
    Json,
    extract::{FromRequestParts, Request, State},
    http::{StatusCode, header, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use thriftstore_auth::{Claims, verify_token};
use thriftstore_models::MessageResponse;

use crate::state::AppState;

/// Rejections produced by the interceptor chain.
///
/// Clients tell "log in again" (`401` on a bad token) apart from "not
/// allowed" by status and message, so the pairs below are part of the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// No `Authorization` header.
    Missing,
    /// Malformed, wrongly signed or expired token.
    InvalidToken,
    /// Verified caller without the required role, or without an account.
    RoleDenied,
    /// Verified caller asking for someone else's data.
    IdentityMismatch,
}

impl AuthError {
    pub fn status(self) -> StatusCode {
        match self {
            AuthError::Missing | AuthError::IdentityMismatch => StatusCode::FORBIDDEN,
            AuthError::InvalidToken | AuthError::RoleDenied => StatusCode::UNAUTHORIZED,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            AuthError::Missing | AuthError::InvalidToken => "unauthorized access",
            AuthError::RoleDenied | AuthError::IdentityMismatch => "forbidden access",
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = Json(MessageResponse {
            message: self.message().to_string(),
        });
        (self.status(), body).into_response()
    }
}

/// Verified identity of the caller.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn email(&self) -> &str {
        &self.0.email
    }

    /// Rejects unless `email` is the caller's own.
    pub fn ensure_owner(&self, email: &str) -> Result<(), AuthError> {
        if self.0.email == email {
            Ok(())
        } else {
            Err(AuthError::IdentityMismatch)
        }
    }
}

/// Reads the identity stored by [`verify_jwt`]. Only usable on routes behind
/// the gate.
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or(AuthError::Missing)
    }
}

/// The token is whatever follows the first space of the header value.
fn bearer_token(value: &str) -> Option<&str> {
    value
        .split_once(' ')
        .map(|(_, token)| token.trim())
        .filter(|token| !token.is_empty())
}

pub async fn verify_jwt(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let Some(header_value) = req.headers().get(header::AUTHORIZATION) else {
        return AuthError::Missing.into_response();
    };

    let Some(token) = header_value.to_str().ok().and_then(bearer_token) else {
        return AuthError::InvalidToken.into_response();
    };

    match verify_token(token, &state.jwt_config) {
        Ok(claims) => {
            req.extensions_mut().insert(AuthUser(claims));
            next.run(req).await
        }
        Err(err) => {
            tracing::debug!(error = %err.error, "Rejected bearer token");
            AuthError::InvalidToken.into_response()
        }
    }
}
