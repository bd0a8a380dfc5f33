//! Role checks for verified callers.
//!
//! Roles live on the account, not in the token, so every check reads the
//! account. A caller without an account never passes.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use thriftstore_models::Role;

use crate::middleware::auth::{AuthError, AuthUser};
use crate::modules::users::service::UserService;
use crate::state::AppState;

/// Continues only when the caller's account has `role`. The account is left
/// in the request extensions for the handler.
pub async fn require_role(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
    role: Role,
) -> Response {
    let Some(auth_user) = req.extensions().get::<AuthUser>().cloned() else {
        return AuthError::Missing.into_response();
    };

    match UserService::find_account(&state.store, auth_user.email()).await {
        Ok(Some(account)) if account.has_role(role) => {
            req.extensions_mut().insert(account);
            next.run(req).await
        }
        Ok(_) => AuthError::RoleDenied.into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn require_admin(State(state): State<AppState>, req: Request, next: Next) -> Response {
    require_role(State(state), req, next, Role::Admin).await
}

pub async fn require_seller(State(state): State<AppState>, req: Request, next: Next) -> Response {
    require_role(State(state), req, next, Role::Seller).await
}
