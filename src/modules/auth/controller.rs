use axum::{
    Json,
    extract::{Query, State},
};
use thriftstore_core::AppError;
use thriftstore_models::{EmailQuery, TokenResponse};
use tracing::instrument;

use crate::modules::auth::service::AuthService;
use crate::state::AppState;

/// Issue an access token
#[utoipa::path(
    get,
    path = "/jwt",
    params(EmailQuery),
    responses(
        (status = 200, description = "Signed token", body = TokenResponse),
        (status = 403, description = "No account for this email")
    ),
    tag = "Authentication"
)]
#[instrument(skip(state))]
pub async fn issue_jwt(
    State(state): State<AppState>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<TokenResponse>, AppError> {
    let token = AuthService::issue_for_email(&state.store, &state.jwt_config, &query.email).await?;
    Ok(Json(TokenResponse { token }))
}
