use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use thriftstore_core::AppError;
use thriftstore_models::{
    AccountLookupResponse, DeleteResponse, EmailLookupQuery, EmailQuery, MessageResponse, RegisterAccountDto,
    RegisterResponse, UpdateResponse,
};
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Register an account
///
/// Extra fields in the body are stored with the account.
#[utoipa::path(
    post,
    path = "/users",
    responses(
        (status = 200, description = "Account created, or rejected as a duplicate", body = RegisterResponse),
        (status = 422, description = "Invalid or missing userEmail")
    ),
    tag = "Users"
)]
#[instrument(skip(state, dto))]
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterAccountDto>,
) -> Result<Json<RegisterResponse>, AppError> {
    let response = UserService::register(&state.store, dto).await?;
    Ok(Json(response))
}

/// Look up an account by email
#[utoipa::path(
    get,
    path = "/users",
    params(EmailLookupQuery),
    responses(
        (status = 200, description = "The account, or null", body = AccountLookupResponse)
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_user_by_email(
    State(state): State<AppState>,
    Query(query): Query<EmailLookupQuery>,
) -> Result<Json<AccountLookupResponse>, AppError> {
    let Some(email) = query.email else {
        return Ok(Json(AccountLookupResponse { result: None }));
    };
    let result = UserService::find_by_email(&state.store, &email).await?;
    Ok(Json(AccountLookupResponse { result }))
}

/// Grant the admin role
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = String, Path, description = "Account ID")),
    responses(
        (status = 200, description = "Update acknowledgement", body = UpdateResponse),
        (status = 401, description = "Caller is not an admin", body = MessageResponse),
        (status = 403, description = "Missing token", body = MessageResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn promote_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UpdateResponse>, AppError> {
    let outcome = UserService::promote_to_admin(&state.store, &id).await?;
    Ok(Json(outcome.into()))
}

/// Delete an account by email
#[utoipa::path(
    delete,
    path = "/users",
    params(EmailQuery),
    responses((status = 200, description = "Delete acknowledgement", body = DeleteResponse)),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<DeleteResponse>, AppError> {
    let deleted = UserService::delete_by_email(&state.store, &query.email).await?;
    Ok(Json(DeleteResponse::new(deleted)))
}

/// The caller's own account
#[utoipa::path(
    get,
    path = "/usersType",
    params(EmailQuery),
    responses(
        (status = 200, description = "The caller's account, or null"),
        (status = 403, description = "Email does not match the token", body = MessageResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state, auth_user))]
pub async fn get_users_type(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(query): Query<EmailQuery>,
) -> Result<Response, AppError> {
    if let Err(rejection) = auth_user.ensure_owner(&query.email) {
        return Ok(rejection.into_response());
    }

    let account = UserService::find_by_email(&state.store, &query.email).await?;
    Ok(Json(account).into_response())
}
