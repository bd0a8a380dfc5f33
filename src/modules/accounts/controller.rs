//! Account administration for admins, one route family per role.

use axum::{
    Json,
    extract::{Path, State},
};
use thriftstore_core::AppError;
use thriftstore_db::Document;
use thriftstore_models::{DeleteResponse, MessageResponse, Role, UpdateResponse, VerifyToggleDto};
use tracing::instrument;

use crate::modules::accounts::service::AccountService;
use crate::state::AppState;

/// All sellers
#[utoipa::path(
    get,
    path = "/all-sellers",
    responses(
        (status = 200, description = "Accounts with role seller"),
        (status = 401, description = "Caller is not an admin", body = MessageResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Accounts"
)]
#[instrument(skip(state))]
pub async fn get_all_sellers(State(state): State<AppState>) -> Result<Json<Vec<Document>>, AppError> {
    let sellers = AccountService::list_by_role(&state.store, Role::Seller).await?;
    Ok(Json(sellers))
}

/// Toggle a seller's verification
///
/// The new value is copied to `sellerVerified` on the seller's products.
#[utoipa::path(
    put,
    path = "/all-sellers/{id}",
    params(("id" = String, Path, description = "Account ID")),
    request_body = VerifyToggleDto,
    responses((status = 200, description = "Update acknowledgement for the account", body = UpdateResponse)),
    security(("bearer_auth" = [])),
    tag = "Accounts"
)]
#[instrument(skip(state))]
pub async fn verify_seller(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(dto): Json<VerifyToggleDto>,
) -> Result<Json<UpdateResponse>, AppError> {
    let outcome =
        AccountService::set_seller_verified(&state.store, state.toggle, &id, dto.is_verified)
            .await?;
    Ok(Json(outcome.into()))
}

#[utoipa::path(
    delete,
    path = "/all-sellers/{id}",
    params(("id" = String, Path, description = "Account ID")),
    responses((status = 200, description = "Delete acknowledgement", body = DeleteResponse)),
    security(("bearer_auth" = [])),
    tag = "Accounts"
)]
#[instrument(skip(state))]
pub async fn delete_seller(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    let deleted = AccountService::delete_with_role(&state.store, &id, Role::Seller).await?;
    Ok(Json(DeleteResponse::new(deleted)))
}

/// All buyers
#[utoipa::path(
    get,
    path = "/all-buyers",
    responses((status = 200, description = "Accounts with role buyer")),
    security(("bearer_auth" = [])),
    tag = "Accounts"
)]
#[instrument(skip(state))]
pub async fn get_all_buyers(State(state): State<AppState>) -> Result<Json<Vec<Document>>, AppError> {
    let buyers = AccountService::list_by_role(&state.store, Role::Buyer).await?;
    Ok(Json(buyers))
}

#[utoipa::path(
    delete,
    path = "/all-buyers/{id}",
    params(("id" = String, Path, description = "Account ID")),
    responses((status = 200, description = "Delete acknowledgement", body = DeleteResponse)),
    security(("bearer_auth" = [])),
    tag = "Accounts"
)]
#[instrument(skip(state))]
pub async fn delete_buyer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    let deleted = AccountService::delete_with_role(&state.store, &id, Role::Buyer).await?;
    Ok(Json(DeleteResponse::new(deleted)))
}

/// All admins
#[utoipa::path(
    get,
    path = "/all-admins",
    responses((status = 200, description = "Accounts with role admin")),
    security(("bearer_auth" = [])),
    tag = "Accounts"
)]
#[instrument(skip(state))]
pub async fn get_all_admins(State(state): State<AppState>) -> Result<Json<Vec<Document>>, AppError> {
    let admins = AccountService::list_by_role(&state.store, Role::Admin).await?;
    Ok(Json(admins))
}

#[utoipa::path(
    delete,
    path = "/all-admins/{id}",
    params(("id" = String, Path, description = "Account ID")),
    responses((status = 200, description = "Delete acknowledgement", body = DeleteResponse)),
    security(("bearer_auth" = [])),
    tag = "Accounts"
)]
#[instrument(skip(state))]
pub async fn delete_admin(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    let deleted = AccountService::delete_with_role(&state.store, &id, Role::Admin).await?;
    Ok(Json(DeleteResponse::new(deleted)))
}
