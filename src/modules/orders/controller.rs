use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use thriftstore_core::AppError;
use thriftstore_models::{
    Account, CreateOrderDto, DeleteResponse, EmailQuery, InsertResponse, MessageResponse,
};
use tracing::instrument;

use crate::middleware::auth::{AuthError, AuthUser};
use crate::modules::orders::service::OrderService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Book a product
#[utoipa::path(
    post,
    path = "/orders",
    responses(
        (status = 200, description = "Order created", body = InsertResponse),
        (status = 400, description = "Product already sold"),
        (status = 404, description = "Product not found"),
        (status = 422, description = "Missing productId")
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
#[instrument(skip(state, auth_user, dto), fields(buyer = %auth_user.email()))]
pub async fn create_order(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateOrderDto>,
) -> Result<Json<InsertResponse>, AppError> {
    let id = OrderService::create(&state.store, auth_user.email(), dto).await?;
    Ok(Json(InsertResponse::new(id)))
}

/// The caller's orders
#[utoipa::path(
    get,
    path = "/orders",
    params(EmailQuery),
    responses(
        (status = 200, description = "Orders placed by the caller"),
        (status = 403, description = "Email does not match the token", body = MessageResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
#[instrument(skip(state, auth_user))]
pub async fn get_orders(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(query): Query<EmailQuery>,
) -> Result<Response, AppError> {
    if let Err(rejection) = auth_user.ensure_owner(&query.email) {
        return Ok(rejection.into_response());
    }

    let orders = OrderService::list_for_buyer(&state.store, &query.email).await?;
    Ok(Json(orders).into_response())
}

/// An order by id
#[utoipa::path(
    get,
    path = "/orders/{id}",
    params(("id" = String, Path, description = "Order ID")),
    responses((status = 200, description = "The order, or null")),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
#[instrument(skip(state))]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let order = OrderService::find(&state.store, &id).await?;
    Ok(Json(order).into_response())
}

#[utoipa::path(
    delete,
    path = "/orders/{id}",
    params(("id" = String, Path, description = "Order ID")),
    responses((status = 200, description = "Delete acknowledgement", body = DeleteResponse)),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
#[instrument(skip(state))]
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    let deleted = OrderService::delete(&state.store, &id).await?;
    Ok(Json(DeleteResponse::new(deleted)))
}

/// Orders on the caller's products
#[utoipa::path(
    get,
    path = "/ordered-products",
    params(EmailQuery),
    responses(
        (status = 200, description = "Orders for products sold by the caller"),
        (status = 401, description = "Caller is not a seller", body = MessageResponse),
        (status = 403, description = "Email does not match the token", body = MessageResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Orders"
)]
#[instrument(skip(state, seller))]
pub async fn get_ordered_products(
    State(state): State<AppState>,
    Extension(seller): Extension<Account>,
    Query(query): Query<EmailQuery>,
) -> Result<Response, AppError> {
    if seller.user_email != query.email {
        return Ok(AuthError::IdentityMismatch.into_response());
    }

    let orders = OrderService::list_for_seller(&state.store, &seller.user_email).await?;
    Ok(Json(orders).into_response())
}
