use axum::{
    Extension, Json,
    extract::{Path, State},
};
use thriftstore_core::AppError;
use thriftstore_db::Document;
use thriftstore_models::{
    Account, AdvertiseToggleDto, CreateProductDto, DeleteResponse, InsertResponse,
    MessageResponse, UpdateResponse,
};
use tracing::instrument;

use crate::modules::products::service::ProductService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// List a product for sale
///
/// Seller fields are taken from the caller's account.
#[utoipa::path(
    post,
    path = "/seller-product",
    responses(
        (status = 200, description = "Product created", body = InsertResponse),
        (status = 401, description = "Caller is not a seller", body = MessageResponse),
        (status = 422, description = "Invalid product")
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
#[instrument(skip(state, seller, dto))]
pub async fn add_product(
    State(state): State<AppState>,
    Extension(seller): Extension<Account>,
    ValidatedJson(dto): ValidatedJson<CreateProductDto>,
) -> Result<Json<InsertResponse>, AppError> {
    let id = ProductService::create(&state.store, &seller, dto).await?;
    Ok(Json(InsertResponse::new(id)))
}

/// The caller's products
#[utoipa::path(
    get,
    path = "/seller-products",
    responses(
        (status = 200, description = "Products owned by the caller"),
        (status = 401, description = "Caller is not a seller", body = MessageResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
#[instrument(skip(state, seller))]
pub async fn get_seller_products(
    State(state): State<AppState>,
    Extension(seller): Extension<Account>,
) -> Result<Json<Vec<Document>>, AppError> {
    let products = ProductService::list_for_seller(&state.store, &seller.user_email).await?;
    Ok(Json(products))
}

/// Toggle the advertised flag
#[utoipa::path(
    put,
    path = "/seller-product/{id}",
    params(("id" = String, Path, description = "Product ID")),
    request_body = AdvertiseToggleDto,
    responses(
        (status = 200, description = "Update acknowledgement", body = UpdateResponse),
        (status = 403, description = "Product belongs to another seller")
    ),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
#[instrument(skip(state, seller))]
pub async fn advertise_product(
    State(state): State<AppState>,
    Extension(seller): Extension<Account>,
    Path(id): Path<String>,
    Json(dto): Json<AdvertiseToggleDto>,
) -> Result<Json<UpdateResponse>, AppError> {
    let outcome = ProductService::set_advertise(
        &state.store,
        state.toggle,
        &seller.user_email,
        &id,
        dto.advertise,
    )
    .await?;
    Ok(Json(outcome.into()))
}

/// Delete one of the caller's products
#[utoipa::path(
    delete,
    path = "/seller-product/{id}",
    params(("id" = String, Path, description = "Product ID")),
    responses((status = 200, description = "Delete acknowledgement", body = DeleteResponse)),
    security(("bearer_auth" = [])),
    tag = "Products"
)]
#[instrument(skip(state, seller))]
pub async fn delete_seller_product(
    State(state): State<AppState>,
    Extension(seller): Extension<Account>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    let deleted = ProductService::delete_for_seller(&state.store, &seller.user_email, &id).await?;
    Ok(Json(DeleteResponse::new(deleted)))
}

/// Advertised products that are still available
#[utoipa::path(
    get,
    path = "/advertised",
    responses((status = 200, description = "Advertised products")),
    tag = "Products"
)]
#[instrument(skip(state))]
pub async fn get_advertised(State(state): State<AppState>) -> Result<Json<Vec<Document>>, AppError> {
    let products = ProductService::advertised(&state.store).await?;
    Ok(Json(products))
}
