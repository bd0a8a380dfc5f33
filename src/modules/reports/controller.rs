use axum::{
    Json,
    extract::{Path, State},
};
use thriftstore_core::AppError;
use thriftstore_db::Document;
use thriftstore_models::{DeleteResponse, MessageResponse, ReportToggleDto, UpdateResponse};
use tracing::instrument;

use crate::modules::reports::service::ReportService;
use crate::state::AppState;

/// Toggle a product's reported flag
#[utoipa::path(
    put,
    path = "/reported-products/{id}",
    params(("id" = String, Path, description = "Product ID")),
    request_body = ReportToggleDto,
    responses(
        (status = 200, description = "Update acknowledgement", body = UpdateResponse),
        (status = 401, description = "Invalid token", body = MessageResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Reports"
)]
#[instrument(skip(state))]
pub async fn report_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(dto): Json<ReportToggleDto>,
) -> Result<Json<UpdateResponse>, AppError> {
    let outcome = ReportService::set_reported(&state.store, state.toggle, &id, dto.reported).await?;
    Ok(Json(outcome.into()))
}

/// Reported products
#[utoipa::path(
    get,
    path = "/reported-products",
    responses(
        (status = 200, description = "Products flagged as reported"),
        (status = 401, description = "Caller is not an admin", body = MessageResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Reports"
)]
#[instrument(skip(state))]
pub async fn get_reported_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<Document>>, AppError> {
    let products = ReportService::list_reported(&state.store).await?;
    Ok(Json(products))
}

/// Remove a reported product
#[utoipa::path(
    delete,
    path = "/reported-products/{id}",
    params(("id" = String, Path, description = "Product ID")),
    responses((status = 200, description = "Delete acknowledgement", body = DeleteResponse)),
    security(("bearer_auth" = [])),
    tag = "Reports"
)]
#[instrument(skip(state))]
pub async fn delete_reported_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    let deleted = ReportService::delete_product(&state.store, &id).await?;
    Ok(Json(DeleteResponse::new(deleted)))
}
