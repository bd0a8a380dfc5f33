use axum::{
    Json,
    extract::{Path, Query, State},
};
use thriftstore_core::AppError;
use thriftstore_db::Document;
use thriftstore_models::{
    CascadeDeleteResponse, CategoryNameQuery, CreateCategoryDto, InsertResponse, MessageResponse,
};
use tracing::instrument;

use crate::modules::categories::service::CategoryService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Create a category
#[utoipa::path(
    post,
    path = "/categories",
    responses(
        (status = 200, description = "Category created", body = InsertResponse),
        (status = 401, description = "Caller is not an admin", body = MessageResponse),
        (status = 422, description = "Missing categoryName")
    ),
    security(("bearer_auth" = [])),
    tag = "Categories"
)]
#[instrument(skip(state, dto))]
pub async fn create_category(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateCategoryDto>,
) -> Result<Json<InsertResponse>, AppError> {
    let id = CategoryService::create(&state.store, dto).await?;
    Ok(Json(InsertResponse::new(id)))
}

/// List categories
#[utoipa::path(
    get,
    path = "/categories",
    responses((status = 200, description = "All categories in insertion order")),
    tag = "Categories"
)]
#[instrument(skip(state))]
pub async fn get_categories(State(state): State<AppState>) -> Result<Json<Vec<Document>>, AppError> {
    let categories = CategoryService::list(&state.store).await?;
    Ok(Json(categories))
}

/// Available products in a category
///
/// The id `all` lists available products of every category.
#[utoipa::path(
    get,
    path = "/category/{id}",
    params(("id" = String, Path, description = "Category ID, or `all`")),
    responses((status = 200, description = "Available products")),
    tag = "Categories"
)]
#[instrument(skip(state))]
pub async fn get_category_products(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Document>>, AppError> {
    let products = CategoryService::available_products(&state.store, &id).await?;
    Ok(Json(products))
}

/// Delete a category and its products
#[utoipa::path(
    delete,
    path = "/categories/{id}",
    params(
        ("id" = String, Path, description = "Category ID"),
        CategoryNameQuery
    ),
    responses(
        (status = 200, description = "Deleted counts", body = CascadeDeleteResponse),
        (status = 401, description = "Caller is not an admin", body = MessageResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Categories"
)]
#[instrument(skip(state))]
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<CategoryNameQuery>,
) -> Result<Json<CascadeDeleteResponse>, AppError> {
    let response =
        CategoryService::delete_with_products(
        &state.store,
        &id,
        query.category_name.as_deref(),
    )
    .await?;
    Ok(Json(response))
}
