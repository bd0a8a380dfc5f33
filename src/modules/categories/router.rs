use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::modules::categories::controller::{
    create_category, delete_category, get_categories, get_category_products,
};
use crate::state::AppState;

pub fn init_categories_router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(get_categories))
        .route("/category/{id}", get(get_category_products))
}

pub fn init_categories_admin_router() -> Router<AppState> {
    Router::new()
        .route("/categories", post(create_category))
        .route("/categories/{id}", delete(delete_category))
}
