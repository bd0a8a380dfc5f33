use axum::{
    Router,
    routing::{delete, get, put},
};

use crate::modules::reports::controller::{
    delete_reported_product, get_reported_products, report_product,
};
use crate::state::AppState;

pub fn init_reports_router() -> Router<AppState> {
    Router::new().route("/reported-products/{id}", put(report_product))
}

pub fn init_reports_admin_router() -> Router<AppState> {
    Router::new()
        .route("/reported-products", get(get_reported_products))
        .route("/reported-products/{id}", delete(delete_reported_product))
}
