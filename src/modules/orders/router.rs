use axum::{Router, routing::get};

use crate::modules::orders::controller::{
    create_order, delete_order, get_order, get_ordered_products, get_orders,
};
use crate::state::AppState;

pub fn init_orders_router() -> Router<AppState> {
    Router::new()
        .route("/orders", get(get_orders).post(create_order))
        .route("/orders/{id}", get(get_order).delete(delete_order))
}

pub fn init_seller_orders_router() -> Router<AppState> {
    Router::new().route("/ordered-products", get(get_ordered_products))
}
