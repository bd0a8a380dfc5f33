use axum::{
    Router,
    routing::{get, post, put},
};

use crate::modules::products::controller::{
    add_product, advertise_product, delete_seller_product, get_advertised, get_seller_products,
};
use crate::state::AppState;

pub fn init_products_router() -> Router<AppState> {
    Router::new().route("/advertised", get(get_advertised))
}

pub fn init_seller_products_router() -> Router<AppState> {
    Router::new()
        .route("/seller-product", post(add_product))
        .route(
            "/seller-product/{id}",
            put(advertise_product).delete(delete_seller_product),
        )
        .route("/seller-products", get(get_seller_products))
}
