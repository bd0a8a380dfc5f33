use axum::{
    Router,
    routing::{delete, get, put},
};

use crate::modules::accounts::controller::{
    delete_admin, delete_buyer, delete_seller, get_all_admins, get_all_buyers, get_all_sellers,
    verify_seller,
};
use crate::state::AppState;

pub fn init_accounts_router() -> Router<AppState> {
    Router::new()
        .route("/all-sellers", get(get_all_sellers))
        .route("/all-sellers/{id}", put(verify_seller).delete(delete_seller))
        .route("/all-buyers", get(get_all_buyers))
        .route("/all-buyers/{id}", delete(delete_buyer))
        .route("/all-admins", get(get_all_admins))
        .route("/all-admins/{id}", delete(delete_admin))
}
