use axum::{
    Router,
    routing::{get, put},
};

use crate::modules::users::controller::{
    delete_user, get_user_by_email, get_users_type, promote_user, register_user,
};
use crate::state::AppState;

pub fn init_users_router() -> Router<AppState> {
    Router::new().route(
        "/users",
        get(get_user_by_email).post(register_user).delete(delete_user),
    )
}

pub fn init_users_verified_router() -> Router<AppState> {
    Router::new().route("/usersType", get(get_users_type))
}

pub fn init_users_admin_router() -> Router<AppState> {
    Router::new().route("/users/{id}", put(promote_user))
}
