use axum::{Router, routing::get};

use crate::modules::auth::controller::issue_jwt;
use crate::state::AppState;

pub fn init_auth_router() -> Router<AppState> {
    Router::new().route("/jwt", get(issue_jwt))
}
