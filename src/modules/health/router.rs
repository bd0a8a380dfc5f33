use axum::{Router, routing::get};

use crate::modules::health::controller::root;
use crate::state::AppState;

pub fn init_health_router() -> Router<AppState> {
    Router::new().route("/", get(root))
}
