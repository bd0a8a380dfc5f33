use axum::http::{HeaderValue, Method, header};
use axum::{Router, middleware};
use thriftstore_config::CorsConfig;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::middleware::auth::verify_jwt;
use crate::middleware::role::{require_admin, require_seller};
use crate::modules::accounts::router::init_accounts_router;
use crate::modules::auth::router::init_auth_router;
use crate::modules::categories::router::{init_categories_admin_router, init_categories_router};
use crate::modules::health::router::init_health_router;
use crate::modules::orders::router::{init_orders_router, init_seller_orders_router};
use crate::modules::payments::router::init_payments_router;
use crate::modules::products::router::{init_products_router, init_seller_products_router};
use crate::modules::reports::router::{init_reports_admin_router, init_reports_router};
use crate::modules::users::router::{
    init_users_admin_router, init_users_router, init_users_verified_router,
};
use crate::state::AppState;

/// Who may call a route group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    /// Any caller with a valid token.
    Verified,
    Admin,
    Seller,
}

/// Wraps every route in `routes` with the interceptor chain for `access`.
///
/// Layers added later run first, so the token check is added last and the
/// role check only ever sees verified callers.
pub fn guard(routes: Router<AppState>, access: Access, state: &AppState) -> Router<AppState> {
    let verify = middleware::from_fn_with_state(state.clone(), verify_jwt);

    match access {
        Access::Public => routes,
        Access::Verified => routes.route_layer(verify),
        Access::Admin => routes
            .route_layer(middleware::from_fn_with_state(state.clone(), require_admin))
            .route_layer(verify),
        Access::Seller => routes
            .route_layer(middleware::from_fn_with_state(state.clone(), require_seller))
            .route_layer(verify),
    }
}

pub fn init_router(state: AppState) -> Router {
    let public = Router::new()
        .merge(init_health_router())
        .merge(init_users_router())
        .merge(init_auth_router())
        .merge(init_categories_router())
        .merge(init_products_router())
        .merge(init_payments_router());

    let verified = Router::new()
        .merge(init_users_verified_router())
        .merge(init_orders_router())
        .merge(init_reports_router());

    let seller = Router::new()
        .merge(init_seller_products_router())
        .merge(init_seller_orders_router());

    let admin = Router::new()
        .merge(init_users_admin_router())
        .merge(init_categories_admin_router())
        .merge(init_accounts_router())
        .merge(init_reports_admin_router());

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(guard(public, Access::Public, &state))
        .merge(guard(verified, Access::Verified, &state))
        .merge(guard(seller, Access::Seller, &state))
        .merge(guard(admin, Access::Admin, &state))
        .with_state(state.clone())
        .layer(cors_layer(&state.cors_config))
        .layer(middleware::from_fn(logging_middleware))
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let methods = [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ];
    let headers = [header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT];

    // Credentials cannot be combined with a wildcard origin.
    if config.allows_any_origin() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(headers);
    }

    let allowed_origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(methods)
        .allow_headers(headers)
        .allow_credentials(true)
}
