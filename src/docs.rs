use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use thriftstore_models::{
    AccountLookupResponse, AdvertiseToggleDto, CascadeDeleteResponse, CompletePaymentResponse,
    DeleteResponse, InsertResponse, MessageResponse, OrderStatus, PaymentIntentDto,
    PaymentIntentResponse, RegisterResponse, ReportToggleDto, Role, SaleStatus, TokenResponse,
    UpdateResponse, VerifyToggleDto,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::health::controller::root,
        crate::modules::users::controller::register_user,
        crate::modules::users::controller::get_user_by_email,
        crate::modules::users::controller::promote_user,
        crate::modules::users::controller::delete_user,
        crate::modules::users::controller::get_users_type,
        crate::modules::auth::controller::issue_jwt,
        crate::modules::categories::controller::create_category,
        crate::modules::categories::controller::get_categories,
        crate::modules::categories::controller::get_category_products,
        crate::modules::categories::controller::delete_category,
        crate::modules::products::controller::add_product,
        crate::modules::products::controller::get_seller_products,
        crate::modules::products::controller::advertise_product,
        crate::modules::products::controller::delete_seller_product,
        crate::modules::products::controller::get_advertised,
        crate::modules::accounts::controller::get_all_sellers,
        crate::modules::accounts::controller::verify_seller,
        crate::modules::accounts::controller::delete_seller,
        crate::modules::accounts::controller::get_all_buyers,
        crate::modules::accounts::controller::delete_buyer,
        crate::modules::accounts::controller::get_all_admins,
        crate::modules::accounts::controller::delete_admin,
        crate::modules::orders::controller::create_order,
        crate::modules::orders::controller::get_orders,
        crate::modules::orders::controller::get_order,
        crate::modules::orders::controller::delete_order,
        crate::modules::orders::controller::get_ordered_products,
        crate::modules::reports::controller::report_product,
        crate::modules::reports::controller::get_reported_products,
        crate::modules::reports::controller::delete_reported_product,
        crate::modules::payments::controller::create_payment_intent,
        crate::modules::payments::controller::complete_payment,
    ),
    components(
        schemas(
            Role,
            SaleStatus,
            OrderStatus,
            AdvertiseToggleDto,
            ReportToggleDto,
            VerifyToggleDto,
            PaymentIntentDto,
            PaymentIntentResponse,
            InsertResponse,
            UpdateResponse,
            DeleteResponse,
            RegisterResponse,
            AccountLookupResponse,
            TokenResponse,
            CascadeDeleteResponse,
            CompletePaymentResponse,
            MessageResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Liveness"),
        (name = "Authentication", description = "Token issuance"),
        (name = "Users", description = "Registration and account lookup"),
        (name = "Categories", description = "Product categories"),
        (name = "Products", description = "Seller listings and advertised products"),
        (name = "Accounts", description = "Account administration by role"),
        (name = "Orders", description = "Buyer orders"),
        (name = "Reports", description = "Product moderation"),
        (name = "Payments", description = "Payment intents and completion")
    ),
    info(
        title = "Thrift Store API",
        version = "0.1.0",
        description = "Marketplace backend for second-hand goods: accounts, categories, listings, orders and payments.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
