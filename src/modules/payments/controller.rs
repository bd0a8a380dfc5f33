use axum::{Json, extract::State};
use thriftstore_core::AppError;
use thriftstore_models::{
    CompletePaymentResponse, CreatePaymentDto, PaymentIntentDto, PaymentIntentResponse,
};
use tracing::instrument;

use crate::modules::payments::service::PaymentService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Create a payment intent for a price
#[utoipa::path(
    post,
    path = "/create-payment-intent",
    request_body = PaymentIntentDto,
    responses(
        (status = 200, description = "Client secret for the intent", body = PaymentIntentResponse),
        (status = 422, description = "Invalid price"),
        (status = 502, description = "Payment provider error")
    ),
    tag = "Payments"
)]
#[instrument(skip(state))]
pub async fn create_payment_intent(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<PaymentIntentDto>,
) -> Result<Json<PaymentIntentResponse>, AppError> {
    let response = PaymentService::create_intent(&state.payments, dto).await?;
    Ok(Json(response))
}

/// Record a completed payment
///
/// Marks the order and the product as paid, then stores the payment.
#[utoipa::path(
    post,
    path = "/payments",
    responses(
        (status = 200, description = "Payment recorded", body = CompletePaymentResponse),
        (status = 404, description = "Order not found; nothing was written"),
        (status = 422, description = "Invalid payment"),
        (status = 500, description = "A write failed; earlier writes are kept")
    ),
    tag = "Payments"
)]
#[instrument(skip(state, dto))]
pub async fn complete_payment(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreatePaymentDto>,
) -> Result<Json<CompletePaymentResponse>, AppError> {
    let response = PaymentService::complete(&state.store, dto).await?;
    Ok(Json(response))
}
