//! Payment intents and payment completion.
//!
//! Completion runs three independent writes in order: order, product,
//! payment record. An unknown order stops completion before anything else is
//! written. Nothing is undone when a later write fails; the failure is
//! logged with the steps that already succeeded.

use serde_json::Value;
use thriftstore_core::AppError;
use thriftstore_db::{DocumentStore, Filter};
use thriftstore_models::{
    CompletePaymentResponse, CreatePaymentDto, OrderStatus, PaymentIntentDto,
    PaymentIntentResponse, SaleStatus, collections,
};
use tracing::{error, info, instrument};

use crate::clients::StripeClient;
use crate::modules::set_field;

pub struct PaymentService;

impl PaymentService {
    #[instrument(skip(client))]
    pub async fn create_intent(
        client: &StripeClient,
        dto: PaymentIntentDto,
    ) -> Result<PaymentIntentResponse, AppError> {
        let intent = client
            .create_payment_intent(dto.amount_in_minor_units())
            .await
            .map_err(|err| {
                error!(error = %err, "Payment intent creation failed");
                AppError::bad_gateway(err)
            })?;

        info!(intent_id = %intent.id, currency = %client.currency(), "Payment intent created");
        Ok(PaymentIntentResponse {
            client_secret: intent.client_secret,
        })
    }

    #[instrument(
        skip(store, dto),
        fields(order_id = %dto.order_id, product_id = %dto.product_id)
    )]
    pub async fn complete(
        store: &DocumentStore,
        dto: CreatePaymentDto,
    ) -> Result<CompletePaymentResponse, AppError> {
        let order_id = dto.order_id.clone();
        let product_id = dto.product_id.clone();

        let mut order_update = set_field("saleStatus", OrderStatus::Paid.as_str());
        order_update.insert(
            "transactionId".into(),
            Value::String(dto.transaction_id.clone()),
        );

        let order = store
            .collection(collections::ORDERS)
            .update_one(&Filter::by_id(&order_id), &order_update, false)
            .await
            .map_err(|err| {
                error!(step = "order", completed = "none", error = %err, "Payment completion failed");
                err
            })?;

        if order.matched_count == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Order not found")));
        }

        let product = store
            .collection(collections::PRODUCTS)
            .update_one(
                &Filter::by_id(&product_id),
                &set_field("saleStatus", SaleStatus::Paid.as_str()),
                false,
            )
            .await
            .map_err(|err| {
                error!(step = "product", completed = "order", error = %err, "Payment completion failed");
                err
            })?;

        let inserted_id = store
            .collection(collections::PAYMENTS)
            .insert_one(dto.into_document())
            .await
            .map_err(|err| {
                error!(step = "payment", completed = "order,product", error = %err, "Payment completion failed");
                err
            })?;

        Ok(CompletePaymentResponse {
            acknowledged: true,
            inserted_id,
            order: order.into(),
            product: product.into(),
        })
    }
}
