use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use thriftstore_db::{Document, ID_FIELD};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Copy, Deserialize, Validate, ToSchema)]
pub struct PaymentIntentDto {
    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub price: f64,
}

impl PaymentIntentDto {
    /// Amount in the currency's minor unit (cents).
    pub fn amount_in_minor_units(&self) -> i64 {
        (self.price * 100.0).round() as i64
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentResponse {
    pub client_secret: String,
}

/// A payment the client completed with the provider.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentDto {
    #[validate(length(min = 1, message = "orderId is required"))]
    pub order_id: String,
    #[validate(length(min = 1, message = "productId is required"))]
    pub product_id: String,
    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub price: f64,
    #[validate(length(min = 1, message = "transactionId is required"))]
    pub transaction_id: String,
    #[serde(flatten)]
    pub extra: Document,
}

impl CreatePaymentDto {
    pub fn into_document(self) -> Document {
        let mut doc = self.extra;
        doc.remove(ID_FIELD);
        doc.insert("orderId".into(), Value::String(self.order_id));
        doc.insert("productId".into(), Value::String(self.product_id));
        doc.insert("price".into(), json!(self.price));
        doc.insert("transactionId".into(), Value::String(self.transaction_id));
        doc.insert("createdAt".into(), Value::String(crate::timestamp()));
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_in_minor_units() {
        assert_eq!(PaymentIntentDto { price: 19.99 }.amount_in_minor_units(), 1999);
        assert_eq!(PaymentIntentDto { price: 0.0 }.amount_in_minor_units(), 0);
        assert_eq!(PaymentIntentDto { price: 12.0 }.amount_in_minor_units(), 1200);
    }

    #[test]
    fn test_payment_requires_transaction() {
        let dto: CreatePaymentDto = serde_json::from_value(json!({
            "orderId": "o1",
            "productId": "p1",
            "price": 10,
            "transactionId": ""
        }))
        .unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_payment_document_keeps_buyer_email() {
        let dto: CreatePaymentDto = serde_json::from_value(json!({
            "orderId": "o1",
            "productId": "p1",
            "price": 10,
            "transactionId": "pi_123",
            "buyerEmail": "bob@thrift.test"
        }))
        .unwrap();
        let doc = dto.into_document();
        assert_eq!(doc["transactionId"], json!("pi_123"));
        assert_eq!(doc["buyerEmail"], json!("bob@thrift.test"));
    }
}
