use serde::{Deserialize, Serialize};
use serde_json::Value;
use thriftstore_db::{Document, ID_FIELD};
use utoipa::ToSchema;
use validator::Validate;

/// Order lifecycle. Orders start `unpaid` and become `paid` with their
/// product when payment completes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Unpaid,
    Paid,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Unpaid => "unpaid",
            OrderStatus::Paid => "paid",
        }
    }
}

/// Booking request. The buyer is the authenticated account; product details
/// are copied from the stored product.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderDto {
    #[validate(length(min = 1, message = "productId is required"))]
    pub product_id: String,
    #[serde(default)]
    pub buyer_name: Option<String>,
    #[serde(flatten)]
    pub extra: Document,
}

impl CreateOrderDto {
    pub fn into_document(self, buyer_email: &str, product: &Document) -> Document {
        let mut doc = self.extra;
        doc.remove(ID_FIELD);
        let copy = |field: &str| product.get(field).cloned().unwrap_or(Value::Null);

        doc.insert("buyerEmail".into(), Value::String(buyer_email.to_string()));
        doc.insert(
            "buyerName".into(),
            Value::String(self.buyer_name.unwrap_or_else(|| buyer_email.to_string())),
        );
        doc.insert("productId".into(), Value::String(self.product_id));
        doc.insert("productName".into(), copy("productName"));
        doc.insert("sellerEmail".into(), copy("sellerEmail"));
        doc.insert("price".into(), copy("price"));
        doc.insert(
            "saleStatus".into(),
            Value::String(OrderStatus::Unpaid.as_str().into()),
        );
        doc.insert("createdAt".into(), Value::String(crate::timestamp()));
        doc
    }
}
