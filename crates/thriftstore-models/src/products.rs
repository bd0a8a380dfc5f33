//! Product listings and the flags sellers, buyers and admins flip on them.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use thriftstore_db::{Document, ID_FIELD};
use utoipa::ToSchema;
use validator::Validate;

use crate::accounts::Account;

/// Product lifecycle. A product becomes `paid` when a payment for an order
/// on it completes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SaleStatus {
    #[default]
    Available,
    Paid,
}

impl SaleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SaleStatus::Available => "available",
            SaleStatus::Paid => "paid",
        }
    }
}

/// New listing. Ownership comes from the authenticated seller, never from
/// the body.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductDto {
    #[validate(length(min = 1, message = "productName is required"))]
    pub product_name: String,
    #[serde(default)]
    pub category_id: Option<String>,
    #[validate(length(min = 1, message = "categoryName is required"))]
    pub category_name: String,
    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub price: f64,
    #[serde(flatten)]
    pub extra: Document,
}

impl CreateProductDto {
    pub fn into_document(self, seller: &Account) -> Document {
        let mut doc = self.extra;
        doc.remove(ID_FIELD);
        doc.insert("productName".into(), Value::String(self.product_name));
        if let Some(category_id) = self.category_id {
            doc.insert("categoryId".into(), Value::String(category_id));
        }
        doc.insert("categoryName".into(), Value::String(self.category_name));
        doc.insert("price".into(), json!(self.price));
        doc.insert("sellerEmail".into(), Value::String(seller.user_email.clone()));
        doc.insert(
            "sellerName".into(),
            Value::String(seller.display_name().to_string()),
        );
        doc.insert("sellerVerified".into(), Value::Bool(seller.is_verified));
        doc.insert(
            "saleStatus".into(),
            Value::String(SaleStatus::Available.as_str().into()),
        );
        doc.insert("advertise".into(), Value::Bool(false));
        doc.insert("reported".into(), Value::Bool(false));
        doc.insert("createdAt".into(), Value::String(crate::timestamp()));
        doc
    }
}

#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
pub struct AdvertiseToggleDto {
    pub advertise: bool,
}

#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
pub struct ReportToggleDto {
    pub reported: bool,
}

#[derive(Debug, Clone, Copy, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerifyToggleDto {
    pub is_verified: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::Role;

    fn seller() -> Account {
        Account {
            id: "s1".into(),
            user_email: "sara@thrift.test".into(),
            user_name: Some("Sara".into()),
            role: Role::Seller,
            is_verified: true,
        }
    }

    #[test]
    fn test_owner_fields_come_from_account() {
        let dto: CreateProductDto = serde_json::from_value(json!({
            "productName": "Denim jacket",
            "categoryName": "Jackets",
            "categoryId": "c1",
            "price": 25.5,
            "sellerEmail": "someone-else@thrift.test",
            "condition": "good"
        }))
        .unwrap();
        assert!(dto.validate().is_ok());

        let doc = dto.into_document(&seller());
        assert_eq!(doc["sellerEmail"], json!("sara@thrift.test"));
        assert_eq!(doc["sellerName"], json!("Sara"));
        assert_eq!(doc["sellerVerified"], json!(true));
        assert_eq!(doc["saleStatus"], json!("available"));
        assert_eq!(doc["advertise"], json!(false));
        assert_eq!(doc["reported"], json!(false));
        assert_eq!(doc["condition"], json!("good"));
        assert_eq!(doc["price"], json!(25.5));
    }

    #[test]
    fn test_negative_price_rejected() {
        let dto: CreateProductDto = serde_json::from_value(json!({
            "productName": "Hat",
            "categoryName": "Hats",
            "price": -1.0
        }))
        .unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_verify_toggle_field_name() {
        let dto: VerifyToggleDto = serde_json::from_value(json!({"isVerified": true})).unwrap();
        assert!(dto.is_verified);
    }
}
