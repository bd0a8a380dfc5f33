//! Response bodies.
//!
//! Write acknowledgements keep the shape document-database drivers return
//! (`insertedId`, `matchedCount`, ...) since existing clients read them.

use serde::Serialize;
use thriftstore_db::{Document, UpdateOutcome};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertResponse {
    pub acknowledged: bool,
    pub inserted_id: String,
}

impl InsertResponse {
    pub fn new(inserted_id: String) -> Self {
        Self {
            acknowledged: true,
            inserted_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResponse {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_id: Option<String>,
}

impl From<UpdateOutcome> for UpdateResponse {
    fn from(outcome: UpdateOutcome) -> Self {
        Self {
            acknowledged: true,
            matched_count: outcome.matched_count,
            modified_count: outcome.modified_count,
            upserted_id: outcome.upserted_id,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl DeleteResponse {
    pub fn new(deleted_count: u64) -> Self {
        Self {
            acknowledged: true,
            deleted_count,
        }
    }
}

/// Result of a registration attempt. A duplicate email is reported here
/// rather than as an HTTP error.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inserted_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RegisterResponse {
    pub fn created(inserted_id: String) -> Self {
        Self {
            success: true,
            inserted_id: Some(inserted_id),
            message: None,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            inserted_id: None,
            message: Some(message.into()),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AccountLookupResponse {
    #[schema(value_type = Option<Object>)]
    pub result: Option<Document>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
}

/// Counts from deleting a category together with its products.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CascadeDeleteResponse {
    pub acknowledged: bool,
    pub deleted_products: u64,
    pub deleted_count: u64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompletePaymentResponse {
    pub acknowledged: bool,
    pub inserted_id: String,
    pub order: UpdateResponse,
    pub product: UpdateResponse,
}

/// Body of authentication and authorization rejections.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
