//! Account domain models and DTOs.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thriftstore_db::{Document, ID_FIELD};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Role stored on an account.
///
/// Buyers are the default. Sellers may list products; admins moderate the
/// marketplace. The admin role is only granted by an existing admin or the
/// CLI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Buyer,
    Seller,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Buyer => "buyer",
            Role::Seller => "seller",
            Role::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The fields of a stored account the server relies on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_email: String,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub is_verified: bool,
}

impl Account {
    pub fn has_role(&self, role: Role) -> bool {
        self.role == role
    }

    /// Name shown on listings and orders, falling back to the email.
    pub fn display_name(&self) -> &str {
        self.user_name.as_deref().unwrap_or(&self.user_email)
    }
}

/// Registration payload.
///
/// Any additional fields (photo URL, phone number, ...) are stored with the
/// account as sent.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterAccountDto {
    #[validate(email(message = "userEmail must be a valid email address"))]
    pub user_email: String,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    #[validate(custom(function = "self_assignable"))]
    pub role: Role,
    #[serde(flatten)]
    pub extra: Document,
}

fn self_assignable(role: &Role) -> Result<(), ValidationError> {
    if *role == Role::Admin {
        return Err(ValidationError::new("role")
            .with_message("the admin role cannot be self-assigned".into()));
    }
    Ok(())
}

impl RegisterAccountDto {
    pub fn into_document(self) -> Document {
        let mut doc = self.extra;
        doc.remove(ID_FIELD);
        doc.insert("userEmail".into(), Value::String(self.user_email));
        if let Some(name) = self.user_name {
            doc.insert("userName".into(), Value::String(name));
        }
        doc.insert("role".into(), Value::String(self.role.as_str().into()));
        doc.insert("isVerified".into(), Value::Bool(false));
        doc.insert("createdAt".into(), Value::String(crate::timestamp()));
        doc
    }
}
