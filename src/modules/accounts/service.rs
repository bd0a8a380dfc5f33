use serde_json::Value;
use thriftstore_config::ToggleSemantics;
use thriftstore_core::AppError;
use thriftstore_db::{Document, DocumentStore, Filter, UpdateOutcome};
use thriftstore_models::{Role, collections};
use tracing::{debug, error, instrument};

use crate::modules::set_field;

pub struct AccountService;

impl AccountService {
    #[instrument(skip(store))]
    pub async fn list_by_role(store: &DocumentStore, role: Role) -> Result<Vec<Document>, AppError> {
        let accounts = store
            .collection(collections::USERS)
            .find(&Filter::new().eq("role", role.as_str()))
            .await?;
        Ok(accounts)
    }

    /// Stores the seller's verification flag, then copies it onto every
    /// product the seller owns. The second write is not rolled back with
    /// the first.
    #[instrument(skip(store))]
    pub async fn set_seller_verified(
        store: &DocumentStore,
        toggle: ToggleSemantics,
        id: &str,
        requested: bool,
    ) -> Result<UpdateOutcome, AppError> {
        let verified = toggle.resolve(requested);
        let users = store.collection(collections::USERS);

        let outcome = users
            .update_one(&Filter::by_id(id), &set_field("isVerified", verified), true)
            .await?;

        let seller_email = users
            .find_one(&Filter::by_id(id))
            .await?
            .and_then(|account| {
                account
                    .get("userEmail")
                    .and_then(Value::as_str)
                    .map(str::to_owned)
            });

        if let Some(email) = seller_email {
            let cascaded = store
                .collection(collections::PRODUCTS)
                .update_many(
                    &Filter::new().eq("sellerEmail", email.as_str()),
                    &set_field("sellerVerified", verified),
                )
                .await
                .map_err(|err| {
                    error!(
                        seller = %email,
                        error = %err,
                        "Seller verification stored but not copied to products"
                    );
                    err
                })?;
            debug!(seller = %email, products = cascaded.modified_count, "Copied verification to products");
        }

        Ok(outcome)
    }

    /// Deletes the account with `id` when it has `role`.
    #[instrument(skip(store))]
    pub async fn delete_with_role(
        store: &DocumentStore,
        id: &str,
        role: Role,
    ) -> Result<u64, AppError> {
        let deleted = store
            .collection(collections::USERS)
            .delete_one(&Filter::by_id(id).eq("role", role.as_str()))
            .await?;
        Ok(deleted)
    }
}
