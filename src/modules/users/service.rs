use thriftstore_core::AppError;
use thriftstore_db::{Document, DocumentStore, Filter, UpdateOutcome, from_document};
use thriftstore_models::{Account, RegisterAccountDto, RegisterResponse, Role, collections};
use tracing::{instrument, warn};

use crate::modules::set_field;

pub const ALREADY_EXISTS: &str = "user already exists";

pub struct UserService;

impl UserService {
    /// Inserts a new account. An email that is already registered is
    /// reported in the response and the stored account is left untouched.
    #[instrument(skip(store, dto), fields(email = %dto.user_email))]
    pub async fn register(
        store: &DocumentStore,
        dto: RegisterAccountDto,
    ) -> Result<RegisterResponse, AppError> {
        let users = store.collection(collections::USERS);

        if Self::find_by_email(store, &dto.user_email).await?.is_some() {
            return Ok(RegisterResponse::rejected(ALREADY_EXISTS));
        }

        match users.insert_one(dto.into_document()).await {
            Ok(id) => Ok(RegisterResponse::created(id)),
            // Lost a race with a concurrent registration for the same email.
            Err(err) if err.is_duplicate() => Ok(RegisterResponse::rejected(ALREADY_EXISTS)),
            Err(err) => Err(err.into()),
        }
    }

    #[instrument(skip(store))]
    pub async fn find_by_email(
        store: &DocumentStore,
        email: &str,
    ) -> Result<Option<Document>, AppError> {
        let account = store
            .collection(collections::USERS)
            .find_one(&Filter::new().eq("userEmail", email))
            .await?;
        Ok(account)
    }

    /// Typed account lookup. A stored account that cannot be read (for
    /// example with an unknown role) is treated as absent.
    pub async fn find_account(
        store: &DocumentStore,
        email: &str,
    ) -> Result<Option<Account>, AppError> {
        let Some(doc) = Self::find_by_email(store, email).await? else {
            return Ok(None);
        };

        match from_document::<Account>(doc) {
            Ok(account) => Ok(Some(account)),
            Err(err) => {
                warn!(email = %email, error = %err, "Stored account is malformed");
                Ok(None)
            }
        }
    }

    #[instrument(skip(store))]
    pub async fn promote_to_admin(
        store: &DocumentStore,
        id: &str,
    ) -> Result<UpdateOutcome, AppError> {
        let outcome = store
            .collection(collections::USERS)
            .update_one(&Filter::by_id(id), &set_field("role", Role::Admin.as_str()), true)
            .await?;
        Ok(outcome)
    }

    #[instrument(skip(store))]
    pub async fn delete_by_email(store: &DocumentStore, email: &str) -> Result<u64, AppError> {
        let deleted = store
            .collection(collections::USERS)
            .delete_one(&Filter::new().eq("userEmail", email))
            .await?;
        Ok(deleted)
    }
}
