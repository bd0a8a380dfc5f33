use thriftstore_auth::issue_token;
use thriftstore_config::JwtConfig;
use thriftstore_core::AppError;
use thriftstore_db::DocumentStore;
use tracing::instrument;

use crate::modules::users::service::UserService;

pub struct AuthService;

impl AuthService {
    /// Issues a token for a registered email.
    ///
    /// The caller's ownership of `email` is established by the client's
    /// identity provider before this is called; the server only refuses
    /// emails it has no account for.
    #[instrument(skip(store, jwt_config))]
    pub async fn issue_for_email(
        store: &DocumentStore,
        jwt_config: &JwtConfig,
        email: &str,
    ) -> Result<String, AppError> {
        if UserService::find_by_email(store, email).await?.is_none() {
            return Err(AppError::forbidden("no account is registered for this email"));
        }

        issue_token(email, jwt_config)
    }
}
