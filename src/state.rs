use thriftstore_config::{
    ConfigError, CorsConfig, JwtConfig, PaymentConfig, StoreBackend, StoreConfig, ToggleSemantics,
};
use thriftstore_db::{DocumentStore, StoreError};

use crate::clients::StripeClient;

#[derive(Clone, Debug)]
pub struct AppState {
    pub store: DocumentStore,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub payments: StripeClient,
    pub toggle: ToggleSemantics,
}

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("document store error: {0}")]
    Store(#[from] StoreError),
}

pub async fn init_app_state() -> Result<AppState, StartupError> {
    let store_config = StoreConfig::from_env()?;
    let store = init_store(&store_config).await?;

    Ok(AppState {
        store,
        jwt_config: JwtConfig::from_env()?,
        cors_config: CorsConfig::from_env(),
        payments: StripeClient::new(PaymentConfig::from_env()),
        toggle: ToggleSemantics::from_env()?,
    })
}

async fn init_store(config: &StoreConfig) -> Result<DocumentStore, StartupError> {
    match (config.backend, config.database_url.as_deref()) {
        (StoreBackend::Postgres, Some(url)) => {
            Ok(DocumentStore::connect(url, config.max_connections).await?)
        }
        (StoreBackend::Postgres, None) => Err(ConfigError::Missing("DATABASE_URL").into()),
        (StoreBackend::Memory, _) => {
            tracing::warn!("Using the in-memory document store; data is lost on restart");
            Ok(DocumentStore::in_memory())
        }
    }
}
