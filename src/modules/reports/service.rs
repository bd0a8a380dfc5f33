use thriftstore_config::ToggleSemantics;
use thriftstore_core::AppError;
use thriftstore_db::{Document, DocumentStore, Filter, UpdateOutcome};
use thriftstore_models::collections;
use tracing::instrument;

use crate::modules::set_field;

pub struct ReportService;

impl ReportService {
    #[instrument(skip(store))]
    pub async fn set_reported(
        store: &DocumentStore,
        toggle: ToggleSemantics,
        id: &str,
        requested: bool,
    ) -> Result<UpdateOutcome, AppError> {
        let outcome = store
            .collection(collections::PRODUCTS)
            .update_one(
                &Filter::by_id(id),
                &set_field("reported", toggle.resolve(requested)),
                true,
            )
            .await?;
        Ok(outcome)
    }

    #[instrument(skip(store))]
    pub async fn list_reported(store: &DocumentStore) -> Result<Vec<Document>, AppError> {
        let products = store
            .collection(collections::PRODUCTS)
            .find(&Filter::new().eq("reported", true))
            .await?;
        Ok(products)
    }

    #[instrument(skip(store))]
    pub async fn delete_product(store: &DocumentStore, id: &str) -> Result<u64, AppError> {
        let deleted = store
            .collection(collections::PRODUCTS)
            .delete_one(&Filter::by_id(id))
            .await?;
        Ok(deleted)
    }
}
