use serde_json::Value;
use thriftstore_config::ToggleSemantics;
use thriftstore_core::AppError;
use thriftstore_db::{Document, DocumentStore, Filter, UpdateOutcome};
use thriftstore_models::{Account, CreateProductDto, SaleStatus, collections};
use tracing::instrument;

use crate::modules::categories::service::CategoryService;
use crate::modules::set_field;

pub struct ProductService;

impl ProductService {
    /// Lists a product for `seller`. Without a `categoryId` the product is
    /// attached to the category with its `categoryName`, when one exists.
    #[instrument(skip(store, seller, dto), fields(seller = %seller.user_email))]
    pub async fn create(
        store: &DocumentStore,
        seller: &Account,
        mut dto: CreateProductDto,
    ) -> Result<String, AppError> {
        if dto.category_id.is_none() {
            dto.category_id = CategoryService::id_for_name(store, &dto.category_name).await?;
        }

        let id = store
            .collection(collections::PRODUCTS)
            .insert_one(dto.into_document(seller))
            .await?;
        Ok(id)
    }

    #[instrument(skip(store))]
    pub async fn list_for_seller(
        store: &DocumentStore,
        seller_email: &str,
    ) -> Result<Vec<Document>, AppError> {
        let products = store
            .collection(collections::PRODUCTS)
            .find(&Filter::new().eq("sellerEmail", seller_email))
            .await?;
        Ok(products)
    }

    /// Stores the advertised flag resolved from the client's value.
    ///
    /// A product owned by someone else is refused. An unknown id is upserted
    /// as a stub owned by the caller.
    #[instrument(skip(store))]
    pub async fn set_advertise(
        store: &DocumentStore,
        toggle: ToggleSemantics,
        seller_email: &str,
        id: &str,
        requested: bool,
    ) -> Result<UpdateOutcome, AppError> {
        let products = store.collection(collections::PRODUCTS);

        if let Some(product) = products.find_one(&Filter::by_id(id)).await?
            && product.get("sellerEmail").and_then(Value::as_str) != Some(seller_email)
        {
            return Err(AppError::forbidden("product belongs to another seller"));
        }

        let outcome = products
            .update_one(
                &Filter::by_id(id).eq("sellerEmail", seller_email),
                &set_field("advertise", toggle.resolve(requested)),
                true,
            )
            .await?;
        Ok(outcome)
    }

    #[instrument(skip(store))]
    pub async fn delete_for_seller(
        store: &DocumentStore,
        seller_email: &str,
        id: &str,
    ) -> Result<u64, AppError> {
        let deleted = store
            .collection(collections::PRODUCTS)
            .delete_one(&Filter::by_id(id).eq("sellerEmail", seller_email))
            .await?;
        Ok(deleted)
    }

    #[instrument(skip(store))]
    pub async fn advertised(store: &DocumentStore) -> Result<Vec<Document>, AppError> {
        let products = store
            .collection(collections::PRODUCTS)
            .find(
                &Filter::new()
                    .eq("advertise", true)
                    .eq("saleStatus", SaleStatus::Available.as_str()),
            )
            .await?;
        Ok(products)
    }
}
