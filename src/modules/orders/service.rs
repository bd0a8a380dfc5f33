use serde_json::Value;
use thriftstore_core::AppError;
use thriftstore_db::{Document, DocumentStore, Filter};
use thriftstore_models::{CreateOrderDto, SaleStatus, collections};
use tracing::instrument;

pub struct OrderService;

impl OrderService {
    /// Books a product for `buyer_email`. Product details on the order are
    /// copied from the stored product.
    #[instrument(skip(store, dto), fields(product_id = %dto.product_id))]
    pub async fn create(
        store: &DocumentStore,
        buyer_email: &str,
        dto: CreateOrderDto,
    ) -> Result<String, AppError> {
        let product = store
            .collection(collections::PRODUCTS)
            .find_one(&Filter::by_id(dto.product_id.as_str()))
            .await?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Product not found")))?;

        if product.get("saleStatus").and_then(Value::as_str) == Some(SaleStatus::Paid.as_str()) {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Product has already been sold"
            )));
        }

        let id = store
            .collection(collections::ORDERS)
            .insert_one(dto.into_document(buyer_email, &product))
            .await?;
        Ok(id)
    }

    #[instrument(skip(store))]
    pub async fn list_for_buyer(
        store: &DocumentStore,
        buyer_email: &str,
    ) -> Result<Vec<Document>, AppError> {
        let orders = store
            .collection(collections::ORDERS)
            .find(&Filter::new().eq("buyerEmail", buyer_email))
            .await?;
        Ok(orders)
    }

    #[instrument(skip(store))]
    pub async fn find(store: &DocumentStore, id: &str) -> Result<Option<Document>, AppError> {
        let order = store
            .collection(collections::ORDERS)
            .find_one(&Filter::by_id(id))
            .await?;
        Ok(order)
    }

    #[instrument(skip(store))]
    pub async fn delete(store: &DocumentStore, id: &str) -> Result<u64, AppError> {
        let deleted = store
            .collection(collections::ORDERS)
            .delete_one(&Filter::by_id(id))
            .await?;
        Ok(deleted)
    }

    /// Orders placed on products sold by `seller_email`.
    #[instrument(skip(store))]
    pub async fn list_for_seller(
        store: &DocumentStore,
        seller_email: &str,
    ) -> Result<Vec<Document>, AppError> {
        let orders = store
            .collection(collections::ORDERS)
            .find(&Filter::new().eq("sellerEmail", seller_email))
            .await?;
        Ok(orders)
    }
}
