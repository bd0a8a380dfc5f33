use serde_json::Value;
use thriftstore_core::AppError;
use thriftstore_db::{Document, DocumentStore, Filter, ID_FIELD};
use thriftstore_models::categories::ALL_CATEGORIES;
use thriftstore_models::{CascadeDeleteResponse, CreateCategoryDto, SaleStatus, collections};
use tracing::{error, instrument};

pub struct CategoryService;

impl CategoryService {
    #[instrument(skip(store, dto), fields(category = %dto.category_name))]
    pub async fn create(store: &DocumentStore, dto: CreateCategoryDto) -> Result<String, AppError> {
        let id = store
            .collection(collections::CATEGORIES)
            .insert_one(dto.into_document())
            .await?;
        Ok(id)
    }

    #[instrument(skip(store))]
    pub async fn list(store: &DocumentStore) -> Result<Vec<Document>, AppError> {
        let categories = store
            .collection(collections::CATEGORIES)
            .find(&Filter::new())
            .await?;
        Ok(categories)
    }

    /// Available products in a category, or in every category for
    /// [`ALL_CATEGORIES`].
    #[instrument(skip(store))]
    pub async fn available_products(
        store: &DocumentStore,
        category_id: &str,
    ) -> Result<Vec<Document>, AppError> {
        let mut filter = Filter::new().eq("saleStatus", SaleStatus::Available.as_str());
        if category_id != ALL_CATEGORIES {
            filter = filter.eq("categoryId", category_id);
        }

        let products = store.collection(collections::PRODUCTS).find(&filter).await?;
        Ok(products)
    }

    /// Deletes the category's products, then the category.
    ///
    /// Products are matched by the category id and by the stored category
    /// name. `category_name` is only used when the category no longer
    /// exists. The deletes are independent: if the last one fails the
    /// products stay deleted.
    #[instrument(skip(store))]
    pub async fn delete_with_products(
        store: &DocumentStore,
        id: &str,
        category_name: Option<&str>,
    ) -> Result<CascadeDeleteResponse, AppError> {
        let categories = store.collection(collections::CATEGORIES);
        let products = store.collection(collections::PRODUCTS);

        let stored_name = categories
            .find_one(&Filter::by_id(id))
            .await?
            .and_then(|category| {
                category
                    .get("categoryName")
                    .and_then(Value::as_str)
                    .map(str::to_owned)
            });

        let mut deleted_products = products
            .delete_many(&Filter::new().eq("categoryId", id))
            .await?;
        if let Some(name) = stored_name.as_deref().or(category_name) {
            deleted_products += products
                .delete_many(&Filter::new().eq("categoryName", name))
                .await?;
        }

        let deleted_count = categories
            .delete_one(&Filter::by_id(id))
            .await
            .map_err(|err| {
                error!(
                    category_id = %id,
                    deleted_products,
                    error = %err,
                    "Category delete failed after its products were removed"
                );
                err
            })?;

        Ok(CascadeDeleteResponse {
            acknowledged: true,
            deleted_products,
            deleted_count,
        })
    }

    /// The id of the category named `name`, if there is one.
    #[instrument(skip(store))]
    pub async fn id_for_name(store: &DocumentStore, name: &str) -> Result<Option<String>, AppError> {
        let id = store
            .collection(collections::CATEGORIES)
            .find_one(&Filter::new().eq("categoryName", name))
            .await?
            .and_then(|category| {
                category
                    .get(ID_FIELD)
                    .and_then(Value::as_str)
                    .map(str::to_owned)
            });
        Ok(id)
    }
}
