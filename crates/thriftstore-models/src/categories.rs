use serde::Deserialize;
use serde_json::Value;
use thriftstore_db::{Document, ID_FIELD};
use validator::Validate;

/// Sentinel category id that lists products of every category.
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryDto {
    #[validate(length(min = 1, message = "categoryName is required"))]
    pub category_name: String,
    #[serde(flatten)]
    pub extra: Document,
}

impl CreateCategoryDto {
    pub fn into_document(self) -> Document {
        let mut doc = self.extra;
        doc.remove(ID_FIELD);
        doc.insert("categoryName".into(), Value::String(self.category_name));
        doc.insert("createdAt".into(), Value::String(crate::timestamp()));
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_name_rejected() {
        let dto: CreateCategoryDto = serde_json::from_value(json!({"categoryName": ""})).unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_into_document() {
        let dto: CreateCategoryDto =
            serde_json::from_value(json!({"categoryName": "Jackets", "icon": "coat"})).unwrap();
        let doc = dto.into_document();
        assert_eq!(doc["categoryName"], json!("Jackets"));
        assert_eq!(doc["icon"], json!("coat"));
    }
}
