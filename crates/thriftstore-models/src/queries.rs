use serde::Deserialize;
use utoipa::IntoParams;

/// `?email=` on account and order lookups.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct EmailQuery {
    pub email: String,
}

/// `?email=` on the public account lookup, where a missing email finds
/// nothing instead of failing.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct EmailLookupQuery {
    #[serde(default)]
    pub email: Option<String>,
}

/// `?categoryName=` on category deletion. Only consulted when the category
/// itself is already gone.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(rename_all = "camelCase")]
pub struct CategoryNameQuery {
    #[serde(default)]
    pub category_name: Option<String>,
}
