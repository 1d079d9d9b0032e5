//! Products, categories and catalogue filters.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{CategoryId, ProductId, ShopId};

/// A product listed by a shop.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Absent when submitting a new product.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<ProductId>,
    /// Owning shop; filled in by the backend for shop submissions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shop_id: Option<ShopId>,
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: Option<String>,
    /// Unit price.
    pub price: Decimal,
    /// Units available.
    #[serde(default)]
    pub stock: i32,
    /// Stored image reference, see `format::product_image_url` in the web crate.
    pub image_url: Option<String>,
    /// Listed for sale. Products missing the flag count as listed.
    #[serde(default = "on_sale_by_default")]
    pub is_on_sale: bool,
    /// Category the product is filed under.
    pub category_id: Option<CategoryId>,
}

const fn on_sale_by_default() -> bool {
    true
}

impl Product {
    /// Listed and with at least one unit left.
    #[must_use]
    pub fn in_stock(&self) -> bool {
        self.is_on_sale && self.stock > 0
    }
}

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Backend identifier.
    pub category_id: CategoryId,
    /// Display name.
    pub name: String,
    /// Position in the category list, ascending.
    #[serde(default)]
    pub sort_order: i32,
}

/// Filters accepted by the product listing endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuery {
    /// Name search.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    /// Restrict to one category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
}

impl ProductQuery {
    /// Search by name only.
    #[must_use]
    pub fn keyword(keyword: impl Into<String>) -> Self {
        Self {
            keyword: Some(keyword.into()),
            category_id: None,
        }
    }

    /// List one category only.
    #[must_use]
    pub fn category(category_id: CategoryId) -> Self {
        Self {
            keyword: None,
            category_id: Some(category_id),
        }
    }

    /// Query-string pairs, omitting unset and blank filters.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(keyword) = self.keyword.as_deref().map(str::trim)
            && !keyword.is_empty()
        {
            pairs.push(("keyword".to_string(), keyword.to_string()));
        }
        if let Some(category_id) = self.category_id {
            pairs.push(("categoryId".to_string(), category_id.to_string()));
        }
        pairs
    }
}
