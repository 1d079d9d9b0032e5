//! Shops and their deletion request.

use serde::{Deserialize, Serialize};

use super::{ShopId, UserId};

/// A seller storefront owned by a shop account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Shop {
    /// Absent until the backend has created the shop.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shop_id: Option<ShopId>,
    /// Display name.
    pub shop_name: String,
    /// Account that owns the shop.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    /// Soft-deletion flag set by the operator.
    #[serde(default)]
    pub is_deleted: bool,
}

/// Confirmation body for deleting a shop; the operator re-enters their password.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShopDeletion {
    /// The operator's current password.
    pub password: String,
}
