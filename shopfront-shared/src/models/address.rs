//! Delivery addresses.

use serde::{Deserialize, Serialize};

use super::{AddressId, UserId};

/// A saved delivery address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Absent until the backend has stored the address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_id: Option<AddressId>,
    /// Assigned by the backend from the session.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    /// Person the parcel is addressed to.
    pub receiver_name: String,
    /// Contact number for the courier.
    pub receiver_phone: String,
    /// Province line.
    pub province: String,
    /// City line.
    pub city: String,
    /// District line.
    pub district: String,
    /// Street, building and unit.
    pub detail_address: String,
}

impl Address {
    /// The address as a single line, in the order the backend prints it on orders.
    #[must_use]
    pub fn one_line(&self) -> String {
        [
            self.province.as_str(),
            self.city.as_str(),
            self.district.as_str(),
            self.detail_address.as_str(),
        ]
        .join(" ")
    }
}
