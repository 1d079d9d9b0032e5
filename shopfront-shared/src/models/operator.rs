//! Operator dashboard and account management models.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::User;

/// A named count in a top-N ranking, e.g. product name and units sold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    /// Product or shop name.
    pub name: String,
    /// Units sold or orders completed.
    pub count: u64,
}

/// Platform-wide figures shown on the operator dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    /// Registered accounts of every role.
    pub total_users: u64,
    /// Shops that are not deleted.
    pub total_shops: u64,
    /// Best sellers, highest first.
    #[serde(with = "ranking")]
    pub top_products: Vec<RankedEntry>,
    /// Shops by completed orders, highest first.
    #[serde(with = "ranking")]
    pub top_shops: Vec<RankedEntry>,
}

/// Accounts grouped the way the management page lists them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserDirectory {
    /// Shop accounts.
    #[serde(default)]
    pub shops: Vec<User>,
    /// Customer accounts.
    #[serde(default)]
    pub customers: Vec<User>,
}

/// Rankings arrive as an insertion-ordered JSON object `{name: count}`.
mod ranking {
    use super::{
        Deserializer, MapAccess, RankedEntry, SerializeMap, Serializer, Visitor, fmt,
    };

    pub fn serialize<S>(entries: &[RankedEntry], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for entry in entries {
            map.serialize_entry(&entry.name, &entry.count)?;
        }
        map.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<RankedEntry>, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RankingVisitor;

        impl<'de> Visitor<'de> for RankingVisitor {
            type Value = Vec<RankedEntry>;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("an object of name to count")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, count)) = access.next_entry::<String, u64>()? {
                    entries.push(RankedEntry { name, count });
                }
                Ok(entries)
            }
        }

        deserializer.deserialize_map(RankingVisitor)
    }
}
