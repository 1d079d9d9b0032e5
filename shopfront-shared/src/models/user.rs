//! Accounts, roles and the auth request bodies.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::UserId;

/// Role of an account on the platform.
///
/// On the wire the role travels as the integer `userType` code.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub enum UserRole {
    /// Platform operator, code 1.
    Operator,
    /// Shop owner, code 2.
    Shop,
    /// Buyer, code 3.
    Customer,
}

/// A `userType` code with no matching [`UserRole`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown user type code {0}")]
pub struct UnknownRoleCode(pub u8);

impl UserRole {
    /// Integer code used by the backend.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Operator => 1,
            Self::Shop => 2,
            Self::Customer => 3,
        }
    }

    /// Display name of the role.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Operator => "Platform operator",
            Self::Shop => "Shop",
            Self::Customer => "Customer",
        }
    }
}

impl TryFrom<u8> for UserRole {
    type Error = UnknownRoleCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Operator),
            2 => Ok(Self::Shop),
            3 => Ok(Self::Customer),
            // 4 is the backend's visitor account type, which has no client role.
            other => Err(UnknownRoleCode(other)),
        }
    }
}

impl From<UserRole> for u8 {
    fn from(role: UserRole) -> Self {
        role.code()
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The authenticated account as reported by `/auth/current` and `/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier for the user.
    pub user_id: UserId,

    /// The user's login name.
    pub username: String,

    /// Role that gates which pages the user may open.
    #[serde(rename = "userType")]
    pub role: UserRole,
}

impl User {
    /// Signed in as a shop account.
    #[must_use]
    pub fn is_shop_user(&self) -> bool {
        self.role == UserRole::Shop
    }

    /// Signed in as a customer.
    #[must_use]
    pub fn is_customer(&self) -> bool {
        self.role == UserRole::Customer
    }

    /// Signed in as the platform operator.
    #[must_use]
    pub fn is_operator(&self) -> bool {
        self.role == UserRole::Operator
    }
}

/// Credentials for `/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// Login name.
    pub username: String,
    /// Plain password, sent over the session's HTTPS connection.
    pub password: String,
}

/// Account creation payload for `/auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    /// Requested login name.
    pub username: String,
    /// Initial password.
    pub password: String,
    /// Role of the new account.
    #[serde(rename = "userType")]
    pub role: UserRole,
}

/// Body for `/auth/change-password`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    /// Replacement password.
    pub new_password: String,
}

/// Body for `PUT /auth/profile`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileUpdate {
    /// New login name.
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn user_decodes_backend_shape() {
        let user: User = serde_json::from_value(json!({
            "userId": 7,
            "username": "alice",
            "userType": 3,
            "isDeleted": false
        }))
        .unwrap();

        assert_eq!(user.user_id, 7);
        assert_eq!(user.username, "alice");
        assert_eq!(user.role, UserRole::Customer);
        assert!(user.is_customer());
        assert!(!user.is_shop_user());
    }

    #[test]
    fn user_role_codes_roundtrip() {
        for (code, role) in [
            (1, UserRole::Operator),
            (2, UserRole::Shop),
            (3, UserRole::Customer),
        ] {
            assert_eq!(UserRole::try_from(code).unwrap(), role);
            assert_eq!(u8::from(role), code);
        }
    }

    #[test]
    fn visitor_role_code_is_rejected() {
        assert_eq!(UserRole::try_from(4), Err(UnknownRoleCode(4)));
        let decoded = serde_json::from_value::<User>(json!({
            "userId": 1,
            "username": "guest",
            "userType": 4
        }));
        assert!(decoded.is_err());
    }

    #[test]
    fn register_request_uses_user_type_field() {
        let request = RegisterRequest {
            username: "shopkeeper".to_string(),
            password: "secret".to_string(),
            role: UserRole::Shop,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({"username": "shopkeeper", "password": "secret", "userType": 2})
        );
    }

    #[test]
    fn change_password_is_camel_case() {
        let value = serde_json::to_value(ChangePasswordRequest {
            new_password: "n3w".to_string(),
        })
        .unwrap();
        assert_eq!(value, json!({"newPassword": "n3w"}));
    }
}
