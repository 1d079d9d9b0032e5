//! Authentication bindings and the current-user seam.

use async_trait::async_trait;
use serde_json::Value;
use shared::models::{
    ApiResponse, ChangePasswordRequest, LoginRequest, ProfileUpdate, RegisterRequest, User,
    UserRole,
};
use thiserror::Error;

use super::client::ApiClient;
use super::transport::{ApiRequest, Transport};

/// Why no current user could be established.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The backend (or the adapter, for network failures) reported a failure.
    #[error("not signed in: {0}")]
    Rejected(String),
    /// The backend answered success without a well-formed user.
    #[error("current user response was malformed")]
    MalformedUser,
}

/// Source of the signed-in user, asked afresh on every call.
#[async_trait(?Send)]
pub trait CurrentUserSource {
    /// The user the backend currently considers signed in.
    ///
    /// # Errors
    /// [`AuthError::Rejected`] when there is no session or the lookup failed,
    /// [`AuthError::MalformedUser`] when the answer is not a usable user.
    async fn current_user(&self) -> Result<User, AuthError>;
}

impl<T: Transport> ApiClient<T> {
    /// Authenticate with username/password; the backend answers with the user.
    pub async fn login(&self, username: &str, password: &str) -> ApiResponse<User> {
        let payload = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        self.send_json(ApiRequest::post("/auth/login"), &payload)
            .await
    }

    /// Create an account.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        role: UserRole,
    ) -> ApiResponse<Value> {
        let payload = RegisterRequest {
            username: username.to_string(),
            password: password.to_string(),
            role,
        };
        self.send_json(ApiRequest::post("/auth/register"), &payload)
            .await
    }

    /// Terminate the current session.
    pub async fn logout(&self) -> ApiResponse<Value> {
        self.send(ApiRequest::post("/auth/logout")).await
    }

    /// Raw envelope from `/auth/current`.
    pub async fn get_current_user(&self) -> ApiResponse<Value> {
        self.send(ApiRequest::get("/auth/current")).await
    }

    /// Change the signed-in user's password.
    pub async fn change_password(&self, new_password: &str) -> ApiResponse<Value> {
        let payload = ChangePasswordRequest {
            new_password: new_password.to_string(),
        };
        self.send_json(ApiRequest::post("/auth/change-password"), &payload)
            .await
    }

    /// Rename the signed-in user.
    pub async fn update_profile(&self, username: &str) -> ApiResponse<Value> {
        let payload = ProfileUpdate {
            username: username.to_string(),
        };
        self.send_json(ApiRequest::put("/auth/profile"), &payload)
            .await
    }
}

#[async_trait(?Send)]
impl<T: Transport> CurrentUserSource for ApiClient<T> {
    async fn current_user(&self) -> Result<User, AuthError> {
        let response = self.get_current_user().await;
        if !response.success {
            return Err(AuthError::Rejected(response.message_or("Not signed in")));
        }
        match response.data {
            Some(value @ Value::Object(_)) => serde_json::from_value(value).map_err(|err| {
                log::warn!("ignoring malformed current user: {err}");
                AuthError::MalformedUser
            }),
            _ => Err(AuthError::MalformedUser),
        }
    }
}
