//! The response envelope shared by every endpoint.

use serde::{Deserialize, Serialize};

/// The uniform `{success, data, message}` result every client call resolves to.
///
/// Backend endpoints already answer in this shape; the web client's HTTP
/// adapter also synthesizes it for raw bodies and transport failures so
/// callers never branch on where a failure came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the operation succeeded.
    pub success: bool,
    /// Payload, when the operation has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable outcome, mostly set on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// A successful response carrying `data`.
    #[must_use]
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    /// A successful response with no payload.
    #[must_use]
    pub fn ok_empty() -> Self {
        Self {
            success: true,
            data: None,
            message: None,
        }
    }

    /// A failed response with `message` and no payload.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }

    /// The success flag.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.success
    }

    /// The payload of a successful response.
    #[must_use]
    pub fn into_data(self) -> Option<T> {
        if self.success { self.data } else { None }
    }

    /// The backend message, or `fallback` when none was sent.
    #[must_use]
    pub fn message_or(&self, fallback: &str) -> String {
        self.message
            .as_deref()
            .filter(|message| !message.is_empty())
            .unwrap_or(fallback)
            .to_string()
    }

    /// Convert the payload while keeping the success flag and message.
    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse {
            success: self.success,
            data: self.data.map(f),
            message: self.message,
        }
    }
}
