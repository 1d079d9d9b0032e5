//! Transient success and error messages.

use shared::models::ApiResponse;

/// Whether a notice reports success or failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// The action went through.
    Success,
    /// The action failed.
    Error,
}

impl NoticeKind {
    /// Classes for the toast element.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Success => "notice notice-success",
            Self::Error => "notice notice-error",
        }
    }
}

/// A transient message shown to the user after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Success or error.
    pub kind: NoticeKind,
    /// Message shown to the user.
    pub text: String,
}

impl Notice {
    /// A success notice.
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    /// An error notice.
    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }

    /// `success_text` on success, otherwise the backend message or `fallback`.
    #[must_use]
    pub fn from_response<T>(response: &ApiResponse<T>, success_text: &str, fallback: &str) -> Self {
        if response.success {
            Self::success(success_text)
        } else {
            Self::error(response.message_or(fallback))
        }
    }
}
