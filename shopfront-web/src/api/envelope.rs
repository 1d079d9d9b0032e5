//! Folds every transport outcome into the `{success, data, message}` envelope.

use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::models::ApiResponse;

use super::transport::{RawResponse, TransportError};

/// Message for transport failures and empty error bodies.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error, please try again";
/// Message for error bodies that carry no text.
pub const OPERATION_FAILED_MESSAGE: &str = "Operation failed";
/// Message for successful bodies of the wrong shape.
pub const UNEXPECTED_RESPONSE_MESSAGE: &str = "Unexpected response from server";

/// Normalize a raw outcome.
///
/// Bodies that already carry a `success` field pass through untouched (the
/// upload endpoint answers this way); plain 2xx bodies are wrapped as data.
#[must_use]
pub fn normalize(outcome: Result<RawResponse, TransportError>) -> ApiResponse<Value> {
    match outcome {
        Ok(raw) if raw.is_success() => normalize_success(raw.body),
        Ok(raw) => normalize_failure(raw.body),
        Err(_) => ApiResponse::failure(NETWORK_ERROR_MESSAGE),
    }
}

fn normalize_success(body: Option<Value>) -> ApiResponse<Value> {
    match body {
        Some(body) => existing_envelope(body).unwrap_or_else(ApiResponse::ok),
        None => ApiResponse::ok_empty(),
    }
}

fn normalize_failure(body: Option<Value>) -> ApiResponse<Value> {
    let Some(body) = body.filter(is_truthy) else {
        return ApiResponse::failure(NETWORK_ERROR_MESSAGE);
    };
    existing_envelope(body).unwrap_or_else(|body| ApiResponse::failure(failure_message(&body)))
}

/// Read a body as an envelope if it has a `success` field; hand it back otherwise.
fn existing_envelope(body: Value) -> Result<ApiResponse<Value>, Value> {
    match body {
        Value::Object(mut fields) if fields.contains_key("success") => {
            let success = fields.get("success").is_some_and(is_truthy);
            let data = fields.remove("data").filter(|data| !data.is_null());
            let message = fields.remove("message").and_then(message_text);
            Ok(ApiResponse {
                success,
                data,
                message,
            })
        }
        other => Err(other),
    }
}

fn failure_message(body: &Value) -> String {
    body.get("message")
        .and_then(Value::as_str)
        .or_else(|| body.as_str())
        .filter(|message| !message.trim().is_empty())
        .unwrap_or(OPERATION_FAILED_MESSAGE)
        .to_string()
}

fn message_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}

/// Loose truthiness of a JSON value, as the backend's envelopes use it.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n.abs() > 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Decode the payload of a successful envelope into `T`.
///
/// A payload of the wrong shape is treated as no answer at all.
pub fn decode<T: DeserializeOwned>(envelope: ApiResponse<Value>) -> ApiResponse<T> {
    let ApiResponse {
        success,
        data,
        message,
    } = envelope;
    if !success {
        return ApiResponse {
            success,
            data: None,
            message,
        };
    }
    match data.map(serde_json::from_value::<T>).transpose() {
        Ok(data) => ApiResponse {
            success,
            data,
            message,
        },
        Err(err) => {
            log::warn!("discarding malformed response payload: {err}");
            ApiResponse::failure(UNEXPECTED_RESPONSE_MESSAGE)
        }
    }
}
