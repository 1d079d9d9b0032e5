//! The wire seam: outgoing requests, raw responses and the reqwest transport.

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Body attached to an outgoing request.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// No body.
    Empty,
    /// A JSON document.
    Json(Value),
    /// A multipart image upload.
    Image(ImageUpload),
}

/// An image sent as the multipart `file` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    /// Original file name, kept for the extension.
    pub file_name: String,
    /// File contents.
    pub bytes: Vec<u8>,
}

/// A request relative to the API base path.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP verb.
    pub method: Method,
    /// Path below the API base, with a leading `/`.
    pub path: String,
    /// Query-string pairs.
    pub query: Vec<(String, String)>,
    /// Attached body.
    pub body: RequestBody,
}

impl ApiRequest {
    /// A request without query or body.
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: RequestBody::Empty,
        }
    }

    /// A `GET` request.
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// A `POST` request.
    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// A `PUT` request.
    #[must_use]
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// A `DELETE` request.
    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Replace the query-string pairs.
    #[must_use]
    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    /// Replace the body.
    #[must_use]
    pub fn with_body(mut self, body: RequestBody) -> Self {
        self.body = body;
        self
    }
}

/// What came back over the wire, before envelope normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Decoded JSON, or the raw text as a string value; `None` when empty.
    pub body: Option<Value>,
}

impl RawResponse {
    /// A 2xx status.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A request that never produced a response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// No answer within the configured timeout.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    /// Connection, TLS or body read failure.
    #[error("network error: {0}")]
    Network(String),
}

/// Executes API requests. Futures are not `Send`: the client runs on the
/// browser event loop.
#[async_trait(?Send)]
pub trait Transport {
    /// Send `request` and return whatever status and body came back.
    ///
    /// # Errors
    /// [`TransportError`] when no response was received.
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, TransportError>;
}

/// reqwest-backed transport that always sends the session cookie.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    base_url: String,
    client: Client,
    timeout: Duration,
}

impl HttpTransport {
    /// A transport rooted at `base_url` that gives up after `timeout`.
    #[must_use]
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self {
            base_url: absolute_base(base_url.trim_end_matches('/')),
            client: build_client(timeout),
            timeout,
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn build(&self, request: ApiRequest) -> RequestBuilder {
        let mut builder = self
            .client
            .request(request.method, self.api_url(&request.path));
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(payload) => builder.json(&payload),
            RequestBody::Image(upload) => builder.multipart(image_form(upload)),
        };
        with_credentials(builder)
    }

    #[cfg(target_arch = "wasm32")]
    async fn send_with_timeout(&self, builder: RequestBuilder) -> Result<Response, TransportError> {
        use futures::future::{Either, select};
        use gloo_timers::future::TimeoutFuture;

        let millis = u32::try_from(self.timeout.as_millis()).unwrap_or(u32::MAX);
        match select(Box::pin(builder.send()), Box::pin(TimeoutFuture::new(millis))).await {
            Either::Left((result, _)) => result.map_err(|err| TransportError::Network(err.to_string())),
            Either::Right(((), _)) => Err(TransportError::Timeout(self.timeout)),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn send_with_timeout(&self, builder: RequestBuilder) -> Result<Response, TransportError> {
        builder.send().await.map_err(|err| {
            if err.is_timeout() {
                TransportError::Timeout(self.timeout)
            } else {
                TransportError::Network(err.to_string())
            }
        })
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
        let response = self.send_with_timeout(self.build(request)).await?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|err| TransportError::Network(err.to_string()))?;
        Ok(RawResponse {
            status,
            body: parse_body(&text),
        })
    }
}

/// Decode a response body, keeping non-JSON text as a string value.
pub(crate) fn parse_body(text: &str) -> Option<Value> {
    if text.trim().is_empty() {
        return None;
    }
    Some(serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string())))
}

fn image_form(upload: ImageUpload) -> reqwest::multipart::Form {
    let part = reqwest::multipart::Part::bytes(upload.bytes).file_name(upload.file_name);
    reqwest::multipart::Form::new().part("file", part)
}

/// reqwest only accepts absolute URLs; a rooted base path resolves against the page origin.
#[cfg(target_arch = "wasm32")]
fn absolute_base(base_url: &str) -> String {
    if !base_url.starts_with('/') {
        return base_url.to_string();
    }
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .map_or_else(|| base_url.to_string(), |origin| format!("{origin}{base_url}"))
}

#[cfg(not(target_arch = "wasm32"))]
fn absolute_base(base_url: &str) -> String {
    base_url.to_string()
}

#[cfg(target_arch = "wasm32")]
fn build_client(_timeout: Duration) -> Client {
    Client::new()
}

#[cfg(not(target_arch = "wasm32"))]
fn build_client(timeout: Duration) -> Client {
    Client::builder()
        .cookie_store(true)
        .timeout(timeout)
        .build()
        .unwrap_or_else(|err| {
            log::warn!("falling back to default HTTP client: {err}");
            Client::new()
        })
}

#[cfg(target_arch = "wasm32")]
fn with_credentials(builder: RequestBuilder) -> RequestBuilder {
    builder.fetch_credentials_include()
}

#[cfg(not(target_arch = "wasm32"))]
fn with_credentials(builder: RequestBuilder) -> RequestBuilder {
    // The cookie jar on the client carries the session.
    builder
}
