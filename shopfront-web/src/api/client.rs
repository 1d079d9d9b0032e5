//! The API client and its shared instance.

use once_cell::unsync::OnceCell;
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::models::ApiResponse;

use super::envelope::{OPERATION_FAILED_MESSAGE, decode, normalize};
use super::transport::{ApiRequest, HttpTransport, RequestBody, Transport};
use crate::config::FrontendConfig;

thread_local! {
    static SHARED_CLIENT: OnceCell<ApiClient> = const { OnceCell::new() };
}

/// Lightweight API client for the marketplace backend.
#[derive(Clone, Debug)]
pub struct ApiClient<T = HttpTransport> {
    transport: T,
}

impl ApiClient {
    /// Create a client against the configured base path.
    #[must_use]
    pub fn new(config: &FrontendConfig) -> Self {
        Self::with_transport(HttpTransport::new(
            config.api_base_url(),
            config.request_timeout,
        ))
    }

    /// The client instance shared by every component on this thread.
    #[must_use]
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::new(&FrontendConfig::default()))
                .clone()
        })
    }
}

impl<T: Transport> ApiClient<T> {
    /// A client over an arbitrary transport.
    #[must_use]
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// The underlying transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Execute a request and decode the envelope payload into `R`.
    pub async fn send<R: DeserializeOwned>(&self, request: ApiRequest) -> ApiResponse<R> {
        let label = format!("{} {}", request.method, request.path);
        log::debug!("{label}");
        let outcome = self.transport.execute(request).await;
        match &outcome {
            Ok(raw) if !raw.is_success() => log::warn!("{label} answered {}", raw.status),
            Err(err) => log::warn!("{label} failed: {err}"),
            Ok(_) => {}
        }
        decode(normalize(outcome))
    }

    /// Attach `payload` as a JSON body and execute the request.
    pub async fn send_json<B, R>(&self, request: ApiRequest, payload: &B) -> ApiResponse<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        match serde_json::to_value(payload) {
            Ok(body) => self.send(request.with_body(RequestBody::Json(body))).await,
            Err(err) => {
                log::warn!(
                    "could not encode body for {} {}: {err}",
                    request.method,
                    request.path
                );
                ApiResponse::failure(OPERATION_FAILED_MESSAGE)
            }
        }
    }
}
