//! HTTP adapter and the per-resource bindings built on it.
//!
//! Every binding is a method on [`ApiClient`] that maps one operation to one
//! HTTP call and resolves to an [`ApiResponse`](shared::models::ApiResponse).

mod addresses;
mod auth;
mod client;
pub mod envelope;
mod operator;
mod orders;
mod products;
mod reviews;
mod shop;
pub mod transport;
mod upload;

#[cfg(test)]
pub(crate) mod mock;

pub use auth::{AuthError, CurrentUserSource};
pub use client::ApiClient;
pub use transport::{
    ApiRequest, HttpTransport, ImageUpload, RawResponse, RequestBody, Transport, TransportError,
};
