//! Delivery address bindings.

use serde_json::Value;
use shared::models::{Address, AddressId, ApiResponse};

use super::client::ApiClient;
use super::transport::{ApiRequest, Transport};

impl<T: Transport> ApiClient<T> {
    /// The signed-in customer's saved addresses.
    pub async fn list_addresses(&self) -> ApiResponse<Vec<Address>> {
        self.send(ApiRequest::get("/addresses")).await
    }

    /// Save a new address.
    pub async fn add_address(&self, address: &Address) -> ApiResponse<Value> {
        self.send_json(ApiRequest::post("/addresses"), address).await
    }

    /// Replace a saved address.
    pub async fn update_address(&self, id: AddressId, address: &Address) -> ApiResponse<Value> {
        self.send_json(ApiRequest::put(format!("/addresses/{id}")), address)
            .await
    }

    /// Remove a saved address.
    pub async fn delete_address(&self, id: AddressId) -> ApiResponse<Value> {
        self.send(ApiRequest::delete(format!("/addresses/{id}"))).await
    }
}
