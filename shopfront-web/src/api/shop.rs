//! Shop owner bindings.

use serde_json::Value;
use shared::models::{ApiResponse, Shop};

use super::client::ApiClient;
use super::transport::{ApiRequest, Transport};

impl<T: Transport> ApiClient<T> {
    /// The shop owned by the signed-in shop user.
    pub async fn shop_info(&self) -> ApiResponse<Shop> {
        self.send(ApiRequest::get("/shop/info")).await
    }

    /// Update the signed-in shop's name.
    pub async fn update_shop_info(&self, shop: &Shop) -> ApiResponse<Value> {
        self.send_json(ApiRequest::put("/shop/info"), shop).await
    }
}
