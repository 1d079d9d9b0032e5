//! Operator bindings.

use serde_json::Value;
use shared::models::{
    ApiResponse, DashboardReport, Shop, ShopDeletion, ShopId, UserDirectory, UserId,
};

use super::client::ApiClient;
use super::transport::{ApiRequest, Transport};

impl<T: Transport> ApiClient<T> {
    /// Platform totals and top-N rankings.
    pub async fn operator_dashboard(&self) -> ApiResponse<DashboardReport> {
        self.send(ApiRequest::get("/operator/dashboard")).await
    }

    /// Every shop, deleted ones included.
    pub async fn all_shops(&self) -> ApiResponse<Vec<Shop>> {
        self.send(ApiRequest::get("/operator/shops")).await
    }

    /// Shop and customer accounts, grouped.
    pub async fn all_users(&self) -> ApiResponse<UserDirectory> {
        self.send(ApiRequest::get("/operator/users")).await
    }

    /// Delete an account.
    pub async fn delete_user(&self, user_id: UserId) -> ApiResponse<Value> {
        self.send(ApiRequest::delete(format!("/operator/users/{user_id}")))
            .await
    }

    /// Delete a shop; the operator confirms with their own password, sent as a DELETE body.
    pub async fn delete_shop(&self, shop_id: ShopId, password: &str) -> ApiResponse<Value> {
        let confirmation = ShopDeletion {
            password: password.to_string(),
        };
        self.send_json(
            ApiRequest::delete(format!("/operator/shops/{shop_id}")),
            &confirmation,
        )
        .await
    }
}
