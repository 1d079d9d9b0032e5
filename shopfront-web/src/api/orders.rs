//! Order bindings.

use serde_json::Value;
use shared::models::{ApiResponse, CreateOrderRequest, Order, OrderId};

use super::client::ApiClient;
use super::transport::{ApiRequest, Transport};

impl<T: Transport> ApiClient<T> {
    /// Submit the cart as order lines; the backend answers with the new order id.
    pub async fn create_order(&self, request: &CreateOrderRequest) -> ApiResponse<OrderId> {
        self.send_json(ApiRequest::post("/orders"), request).await
    }

    /// The signed-in customer's orders.
    pub async fn customer_orders(&self) -> ApiResponse<Vec<Order>> {
        self.send(ApiRequest::get("/orders/customer")).await
    }

    /// Orders placed with the signed-in shop.
    pub async fn shop_orders(&self) -> ApiResponse<Vec<Order>> {
        self.send(ApiRequest::get("/orders/shop")).await
    }

    /// One order by id.
    pub async fn get_order(&self, id: OrderId) -> ApiResponse<Order> {
        self.send(ApiRequest::get(format!("/orders/{id}"))).await
    }

    /// Mark an order paid.
    pub async fn pay_order(&self, id: OrderId) -> ApiResponse<Value> {
        self.order_transition(id, "payment").await
    }

    /// Mark an order shipped; shop only.
    pub async fn ship_order(&self, id: OrderId) -> ApiResponse<Value> {
        self.order_transition(id, "shipment").await
    }

    /// Confirm the parcel arrived; customer only.
    pub async fn confirm_receipt(&self, id: OrderId) -> ApiResponse<Value> {
        self.order_transition(id, "receipt").await
    }

    /// Cancel an unpaid order.
    pub async fn cancel_order(&self, id: OrderId) -> ApiResponse<Value> {
        self.order_transition(id, "cancel").await
    }

    async fn order_transition(&self, id: OrderId, step: &str) -> ApiResponse<Value> {
        self.send(ApiRequest::post(format!("/orders/{id}/{step}")))
            .await
    }
}
