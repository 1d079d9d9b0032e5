//! Catalogue bindings.

use shared::models::{ApiResponse, Category, Product, ProductId, ProductQuery, ShopId};

use super::client::ApiClient;
use super::transport::{ApiRequest, Transport};

impl<T: Transport> ApiClient<T> {
    /// List products on sale, optionally filtered by keyword and category.
    pub async fn list_products(&self, query: &ProductQuery) -> ApiResponse<Vec<Product>> {
        self.send(ApiRequest::get("/products").with_query(query.to_pairs()))
            .await
    }

    /// One product by id.
    pub async fn get_product(&self, id: ProductId) -> ApiResponse<Product> {
        self.send(ApiRequest::get(format!("/products/{id}"))).await
    }

    /// Every product of one shop, including those not on sale.
    pub async fn products_by_shop(&self, shop_id: ShopId) -> ApiResponse<Vec<Product>> {
        self.send(ApiRequest::get(format!("/products/shop/{shop_id}")))
            .await
    }

    /// List a new product for the signed-in shop.
    pub async fn add_product(&self, product: &Product) -> ApiResponse<Product> {
        self.send_json(ApiRequest::post("/products"), product).await
    }

    /// Edit a product of the signed-in shop.
    pub async fn update_product(&self, id: ProductId, product: &Product) -> ApiResponse<Product> {
        self.send_json(ApiRequest::put(format!("/products/{id}")), product)
            .await
    }

    /// All categories, in display order.
    pub async fn list_categories(&self) -> ApiResponse<Vec<Category>> {
        self.send(ApiRequest::get("/categories")).await
    }
}
