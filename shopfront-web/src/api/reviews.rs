//! Review bindings.

use serde_json::Value;
use shared::models::{
    ApiResponse, NewReview, ProductId, Review, ReviewEligibility, ReviewId, ReviewStats,
    ReviewUpdate,
};

use super::client::ApiClient;
use super::transport::{ApiRequest, Transport};

impl<T: Transport> ApiClient<T> {
    /// Reviews of a product, newest first.
    pub async fn product_reviews(&self, product_id: ProductId) -> ApiResponse<Vec<Review>> {
        self.send(ApiRequest::get(format!("/reviews/product/{product_id}")))
            .await
    }

    /// Average rating and review count of a product.
    pub async fn review_stats(&self, product_id: ProductId) -> ApiResponse<ReviewStats> {
        self.send(ApiRequest::get(format!(
            "/reviews/product/{product_id}/stats"
        )))
        .await
    }

    /// Post a review.
    pub async fn add_review(&self, review: &NewReview) -> ApiResponse<Value> {
        self.send_json(ApiRequest::post("/reviews"), review).await
    }

    /// Edit an own review.
    pub async fn update_review(&self, id: ReviewId, update: &ReviewUpdate) -> ApiResponse<Value> {
        self.send_json(ApiRequest::put(format!("/reviews/{id}")), update)
            .await
    }

    /// Delete an own review.
    pub async fn delete_review(&self, id: ReviewId) -> ApiResponse<Value> {
        self.send(ApiRequest::delete(format!("/reviews/{id}"))).await
    }

    /// Whether the signed-in customer may review the product.
    pub async fn can_review(&self, product_id: ProductId) -> ApiResponse<ReviewEligibility> {
        self.send(ApiRequest::get(format!(
            "/reviews/product/{product_id}/can-review"
        )))
        .await
    }
}
