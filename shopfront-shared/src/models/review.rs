//! Product reviews and review eligibility.

use serde::{Deserialize, Serialize};

use super::{OrderId, ProductId, ReviewId, Timestamp, UserId};

/// A customer's rating and comment on a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Backend identifier.
    pub review_id: ReviewId,
    /// Reviewed product.
    pub product_id: Option<ProductId>,
    /// Author.
    pub customer_id: UserId,
    /// Order the review was left against.
    pub order_id: Option<OrderId>,
    /// Stars, 1 to 5.
    pub rating: u8,
    /// Comment text.
    pub content: Option<String>,
    /// When the review was written.
    pub review_date: Timestamp,
    /// Filled in by the backend for display; not stored.
    pub customer_name: Option<String>,
}

/// Aggregate rating for a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewStats {
    /// Mean rating; absent when there are no reviews.
    pub average_rating: Option<f64>,
    /// Number of reviews.
    #[serde(default)]
    pub review_count: u64,
}

/// Whether the current customer may leave a review for a product.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReviewEligibility {
    /// The customer already reviewed the product.
    pub has_reviewed: bool,
    /// The customer bought the product.
    pub has_purchased: bool,
}

impl ReviewEligibility {
    /// Bought and not yet reviewed.
    #[must_use]
    pub const fn can_review(self) -> bool {
        self.has_purchased && !self.has_reviewed
    }
}

/// Body for posting a review.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    /// Product being reviewed.
    pub product_id: ProductId,
    /// Order the purchase came from, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<OrderId>,
    /// Stars, 1 to 5.
    pub rating: u8,
    /// Comment text.
    pub content: String,
}

/// Body for editing an existing review.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReviewUpdate {
    /// New star rating.
    pub rating: u8,
    /// New comment text.
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn stats_tolerate_missing_average() {
        let stats: ReviewStats =
            serde_json::from_value(json!({"averageRating": null, "reviewCount": 0})).unwrap();
        assert_eq!(stats.average_rating, None);
        assert_eq!(stats.review_count, 0);
    }

    #[test]
    fn eligibility_requires_purchase_and_no_prior_review() {
        let fresh = ReviewEligibility {
            has_reviewed: false,
            has_purchased: true,
        };
        let repeat = ReviewEligibility {
            has_reviewed: true,
            has_purchased: true,
        };
        assert!(fresh.can_review());
        assert!(!repeat.can_review());
    }

    #[test]
    fn review_decodes_with_customer_name() {
        let review: Review = serde_json::from_value(json!({
            "reviewId": 8,
            "productId": 5,
            "customerId": 3,
            "orderId": 11,
            "rating": 4,
            "content": "Good tea",
            "reviewDate": "2025-03-08 14:30:00",
            "customerName": "alice"
        }))
        .unwrap();
        assert_eq!(review.rating, 4);
        assert_eq!(review.customer_name.as_deref(), Some("alice"));
    }
}
