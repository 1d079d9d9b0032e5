//! Edit and delete dialog for a customer's own review.

use shared::models::{ProductId, Review, ReviewId, ReviewUpdate};

use crate::api::{ApiClient, Transport};
use crate::models::notice::Notice;

/// The fields being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewDraft {
    /// Review being edited.
    pub review_id: ReviewId,
    /// Product the review belongs to.
    pub product_id: Option<ProductId>,
    /// Star rating, 1 to 5.
    pub rating: u8,
    /// Comment text.
    pub content: String,
}

impl From<&Review> for ReviewDraft {
    fn from(review: &Review) -> Self {
        Self {
            review_id: review.review_id,
            product_id: review.product_id,
            rating: review.rating,
            content: review.content.clone().unwrap_or_default(),
        }
    }
}

/// Dialog state: closed, or open on one draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewEditor {
    draft: Option<ReviewDraft>,
}

impl ReviewEditor {
    /// A draft is being edited.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.draft.is_some()
    }

    /// The open draft.
    #[must_use]
    pub fn draft(&self) -> Option<&ReviewDraft> {
        self.draft.as_ref()
    }

    /// Open the dialog on a copy of `review`.
    pub fn open(&mut self, review: &Review) {
        self.draft = Some(ReviewDraft::from(review));
    }

    /// Close the dialog, discarding the draft.
    pub fn close(&mut self) {
        self.draft = None;
    }

    /// Ratings run from one to five stars.
    pub fn set_rating(&mut self, rating: u8) {
        if let Some(draft) = &mut self.draft {
            draft.rating = rating.clamp(1, 5);
        }
    }

    /// Replace the draft text.
    pub fn set_content(&mut self, content: impl Into<String>) {
        if let Some(draft) = &mut self.draft {
            draft.content = content.into();
        }
    }

    /// Send the draft; the dialog closes only when the backend accepts it.
    pub async fn submit<T: Transport>(&mut self, client: &ApiClient<T>) -> Option<Notice> {
        let draft = self.draft.as_ref()?;
        let update = ReviewUpdate {
            rating: draft.rating,
            content: draft.content.clone(),
        };
        let response = client.update_review(draft.review_id, &update).await;
        let notice = Notice::from_response(&response, "Review updated", "Update failed");
        if response.success {
            self.close();
        }
        Some(notice)
    }

    /// Delete a review outright.
    pub async fn remove<T: Transport>(client: &ApiClient<T>, review_id: ReviewId) -> Notice {
        let response = client.delete_review(review_id).await;
        Notice::from_response(&response, "Review deleted", "Delete failed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::mock::mock_client;
    use chrono::{TimeZone, Utc};
    use serde_json::json;
    use shared::models::Timestamp;

    fn review() -> Review {
        Review {
            review_id: 12,
            product_id: Some(5),
            customer_id: 1,
            order_id: Some(3),
            rating: 3,
            content: Some("ok".to_string()),
            review_date: Timestamp(Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap()),
            customer_name: None,
        }
    }

    #[test]
    fn open_copies_the_review() {
        let mut editor = ReviewEditor::default();
        editor.open(&review());
        let draft = editor.draft().expect("draft");
        assert_eq!(draft.review_id, 12);
        assert_eq!(draft.product_id, Some(5));
        assert_eq!(draft.rating, 3);
        assert_eq!(draft.content, "ok");
    }

    #[test]
    fn edits_require_an_open_dialog() {
        let mut editor = ReviewEditor::default();
        editor.set_rating(4);
        editor.set_content("ignored");
        assert!(!editor.is_open());

        editor.open(&review());
        editor.set_rating(9);
        editor.set_content("better");
        let draft = editor.draft().expect("draft");
        assert_eq!(draft.rating, 5);
        assert_eq!(draft.content, "better");
    }

    #[tokio::test]
    async fn successful_submit_closes() {
        let (client, transport) = mock_client();
        transport.reply(200, json!({"success": true}));
        let mut editor = ReviewEditor::default();
        editor.open(&review());
        editor.set_rating(5);

        let notice = editor.submit(&client).await;

        assert_eq!(notice, Some(Notice::success("Review updated")));
        assert!(!editor.is_open());
        let request = transport.last_request();
        assert_eq!(request.path, "/reviews/12");
    }

    #[tokio::test]
    async fn failed_submit_stays_open() {
        let (client, transport) = mock_client();
        transport
            .reply(400, json!({"success": false, "message": "只能修改自己的评价"}))
            .reply(200, json!({"success": false}));
        let mut editor = ReviewEditor::default();
        editor.open(&review());

        let first = editor.submit(&client).await;
        let second = editor.submit(&client).await;

        assert_eq!(first, Some(Notice::error("只能修改自己的评价")));
        assert_eq!(second, Some(Notice::error("Update failed")));
        assert!(editor.is_open());
    }

    #[tokio::test]
    async fn submit_without_draft_sends_nothing() {
        let (client, transport) = mock_client();
        let mut editor = ReviewEditor::default();

        assert_eq!(editor.submit(&client).await, None);
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn remove_reports_outcome() {
        let (client, transport) = mock_client();
        transport
            .reply(200, json!({"success": true}))
            .reply(200, json!({"success": false}));

        assert_eq!(
            ReviewEditor::remove(&client, 12).await,
            Notice::success("Review deleted")
        );
        assert_eq!(
            ReviewEditor::remove(&client, 12).await,
            Notice::error("Delete failed")
        );
    }
}
