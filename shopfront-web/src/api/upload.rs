//! Image upload binding.

use shared::models::ApiResponse;

use super::client::ApiClient;
use super::transport::{ApiRequest, ImageUpload, RequestBody, Transport};

impl<T: Transport> ApiClient<T> {
    /// Upload a product image; the envelope's data is the stored image path.
    pub async fn upload_image(&self, file_name: &str, bytes: Vec<u8>) -> ApiResponse<String> {
        let upload = ImageUpload {
            file_name: file_name.to_string(),
            bytes,
        };
        self.send(ApiRequest::post("/upload/image").with_body(RequestBody::Image(upload)))
            .await
    }
}
