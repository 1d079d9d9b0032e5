//! Scripted transport for exercising the client without a network.

use async_trait::async_trait;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use super::transport::{ApiRequest, RawResponse, Transport, TransportError, parse_body};
use super::ApiClient;

#[derive(Clone, Debug, Default)]
pub(crate) struct MockTransport {
    replies: Rc<RefCell<VecDeque<Result<RawResponse, TransportError>>>>,
    requests: Rc<RefCell<Vec<ApiRequest>>>,
}

impl MockTransport {
    pub(crate) fn reply(&self, status: u16, body: Value) -> &Self {
        self.replies.borrow_mut().push_back(Ok(RawResponse {
            status,
            body: Some(body),
        }));
        self
    }

    /// Script a reply from raw body text, decoded the way the HTTP transport does.
    pub(crate) fn reply_text(&self, status: u16, text: &str) -> &Self {
        self.replies.borrow_mut().push_back(Ok(RawResponse {
            status,
            body: parse_body(text),
        }));
        self
    }

    pub(crate) fn fail(&self, error: TransportError) -> &Self {
        self.replies.borrow_mut().push_back(Err(error));
        self
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub(crate) fn last_request(&self) -> ApiRequest {
        self.requests
            .borrow()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
        self.requests.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no scripted reply".to_string())))
    }
}

/// A client whose transport can be scripted and inspected through the returned handle.
pub(crate) fn mock_client() -> (ApiClient<MockTransport>, MockTransport) {
    let transport = MockTransport::default();
    (ApiClient::with_transport(transport.clone()), transport)
}
