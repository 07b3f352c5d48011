//! In-memory transport used by the unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use serde_json::Value;

use crate::api::{HttpRequest, HttpResponse, Transport};

#[derive(Default)]
pub struct MockTransport {
    responses: RefCell<VecDeque<Result<HttpResponse, String>>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: &str) {
        self.responses
            .borrow_mut()
            .push_back(Ok(HttpResponse::new(status, body)));
    }

    pub fn respond_json(&self, status: u16, body: Value) {
        self.respond(status, &body.to_string());
    }

    pub fn fail_next(&self, cause: &str) {
        self.responses.borrow_mut().push_back(Err(cause.to_string()));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests
            .borrow()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, String> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err("no response queued".to_string()))
    }
}

/// Unsigned JWT carrying `claims`.
pub fn token(claims: Value) -> String {
    use base64::Engine;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;

    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{header}.{payload}.signature")
}
