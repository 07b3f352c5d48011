//! Typed client for the finance REST backend.
//!
//! [`ApiClient`] owns a [`Transport`] and exposes one method per endpoint.
//! The generic handlers below turn transport failures, non-success statuses
//! and undecodable bodies into [`ApiError`]s carrying the per-operation
//! fallback message.

pub mod accounts;
pub mod auth;
pub mod categories;
pub mod investments;
pub mod scheduled;
pub mod transactions;

use std::fmt;
use std::rc::Rc;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error, info, trace, warn};

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request relative to the API base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub path: String,
    /// Unencoded query pairs; encoding is the transport's job.
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl HttpRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Path plus query string, for logs and request matching in tests.
    pub fn target(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let query: Vec<String> = self
            .query
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect();
        format!("{}?{}", self.path, query.join("&"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes requests against the backend.
///
/// The browser implementation attaches the bearer token; tests use an
/// in-memory mock. A transport only fails when no response was received.
#[async_trait(?Send)]
pub trait Transport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, String>;
}

pub struct ApiClient<T> {
    transport: Rc<T>,
}

impl<T> Clone for ApiClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Rc::clone(&self.transport),
        }
    }
}

impl<T> PartialEq for ApiClient<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.transport, &other.transport)
    }
}

impl<T> fmt::Debug for ApiClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient").finish_non_exhaustive()
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport: Rc::new(transport),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn send(&self, request: HttpRequest, fallback: &str) -> Result<HttpResponse, ApiError> {
        let method = request.method;
        let target = request.target();
        debug!("{} request to: {}", method, target);

        let response = self.transport.execute(request).await.map_err(|cause| {
            error!("{} {} - Request failed: {}", method, target, cause);
            ApiError::transport(fallback, cause)
        })?;

        if !response.is_success() {
            warn!("{} {} - Non-OK response: {}", method, target, response.status);
            let err = ApiError::from_response(response.status, &response.body, fallback);
            error!("{} {} - API error: {}", method, target, err);
            return Err(err);
        }

        trace!("{} {} - Response received", method, target);
        Ok(response)
    }

    /// Sends `request` and decodes the JSON body.
    pub(crate) async fn fetch<R>(&self, request: HttpRequest, fallback: &str) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
    {
        let method = request.method;
        let target = request.target();
        let response = self.send(request, fallback).await?;

        let decoded = serde_json::from_str(&response.body).map_err(|e| {
            error!("{} {} - Failed to parse response: {}", method, target, e);
            ApiError::decode(fallback, e.to_string())
        })?;

        info!("{} {} - Success", method, target);
        Ok(decoded)
    }

    /// Sends `request` and ignores whatever body comes back.
    pub(crate) async fn send_discarding(
        &self,
        request: HttpRequest,
        fallback: &str,
    ) -> Result<(), ApiError> {
        let method = request.method;
        let target = request.target();
        self.send(request, fallback).await?;
        info!("{} {} - Success", method, target);
        Ok(())
    }
}

/// Serializes a request body, reporting failures under `fallback`.
pub(crate) fn json_body<B: Serialize>(body: &B, fallback: &str) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| {
        error!("Failed to serialize request: {}", e);
        ApiError::decode(fallback, e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockTransport;
    use model::Account;

    #[tokio::test]
    async fn test_transport_failure_uses_fallback() {
        let client = ApiClient::new(MockTransport::new());
        client.transport().fail_next("connection refused");

        let err = client.list_accounts().await.unwrap_err();
        assert_eq!(err.message(), "Failed to fetch accounts");
        assert!(matches!(
            err,
            ApiError::Transport { ref cause, .. } if cause == "connection refused"
        ));
    }

    #[tokio::test]
    async fn test_undecodable_body() {
        let client = ApiClient::new(MockTransport::new());
        client.transport().respond(200, r#"{"unexpected":true}"#);

        let err = client
            .fetch::<Vec<Account>>(HttpRequest::get("/accounts"), "Failed to fetch accounts")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
        assert_eq!(err.message(), "Failed to fetch accounts");
    }

    #[test]
    fn test_request_target() {
        let request = HttpRequest::get("/transactions/date-range")
            .query("start", "2024-01-01")
            .query("end", "2024-01-31");
        assert_eq!(request.target(), "/transactions/date-range?start=2024-01-01&end=2024-01-31");
        assert_eq!(HttpRequest::delete("/accounts/4").target(), "/accounts/4");
    }
}
