//! HTTP transport used by the API modules
//!
//! Request code talks to [`JsonTransport`] instead of calling `gloo-net`
//! directly, so handlers can be exercised without a browser.

use async_trait::async_trait;
use gloo_net::http::Request;
use thiserror::Error;

use crate::shared::api_utils::api_base;

/// Status and raw body of a completed HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Same rule as `Response.ok` in the browser: any 2xx status
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request never produced a response
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

#[async_trait(?Send)]
pub trait JsonTransport {
    /// POST `body` as JSON to `path`
    async fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<HttpReply, TransportError>;

    /// GET `path`
    async fn get(&self, path: &str) -> Result<HttpReply, TransportError>;
}

/// Browser `fetch` transport backed by `gloo-net`
#[derive(Debug, Clone)]
pub struct GlooTransport {
    base: String,
}

impl GlooTransport {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// Transport pointed at the configured API base
    pub fn from_config() -> Self {
        Self::new(api_base())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

#[async_trait(?Send)]
impl JsonTransport for GlooTransport {
    async fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<HttpReply, TransportError> {
        let response = Request::post(&self.url(path))
            .header("Content-type", "application/json")
            .json(body)
            .map_err(|e| TransportError(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| TransportError(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError(format!("Failed to read response: {}", e)))?;

        Ok(HttpReply { status, body })
    }

    async fn get(&self, path: &str) -> Result<HttpReply, TransportError> {
        let response = Request::get(&self.url(path))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| TransportError(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError(format!("Failed to read response: {}", e)))?;

        Ok(HttpReply { status, body })
    }
}

/// In-memory transport for handler tests
#[cfg(test)]
pub mod testing {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub struct RecordedRequest {
        pub method: &'static str,
        pub path: String,
        pub body: Option<serde_json::Value>,
    }

    /// Replays queued replies in order and records every request
    #[derive(Default)]
    pub struct RecordingTransport {
        replies: RefCell<VecDeque<Result<HttpReply, TransportError>>>,
        requests: RefCell<Vec<RecordedRequest>>,
    }

    impl RecordingTransport {
        pub fn replying(reply: Result<HttpReply, TransportError>) -> Self {
            let transport = Self::default();
            transport.replies.borrow_mut().push_back(reply);
            transport
        }

        pub fn requests(&self) -> Vec<RecordedRequest> {
            self.requests.borrow().clone()
        }

        fn next_reply(&self) -> Result<HttpReply, TransportError> {
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(TransportError("no reply queued".to_string())))
        }
    }

    #[async_trait(?Send)]
    impl JsonTransport for RecordingTransport {
        async fn post_json(
            &self,
            path: &str,
            body: &serde_json::Value,
        ) -> Result<HttpReply, TransportError> {
            self.requests.borrow_mut().push(RecordedRequest {
                method: "POST",
                path: path.to_string(),
                body: Some(body.clone()),
            });
            // Suspend like a real network call so overlapping submits interleave
            tokio::task::yield_now().await;
            self.next_reply()
        }

        async fn get(&self, path: &str) -> Result<HttpReply, TransportError> {
            self.requests.borrow_mut().push(RecordedRequest {
                method: "GET",
                path: path.to_string(),
                body: None,
            });
            self.next_reply()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_ok_range() {
        assert!(HttpReply::new(200, "").is_ok());
        assert!(HttpReply::new(204, "").is_ok());
        assert!(!HttpReply::new(199, "").is_ok());
        assert!(!HttpReply::new(302, "").is_ok());
        assert!(!HttpReply::new(500, "boom").is_ok());
    }

    #[test]
    fn test_url_joins_base() {
        let transport = GlooTransport::new("http://localhost:3000");
        assert_eq!(
            transport.url("/api/user/changeUsername"),
            "http://localhost:3000/api/user/changeUsername"
        );
        assert_eq!(GlooTransport::new("").url("/api/auth/session"), "/api/auth/session");
    }
}
