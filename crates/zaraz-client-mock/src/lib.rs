//! Mock request executor backed by scripted responses
//!
//! Responses are served in the order they were scripted, then from an
//! optional fallback. Every call is recorded so tests can assert on what the
//! client sent, or that it sent nothing at all.

use async_trait::async_trait;
use http::Method;
use std::collections::VecDeque;
use std::sync::Mutex;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use zaraz_client::{ExecutorError, RequestExecutor};

/// Failure the mock hands back in place of a real transport error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MockTransportError {
    #[error("server returned status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("request cancelled")]
    Cancelled,
    #[error("no scripted response for {method} {path}")]
    Unscripted { method: String, path: String },
}

impl MockTransportError {
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum MockResponse {
    Body(Vec<u8>),
    Fail(MockTransportError),
}

/// One call observed by the mock
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<serde_json::Value>,
    pub cancel: CancellationToken,
}

#[derive(Debug, Default)]
pub struct MockExecutor {
    script: Mutex<VecDeque<MockResponse>>,
    fallback: Option<MockResponse>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw response body
    pub fn respond_with(self, body: impl Into<Vec<u8>>) -> Self {
        self.push(MockResponse::Body(body.into()))
    }

    /// Queue a JSON response body
    pub fn respond_json(self, value: &serde_json::Value) -> Self {
        self.respond_with(value.to_string())
    }

    /// Queue a transport failure
    pub fn fail_with(self, err: MockTransportError) -> Self {
        self.push(MockResponse::Fail(err))
    }

    /// Serve `body` whenever the script is exhausted
    pub fn always_respond_with(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.fallback = Some(MockResponse::Body(body.into()));
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    fn push(self, response: MockResponse) -> Self {
        self.script
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push_back(response);
        self
    }

    fn next_response(&self) -> Option<MockResponse> {
        let scripted = self
            .script
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front();
        scripted.or_else(|| self.fallback.clone())
    }
}

#[async_trait]
impl RequestExecutor for MockExecutor {
    async fn execute(
        &self,
        cancel: &CancellationToken,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<Vec<u8>, ExecutorError> {
        debug!("Mock executor received {} {}", method, path);
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(RecordedRequest {
                method: method.clone(),
                path: path.to_string(),
                body,
                cancel: cancel.clone(),
            });

        if cancel.is_cancelled() {
            return Err(Box::new(MockTransportError::Cancelled));
        }

        match self.next_response() {
            Some(MockResponse::Body(bytes)) => Ok(bytes),
            Some(MockResponse::Fail(err)) => Err(Box::new(err)),
            None => Err(Box::new(MockTransportError::Unscripted {
                method: method.to_string(),
                path: path.to_string(),
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_script_is_served_in_order() {
        let mock = MockExecutor::new()
            .respond_with("first")
            .fail_with(MockTransportError::status(502, "bad gateway"));
        let cancel = CancellationToken::new();

        let first = mock.execute(&cancel, Method::GET, "/a", None).await.unwrap();
        assert_eq!(first, b"first");

        let second = mock.execute(&cancel, Method::GET, "/b", None).await.unwrap_err();
        assert_eq!(
            second.downcast_ref::<MockTransportError>(),
            Some(&MockTransportError::status(502, "bad gateway"))
        );

        let third = mock.execute(&cancel, Method::GET, "/c", None).await.unwrap_err();
        assert!(matches!(
            third.downcast_ref::<MockTransportError>(),
            Some(MockTransportError::Unscripted { .. })
        ));
        assert_eq!(mock.request_count(), 3);
    }

    #[tokio::test]
    async fn test_cancelled_token_short_circuits() {
        let mock = MockExecutor::new().always_respond_with("{}");
        let cancel = CancellationToken::new();
        cancel.cancel();

        let err = mock.execute(&cancel, Method::POST, "/x", None).await.unwrap_err();
        assert_eq!(
            err.downcast_ref::<MockTransportError>(),
            Some(&MockTransportError::Cancelled)
        );
        assert!(mock.requests()[0].cancel.is_cancelled());
    }
}
