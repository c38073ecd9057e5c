//! Request executor seam
//!
//! The client never talks to the network itself. An executor owns transport,
//! authentication, status handling and retries, and returns the raw body of a
//! successful response.

use async_trait::async_trait;
use http::Method;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Opaque failure reported by an executor
pub type ExecutorError = Box<dyn std::error::Error + Send + Sync>;

/// Performs one HTTP-like request against the Zaraz settings API
#[async_trait]
pub trait RequestExecutor: Send + Sync {
    /// Send `method path` with an optional JSON body and return the response bytes
    ///
    /// `cancel` is the caller's token, handed over unchanged. `body` is
    /// serialized by the executor.
    async fn execute(
        &self,
        cancel: &CancellationToken,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<Vec<u8>, ExecutorError>;
}

#[async_trait]
impl<E: RequestExecutor + ?Sized> RequestExecutor for Arc<E> {
    async fn execute(
        &self,
        cancel: &CancellationToken,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<Vec<u8>, ExecutorError> {
        (**self).execute(cancel, method, path, body).await
    }
}

#[async_trait]
impl<E: RequestExecutor + ?Sized> RequestExecutor for Box<E> {
    async fn execute(
        &self,
        cancel: &CancellationToken,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<Vec<u8>, ExecutorError> {
        (**self).execute(cancel, method, path, body).await
    }
}

#[async_trait]
impl<E: RequestExecutor + ?Sized> RequestExecutor for &E {
    async fn execute(
        &self,
        cancel: &CancellationToken,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<Vec<u8>, ExecutorError> {
        (**self).execute(cancel, method, path, body).await
    }
}
