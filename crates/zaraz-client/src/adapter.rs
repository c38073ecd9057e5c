//! Shared request execution and response decoding

use http::Method;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};
use zaraz_api_contract::EndpointVersion;

use crate::client::ZarazClient;
use crate::error::{ZarazError, ZarazResult};
use crate::executor::RequestExecutor;

/// Compose `{root}/{zone}/{segment}/{suffix}`
pub(crate) fn resource_path(
    zones_root: &str,
    zone: &str,
    version: EndpointVersion,
    suffix: &str,
) -> String {
    format!(
        "{}/{}/{}/{}",
        zones_root.trim_end_matches('/'),
        zone,
        version.path_segment(),
        suffix
    )
}

pub(crate) fn decode<T: DeserializeOwned>(bytes: &[u8]) -> ZarazResult<T> {
    serde_json::from_slice(bytes).map_err(ZarazError::Unmarshal)
}

impl<E: RequestExecutor> ZarazClient<E> {
    /// Send a request and return the raw response body
    pub(crate) async fn request(
        &self,
        cancel: &CancellationToken,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> ZarazResult<Vec<u8>> {
        debug!("Sending {} {} (body: {})", method, path, body.is_some());
        if self.config.trace_payloads {
            if let Some(body) = &body {
                trace!("Request payload for {}: {}", path, body);
            }
        }

        let response = self
            .executor
            .execute(cancel, method, path, body)
            .await
            .map_err(|e| {
                debug!("Request to {} failed: {}", path, e);
                ZarazError::Transport(e)
            })?;

        debug!("Received {} bytes from {}", response.len(), path);
        if self.config.trace_payloads {
            trace!(
                "Response payload from {}: {}",
                path,
                String::from_utf8_lossy(&response)
            );
        }
        Ok(response)
    }

    /// Send a request and decode the JSON response into `T`
    pub(crate) async fn request_json<T: DeserializeOwned>(
        &self,
        cancel: &CancellationToken,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> ZarazResult<T> {
        let response = self.request(cancel, method, path, body).await?;
        decode(&response).map_err(|e| {
            debug!("Undecodable response from {}: {}", path, e);
            e
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zaraz_api_contract::ZarazConfig;

    #[test]
    fn test_resource_path_composition() {
        assert_eq!(
            resource_path("/zones", "abc123", EndpointVersion::V1, "config"),
            "/zones/abc123/settings/zaraz/config"
        );
        assert_eq!(
            resource_path("/zones/", "abc123", EndpointVersion::V2, "history?limit=1&offset=0"),
            "/zones/abc123/settings/zaraz/v2/history?limit=1&offset=0"
        );
    }

    #[test]
    fn test_decode_failure_is_unmarshal() {
        let err = decode::<ZarazConfig>(b"not json").unwrap_err();
        assert!(err.is_unmarshal());

        // Well-formed JSON of the wrong shape is still a decode failure
        let err = decode::<ZarazConfig>(b"[1, 2]").unwrap_err();
        assert!(err.is_unmarshal());
    }
}
