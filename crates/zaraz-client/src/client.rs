//! Zaraz settings operations

use http::Method;
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use zaraz_api_contract::*;

use crate::adapter::resource_path;
use crate::config::ClientConfig;
use crate::error::ZarazResult;
use crate::executor::RequestExecutor;

/// Endpoint version every operation is issued against
const ENDPOINT_VERSION: EndpointVersion = EndpointVersion::V1;

/// Zaraz settings client for any zone
///
/// Holds no mutable state, so one client can serve concurrent calls.
#[derive(Debug, Clone)]
pub struct ZarazClient<E> {
    pub(crate) executor: E,
    pub(crate) config: ClientConfig,
}

impl<E: RequestExecutor> ZarazClient<E> {
    /// Create a client with the default configuration
    pub fn new(executor: E) -> Self {
        Self::with_config(executor, ClientConfig::default())
    }

    /// Create a client with an explicit configuration
    pub fn with_config(executor: E, config: ClientConfig) -> Self {
        Self { executor, config }
    }

    /// Get the request executor
    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Get the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn path(&self, zone: &ZoneIdentifier, suffix: &str) -> ZarazResult<String> {
        let zone = zone.require()?;
        Ok(resource_path(
            &self.config.zones_root,
            zone,
            ENDPOINT_VERSION,
            suffix,
        ))
    }

    /// Fetch the zone's current configuration
    pub async fn get_config(
        &self,
        cancel: &CancellationToken,
        zone: &ZoneIdentifier,
    ) -> ZarazResult<ZarazConfig> {
        let path = self.path(zone, "config")?;
        self.request_json(cancel, Method::GET, &path, None).await
    }

    /// Replace the zone's configuration
    pub async fn update_config(
        &self,
        cancel: &CancellationToken,
        zone: &ZoneIdentifier,
        params: UpdateZarazConfigParams,
    ) -> ZarazResult<()> {
        let path = self.path(zone, "config")?;
        self.request(cancel, Method::PUT, &path, Some(Value::Object(params)))
            .await?;
        Ok(())
    }

    /// Fetch the workflow document as raw text
    pub async fn get_workflow(
        &self,
        cancel: &CancellationToken,
        zone: &ZoneIdentifier,
    ) -> ZarazResult<String> {
        let path = self.path(zone, "workflow")?;
        let workflow = self.request(cancel, Method::GET, &path, None).await?;
        Ok(String::from_utf8_lossy(&workflow).into_owned())
    }

    /// Replace the workflow document
    pub async fn update_workflow(
        &self,
        cancel: &CancellationToken,
        zone: &ZoneIdentifier,
        workflow: &str,
    ) -> ZarazResult<()> {
        let path = self.path(zone, "workflow")?;
        self.request(cancel, Method::PUT, &path, Some(Value::from(workflow)))
            .await?;
        Ok(())
    }

    /// Promote the current configuration to live, recording `description` in history
    pub async fn publish_config(
        &self,
        cancel: &CancellationToken,
        zone: &ZoneIdentifier,
        description: &str,
    ) -> ZarazResult<()> {
        let path = self.path(zone, "publish")?;
        self.request(cancel, Method::POST, &path, Some(Value::from(description)))
            .await?;
        debug!("Published Zaraz config for zone {}", zone);
        Ok(())
    }

    /// List one page of published configurations
    ///
    /// The service exposes this read as a POST. `limit` and `offset` are sent as given.
    pub async fn get_config_history(
        &self,
        cancel: &CancellationToken,
        zone: &ZoneIdentifier,
        limit: i64,
        offset: i64,
    ) -> ZarazResult<ZarazHistoryPage> {
        let path = self.path(zone, &format!("history?limit={}&offset={}", limit, offset))?;
        self.request_json(cancel, Method::POST, &path, None).await
    }

    /// Diff the history entries named by `config_ids`, a comma-joined id list
    ///
    /// The string is not validated; [`ConfigIds`] formats one from numeric ids.
    pub async fn get_config_history_diff(
        &self,
        cancel: &CancellationToken,
        zone: &ZoneIdentifier,
        config_ids: &str,
    ) -> ZarazResult<ZarazHistoryDiff> {
        let path = self.path(zone, &format!("history/configs?ids={}", config_ids))?;
        self.request_json(cancel, Method::POST, &path, None).await
    }

    /// Fetch the service's default configuration for the zone
    pub async fn get_default_config(
        &self,
        cancel: &CancellationToken,
        zone: &ZoneIdentifier,
    ) -> ZarazResult<ZarazConfig> {
        let path = self.path(zone, "default")?;
        self.request_json(cancel, Method::GET, &path, None).await
    }

    /// Request an export of the configuration
    ///
    /// The response must decode as a configuration document but is not returned.
    pub async fn export_config(
        &self,
        cancel: &CancellationToken,
        zone: &ZoneIdentifier,
    ) -> ZarazResult<()> {
        let path = self.path(zone, "export")?;
        let _: ZarazConfig = self.request_json(cancel, Method::GET, &path, None).await?;
        Ok(())
    }
}
