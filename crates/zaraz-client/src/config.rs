//! Configuration for the Zaraz client

use serde::{Deserialize, Serialize};

fn default_zones_root() -> String {
    "/zones".to_string()
}

/// Client settings that shape request paths and logging
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// Path prefix under which zone resources live
    #[serde(default = "default_zones_root")]
    pub zones_root: String,
    /// Log request and response payloads at trace level
    #[serde(default)]
    pub trace_payloads: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            zones_root: default_zones_root(),
            trace_payloads: false,
        }
    }
}

impl ClientConfig {
    pub fn with_zones_root(mut self, root: impl Into<String>) -> Self {
        self.zones_root = root.into();
        self
    }

    pub fn with_trace_payloads(mut self, enabled: bool) -> Self {
        self.trace_payloads = enabled;
        self
    }
}
