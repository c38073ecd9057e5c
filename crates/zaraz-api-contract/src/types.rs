//! API contract types for the Zaraz settings service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Full tag-management configuration of a zone
///
/// The layer never inspects the document, so it stays an ordered map of
/// arbitrary JSON values.
pub type ZarazConfig = serde_json::Map<String, serde_json::Value>;

/// Replacement configuration submitted by the caller
pub type UpdateZarazConfigParams = serde_json::Map<String, serde_json::Value>;

/// Differences between published configurations, shaped by the server
pub type ZarazHistoryDiff = serde_json::Map<String, serde_json::Value>;

/// One published configuration in the zone's history
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ZarazConfigRow {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "usedId", alias = "userId", default)]
    pub user_id: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// One page of configuration history
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ZarazHistoryPage {
    #[serde(default)]
    pub data: Vec<ZarazConfigRow>,
    /// Total number of history entries reported by the server
    #[serde(default)]
    pub count: i64,
}

/// History entry ids formatted for the `ids` query parameter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConfigIds(Vec<i64>);

impl ConfigIds {
    /// Collect history entry ids in the given order
    pub fn new(ids: impl IntoIterator<Item = i64>) -> Self {
        Self(ids.into_iter().collect())
    }

    /// Get the collected ids
    pub fn ids(&self) -> &[i64] {
        &self.0
    }
}

impl FromIterator<i64> for ConfigIds {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl From<Vec<i64>> for ConfigIds {
    fn from(ids: Vec<i64>) -> Self {
        Self(ids)
    }
}

impl fmt::Display for ConfigIds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, id) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", id)?;
        }
        Ok(())
    }
}
