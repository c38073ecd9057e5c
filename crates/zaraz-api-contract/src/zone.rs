//! Zone identifiers and the guard applied before every request

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ContractError, ContractResult};

/// Opaque identifier of the zone a request targets
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZoneIdentifier(String);

impl ZoneIdentifier {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the identifier if present, or `MissingZoneIdentifier`
    ///
    /// Only the empty string counts as missing; the value is otherwise opaque.
    pub fn require(&self) -> ContractResult<&str> {
        if self.0.is_empty() {
            return Err(ContractError::MissingZoneIdentifier);
        }
        Ok(&self.0)
    }
}

impl From<&str> for ZoneIdentifier {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ZoneIdentifier {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for ZoneIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ZoneIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_identifier_is_rejected() {
        let zone = ZoneIdentifier::default();
        assert_eq!(zone.require(), Err(ContractError::MissingZoneIdentifier));
        assert_eq!(
            ContractError::MissingZoneIdentifier.to_string(),
            "required missing zone ID"
        );
    }

    #[test]
    fn test_present_identifier_passes_through() {
        let zone = ZoneIdentifier::from("abc123");
        assert_eq!(zone.require(), Ok("abc123"));
    }

    #[test]
    fn test_whitespace_identifier_is_opaque() {
        let zone = ZoneIdentifier::new(" ");
        assert_eq!(zone.require(), Ok(" "));
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let zone = ZoneIdentifier::new("023e105f4ecef8ad9ca31a8372d0c353");
        assert_eq!(
            serde_json::to_string(&zone).unwrap(),
            "\"023e105f4ecef8ad9ca31a8372d0c353\""
        );
    }
}
