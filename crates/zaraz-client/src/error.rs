//! Error types for the Zaraz client

use thiserror::Error;
use zaraz_api_contract::ContractError;

use crate::executor::ExecutorError;

/// Errors that can occur when calling the Zaraz settings API
#[derive(Debug, Error)]
pub enum ZarazError {
    /// Raised before any request is built
    #[error("required missing zone ID")]
    MissingZoneIdentifier,

    /// Failure reported by the request executor, untouched
    #[error(transparent)]
    Transport(ExecutorError),

    #[error("error unmarshalling the JSON response: {0}")]
    Unmarshal(#[source] serde_json::Error),
}

impl ZarazError {
    pub fn is_missing_zone_identifier(&self) -> bool {
        matches!(self, ZarazError::MissingZoneIdentifier)
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ZarazError::Transport(_))
    }

    pub fn is_unmarshal(&self) -> bool {
        matches!(self, ZarazError::Unmarshal(_))
    }

    /// The executor's error, if this is a transport failure
    pub fn transport_error(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            ZarazError::Transport(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<ContractError> for ZarazError {
    fn from(err: ContractError) -> Self {
        match err {
            ContractError::MissingZoneIdentifier => ZarazError::MissingZoneIdentifier,
        }
    }
}

/// Result type alias for Zaraz client operations
pub type ZarazResult<T> = Result<T, ZarazError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_transport_error_is_passed_through() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "connection reset");
        let err = ZarazError::Transport(Box::new(io));

        assert!(err.is_transport());
        assert_eq!(err.to_string(), "connection reset");
        let inner = err.transport_error().unwrap();
        assert_eq!(
            inner.downcast_ref::<std::io::Error>().unwrap().kind(),
            std::io::ErrorKind::ConnectionReset
        );
        // The executor's message is the Display, so it is not repeated as a source
        assert!(err.source().is_none());
    }

    #[test]
    fn test_unmarshal_error_carries_marker() {
        let parse = serde_json::from_slice::<serde_json::Value>(b"{oops").unwrap_err();
        let err = ZarazError::Unmarshal(parse);

        assert!(err.is_unmarshal());
        assert!(err
            .to_string()
            .starts_with("error unmarshalling the JSON response: "));
        assert!(err.source().unwrap().is::<serde_json::Error>());
    }

    #[test]
    fn test_contract_error_conversion() {
        let err: ZarazError = ContractError::MissingZoneIdentifier.into();
        assert!(err.is_missing_zone_identifier());
        assert_eq!(err.to_string(), "required missing zone ID");
    }
}
