//! Error types for contract-level checks

use thiserror::Error;

/// Errors raised before a request is ever built
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractError {
    #[error("required missing zone ID")]
    MissingZoneIdentifier,
}

pub type ContractResult<T> = Result<T, ContractError>;
