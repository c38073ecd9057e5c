//! Client for the Zaraz settings API
//!
//! Every operation validates the zone identifier, resolves the versioned
//! endpoint, hands the request to a caller-supplied [`RequestExecutor`] and
//! decodes the raw response. Transport, authentication and retries belong to
//! the executor.

mod adapter;
pub mod client;
pub mod config;
pub mod error;
pub mod executor;

pub use client::*;
pub use config::*;
pub use error::*;
pub use executor::*;

pub use tokio_util::sync::CancellationToken;
pub use zaraz_api_contract::*;
