//! Zaraz settings API contract types
//!
//! This crate defines the wire types, zone identifier rules and endpoint
//! versions shared by the Zaraz client and its test doubles.

pub mod endpoint;
pub mod error;
pub mod types;
pub mod zone;

pub use endpoint::*;
pub use error::*;
pub use types::*;
pub use zone::*;
