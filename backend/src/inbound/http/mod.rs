//! HTTP inbound adapter: contract extraction and error mapping.
//!
//! Routes are owned by the service that mounts these extractors.

pub mod error;
pub mod extract;
pub mod schemas;

pub use error::ApiResult;
pub use extract::Validated;
