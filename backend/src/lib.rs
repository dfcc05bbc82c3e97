//! Request and response contracts for the capabilities management service.
//!
//! The [`domain`] module holds the validated shapes; [`inbound::http`] lets
//! Actix handlers receive them already validated; [`config`] selects how
//! undeclared request fields are treated; [`doc`] publishes the shapes as an
//! OpenAPI document.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by schema tooling.
pub use doc::ApiDoc;
