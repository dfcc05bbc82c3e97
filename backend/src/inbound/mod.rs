//! Inbound adapters that turn external requests into validated contracts
//! while keeping framework details at the edge.
//!
//! HTTP extraction lives under [`http`].

pub mod http;
