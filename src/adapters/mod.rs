//! Adapters - implementations of ports plus the inbound HTTP surface.

pub mod content_store;
pub mod http;
