//! Inbound HTTP adapters (axum).

pub mod screening;
