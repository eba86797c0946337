//! Application layer - command handlers wiring the domain to ports.

pub mod handlers;
