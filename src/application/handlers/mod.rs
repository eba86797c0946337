//! Command handlers, grouped by bounded context.

pub mod screening;
