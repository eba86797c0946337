//! Shared value objects used across domain modules.

mod timestamp;

pub use timestamp::Timestamp;
