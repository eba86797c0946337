//! Domain layer - pure business logic with no infrastructure dependencies.
//!
//! - `foundation` - shared value objects (timestamps)
//! - `instrument` - screening instrument definitions and the static catalog
//! - `session` - per-respondent answering session and scoring
//! - `contact` - respondent identity validation
//! - `result` - the durable screening result record

pub mod contact;
pub mod errors;
pub mod foundation;
pub mod instrument;
pub mod result;
pub mod session;
