//! Per-respondent answering session and scoring.

mod session;

pub use session::Session;
