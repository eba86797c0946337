//! The durable screening result record.
//!
//! Created once at submission time by the session engine; ownership
//! transfers to the persistence port immediately after.

use crate::domain::contact::ContactInfo;
use crate::domain::foundation::Timestamp;
use crate::domain::instrument::Severity;

/// Snapshot of one answered prompt.
///
/// Prompt and option texts are copied in, so stored results stay readable
/// even if instrument wording is later revised.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerRecord {
    pub prompt_id: u32,
    pub prompt_text: String,
    pub option_text: String,
    pub value: u32,
    pub weight: f64,
}

/// A finished, scored screening ready for persistence.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreeningResult {
    pub instrument_id: String,
    pub instrument_title: String,
    /// Answers in instrument prompt order.
    pub answers: Vec<AnswerRecord>,
    pub total_score: f64,
    pub interpretation: String,
    pub severity: Severity,
    pub contact: ContactInfo,
    pub submitted_at: Timestamp,
    pub needs_follow_up: bool,
}
