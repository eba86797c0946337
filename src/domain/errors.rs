//! Error types for the screening domain.

use thiserror::Error;

use crate::ports::StoreError;

/// Errors raised by the screening engine and its validation boundaries.
///
/// Respondent-facing variants (`Validation`, `DisposableEmail`,
/// `OptionOutOfRange`, `Incomplete`) carry actionable messages. The
/// remaining variants signal configuration or infrastructure faults and
/// must be logged, not surfaced verbatim.
#[derive(Debug, Error)]
pub enum ScreeningError {
    /// No instrument with the given identifier exists in the catalog.
    #[error("unknown instrument '{0}'")]
    UnknownInstrument(String),

    /// The prompt id does not belong to the session's instrument.
    #[error("prompt {prompt_id} does not belong to instrument '{instrument_id}'")]
    UnknownPrompt { instrument_id: String, prompt_id: u32 },

    /// The selected option index is outside the prompt's option list.
    #[error("option index {index} is out of range for prompt {prompt_id} (0..{option_count})")]
    OptionOutOfRange {
        prompt_id: u32,
        index: usize,
        option_count: usize,
    },

    /// Scoring was attempted before every prompt had a response.
    /// `missing_prompts` lists the unanswered prompt ids in instrument order.
    #[error("{} of {total} prompts are still unanswered: {missing_prompts:?}", .missing_prompts.len())]
    Incomplete {
        missing_prompts: Vec<u32>,
        total: usize,
    },

    /// The computed score fell outside every interpretation range.
    ///
    /// A valid instrument definition covers its whole score domain, so this
    /// is an authoring error, not respondent input.
    #[error("score {score} of instrument '{instrument_id}' matches no interpretation range")]
    ScoringConfiguration { instrument_id: String, score: f64 },

    /// Respondent input rejected.
    #[error("validation failed for '{field}': {message}")]
    Validation { field: String, message: String },

    /// Email domain appears on the disposable-provider deny list.
    #[error("email domain '{domain}' is not accepted")]
    DisposableEmail { domain: String },

    /// The persistence boundary refused or failed the write.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ScreeningError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ScreeningError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// True for errors caused by respondent input rather than the system.
    pub fn is_respondent_error(&self) -> bool {
        matches!(
            self,
            ScreeningError::Validation { .. }
                | ScreeningError::DisposableEmail { .. }
                | ScreeningError::OptionOutOfRange { .. }
                | ScreeningError::Incomplete { .. }
        )
    }
}
