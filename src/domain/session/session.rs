//! Screening session - one respondent answering one instrument.
//!
//! A session is transient: it lives for a single sitting, holds no external
//! resources, and is discarded once its result is handed to the persistence
//! port. It is never shared between respondents.
//!
//! # State machine
//!
//! NotStarted -> InProgress -> Complete -> Submitted. `start` is the first
//! transition; Complete is the derived predicate [`Session::is_complete`],
//! not a stored flag; Submitted is reached by contract when the store
//! acknowledges the write, at which point the session is dropped.

use std::collections::HashMap;

use crate::domain::contact::ContactInfo;
use crate::domain::errors::ScreeningError;
use crate::domain::foundation::Timestamp;
use crate::domain::instrument::{catalog, Instrument};
use crate::domain::result::{AnswerRecord, ScreeningResult};

/// In-progress answering session over one instrument.
///
/// # Invariants
///
/// - `current_index` stays within `[0, prompt_count - 1]`
/// - `responses` holds at most one option index per prompt id, and only
///   prompt ids belonging to the instrument
#[derive(Debug, Clone)]
pub struct Session<'a> {
    instrument: &'a Instrument,
    current_index: usize,
    responses: HashMap<u32, usize>,
}

impl Session<'static> {
    /// Starts a session for a catalog instrument at prompt index 0.
    ///
    /// # Errors
    ///
    /// - `UnknownInstrument` if the slug is not in the catalog
    pub fn start(instrument_id: &str) -> Result<Self, ScreeningError> {
        let instrument = catalog::instrument(instrument_id)
            .ok_or_else(|| ScreeningError::UnknownInstrument(instrument_id.to_string()))?;
        Ok(Self::with_instrument(instrument))
    }
}

impl<'a> Session<'a> {
    /// Starts a session over an explicit instrument definition.
    pub fn with_instrument(instrument: &'a Instrument) -> Self {
        Self {
            instrument,
            current_index: 0,
            responses: HashMap::new(),
        }
    }

    pub fn instrument(&self) -> &Instrument {
        self.instrument
    }

    /// Current prompt index, 0-based.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn answered_count(&self) -> usize {
        self.responses.len()
    }

    /// The recorded option index for a prompt, if any.
    pub fn response(&self, prompt_id: u32) -> Option<usize> {
        self.responses.get(&prompt_id).copied()
    }

    /// Records or overwrites the selected option for one prompt.
    ///
    /// Re-selecting the same prompt replaces the prior choice; other
    /// answers are never touched.
    ///
    /// # Errors
    ///
    /// - `UnknownPrompt` if the prompt id is not in this instrument
    /// - `OptionOutOfRange` if the index exceeds the prompt's option list
    pub fn select_response(
        &mut self,
        prompt_id: u32,
        option_index: usize,
    ) -> Result<(), ScreeningError> {
        let prompt = self.instrument.prompt(prompt_id).ok_or_else(|| {
            ScreeningError::UnknownPrompt {
                instrument_id: self.instrument.id.clone(),
                prompt_id,
            }
        })?;
        if option_index >= prompt.options.len() {
            return Err(ScreeningError::OptionOutOfRange {
                prompt_id,
                index: option_index,
                option_count: prompt.options.len(),
            });
        }
        self.responses.insert(prompt_id, option_index);
        Ok(())
    }

    /// Moves to the next prompt; a no-op on the last one.
    pub fn advance(&mut self) {
        if self.current_index + 1 < self.instrument.prompt_count() {
            self.current_index += 1;
        }
    }

    /// Moves to the previous prompt; a no-op on the first one.
    pub fn retreat(&mut self) {
        self.current_index = self.current_index.saturating_sub(1);
    }

    /// True iff every prompt has a recorded response.
    pub fn is_complete(&self) -> bool {
        self.instrument
            .prompts
            .iter()
            .all(|p| self.responses.contains_key(&p.id))
    }

    /// Ids of unanswered prompts, in instrument order.
    fn missing_prompts(&self) -> Vec<u32> {
        self.instrument
            .prompts
            .iter()
            .filter(|p| !self.responses.contains_key(&p.id))
            .map(|p| p.id)
            .collect()
    }

    /// Scores the completed session and builds the durable result.
    ///
    /// # Errors
    ///
    /// - `Incomplete` if any prompt lacks a response
    /// - `ScoringConfiguration` if the score matches no interpretation
    ///   range (malformed instrument definition)
    pub fn compute_result(
        &self,
        contact: ContactInfo,
    ) -> Result<ScreeningResult, ScreeningError> {
        if !self.is_complete() {
            return Err(ScreeningError::Incomplete {
                missing_prompts: self.missing_prompts(),
                total: self.instrument.prompt_count(),
            });
        }

        let mut answers = Vec::with_capacity(self.instrument.prompt_count());
        let mut weighted_sum = 0.0;
        for prompt in &self.instrument.prompts {
            // Completeness was checked above; every prompt has an in-bounds index.
            let option_index = self.responses[&prompt.id];
            let option = &prompt.options[option_index];
            weighted_sum += option.score();
            answers.push(AnswerRecord {
                prompt_id: prompt.id,
                prompt_text: prompt.text.clone(),
                option_text: option.text.clone(),
                value: option.value,
                weight: option.weight,
            });
        }

        let total_score = self.instrument.finalize_score(weighted_sum);
        let range = self.instrument.resolve_interpretation(total_score).ok_or(
            ScreeningError::ScoringConfiguration {
                instrument_id: self.instrument.id.clone(),
                score: total_score,
            },
        )?;

        Ok(ScreeningResult {
            instrument_id: self.instrument.id.clone(),
            instrument_title: self.instrument.title.clone(),
            answers,
            total_score,
            interpretation: range.interpretation.clone(),
            severity: range.severity,
            contact,
            submitted_at: Timestamp::now(),
            needs_follow_up: range.severity.needs_follow_up(),
        })
    }
}
