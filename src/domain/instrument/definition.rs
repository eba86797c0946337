//! Screening instrument definitions.
//!
//! An instrument is an ordered list of prompts with ordinal-scored answer
//! options, a scoring method, and interpretation ranges partitioning the
//! full score domain. Definitions are static configuration, immutable at
//! runtime.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Allowed option count per prompt.
pub const MIN_OPTIONS: usize = 2;
pub const MAX_OPTIONS: usize = 10;

/// How recorded option values are combined into a total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoringMethod {
    /// Sum of selected option values times weight.
    Sum,
    /// Sum divided by prompt count.
    Average,
    /// Same computation as `Sum`; the name documents that per-option
    /// weights are deliberately non-uniform.
    WeightedSum,
}

/// Severity tier of an interpretation, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Mild,
    Moderate,
    High,
    Severe,
}

impl Severity {
    /// Results at these tiers are flagged for clinician follow-up.
    pub fn needs_follow_up(&self) -> bool {
        *self >= Severity::High
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
            Severity::High => "high",
            Severity::Severe => "severe",
        }
    }
}

/// One selectable answer within a prompt.
///
/// Option values within a prompt run from "no symptom" to "most severe" by
/// construction; clinical interpretation depends on that ordering.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerOption {
    pub text: String,
    pub value: u32,
    pub weight: f64,
}

impl AnswerOption {
    pub fn new(text: impl Into<String>, value: u32) -> Self {
        Self {
            text: text.into(),
            value,
            weight: 1.0,
        }
    }

    pub fn weighted(text: impl Into<String>, value: u32, weight: f64) -> Self {
        Self {
            text: text.into(),
            value,
            weight,
        }
    }

    /// Contribution of this option to the total score.
    pub fn score(&self) -> f64 {
        f64::from(self.value) * self.weight
    }
}

/// One question within an instrument.
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    /// Stable identifier, unique within the instrument.
    pub id: u32,
    pub text: String,
    pub options: Vec<AnswerOption>,
}

impl Prompt {
    pub fn new(id: u32, text: impl Into<String>, options: Vec<AnswerOption>) -> Self {
        Self {
            id,
            text: text.into(),
            options,
        }
    }

    fn min_score(&self) -> f64 {
        self.options
            .iter()
            .map(AnswerOption::score)
            .fold(f64::INFINITY, f64::min)
    }

    fn max_score(&self) -> f64 {
        self.options
            .iter()
            .map(AnswerOption::score)
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

/// Inclusive score bracket mapped to an interpretation.
#[derive(Debug, Clone, PartialEq)]
pub struct InterpretationRange {
    pub min: f64,
    pub max: f64,
    pub interpretation: String,
    pub severity: Severity,
    /// Display color tag used by the client.
    pub color: String,
}

impl InterpretationRange {
    pub fn new(
        min: f64,
        max: f64,
        interpretation: impl Into<String>,
        severity: Severity,
        color: impl Into<String>,
    ) -> Self {
        Self {
            min,
            max,
            interpretation: interpretation.into(),
            severity,
            color: color.into(),
        }
    }

    pub fn contains(&self, score: f64) -> bool {
        score >= self.min && score <= self.max
    }
}

/// A complete screening instrument definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Instrument {
    /// Stable slug, e.g. "beck-anxiety".
    pub id: String,
    pub title: String,
    pub description: String,
    pub instructions: Vec<String>,
    pub disclaimer: String,
    /// Estimated duration label shown to respondents, e.g. "5-10 dakika".
    pub duration: String,
    pub prompts: Vec<Prompt>,
    pub scoring: ScoringMethod,
    /// Ordered, non-overlapping, covering the full attainable score span.
    pub ranges: Vec<InterpretationRange>,
}

/// Authoring faults detected by [`Instrument::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DefinitionError {
    #[error("instrument '{instrument_id}' has no prompts")]
    NoPrompts { instrument_id: String },

    #[error("prompt {prompt_id} of '{instrument_id}' has {count} options, expected {MIN_OPTIONS}-{MAX_OPTIONS}")]
    BadOptionCount {
        instrument_id: String,
        prompt_id: u32,
        count: usize,
    },

    #[error("prompt id {prompt_id} appears more than once in '{instrument_id}'")]
    DuplicatePromptId {
        instrument_id: String,
        prompt_id: u32,
    },

    #[error("instrument '{instrument_id}' has no interpretation ranges")]
    NoRanges { instrument_id: String },

    #[error("interpretation ranges of '{instrument_id}' are not sorted ascending or overlap near {at}")]
    RangesOutOfOrder { instrument_id: String, at: f64 },

    #[error("attainable score {score} of '{instrument_id}' falls in {matches} interpretation ranges")]
    UncoveredScore {
        instrument_id: String,
        score: f64,
        matches: usize,
    },

    #[error("option weights of '{instrument_id}' produce score increments too fine to verify range coverage")]
    ScoreStepTooFine { instrument_id: String },
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let rem = a % b;
        a = b;
        b = rem;
    }
    a
}

impl Instrument {
    pub fn prompt_count(&self) -> usize {
        self.prompts.len()
    }

    pub fn prompt(&self, prompt_id: u32) -> Option<&Prompt> {
        self.prompts.iter().find(|p| p.id == prompt_id)
    }

    /// Lowest attainable total score.
    pub fn min_possible_score(&self) -> f64 {
        let sum: f64 = self.prompts.iter().map(Prompt::min_score).sum();
        self.finalize_score(sum)
    }

    /// Highest attainable total score.
    pub fn max_possible_score(&self) -> f64 {
        let sum: f64 = self.prompts.iter().map(Prompt::max_score).sum();
        self.finalize_score(sum)
    }

    /// Applies the scoring method to a raw weighted sum.
    pub fn finalize_score(&self, weighted_sum: f64) -> f64 {
        match self.scoring {
            ScoringMethod::Sum | ScoringMethod::WeightedSum => weighted_sum,
            ScoringMethod::Average => weighted_sum / self.prompts.len() as f64,
        }
    }

    /// Ordered linear scan for the first range containing `score`.
    pub fn resolve_interpretation(&self, score: f64) -> Option<&InterpretationRange> {
        self.ranges.iter().find(|r| r.contains(score))
    }

    /// Finest raw-sum increment attainable from the weighted option scores,
    /// as the GCD of every option's offset from its prompt's minimum.
    ///
    /// Increments are scaled to micro-units so the GCD runs on integers.
    /// Returns `None` if an increment is too fine to represent at that
    /// precision; `Some(0.0)` if every prompt scores a single value.
    fn raw_score_step(&self) -> Option<f64> {
        const SCALE: f64 = 1_000_000.0;
        let mut step = 0u64;
        for prompt in &self.prompts {
            let prompt_min = prompt.min_score();
            for option in &prompt.options {
                let increment = option.score() - prompt_min;
                if increment == 0.0 {
                    continue;
                }
                let scaled = (increment * SCALE).round();
                if scaled < 1.0 || (scaled / SCALE - increment).abs() > 1e-9 {
                    return None;
                }
                step = gcd(step, scaled as u64);
            }
        }
        Some(step as f64 / SCALE)
    }

    /// Checks the definition invariants.
    ///
    /// Coverage is verified by walking the attainable score lattice, whose
    /// step is derived from the weighted option scores themselves (so a
    /// fractional weight tightens the walk accordingly; `Average` further
    /// divides the step by prompt count). Every lattice point in the score
    /// span must fall in exactly one range.
    pub fn validate(&self) -> Result<(), DefinitionError> {
        if self.prompts.is_empty() {
            return Err(DefinitionError::NoPrompts {
                instrument_id: self.id.clone(),
            });
        }

        let mut seen = std::collections::HashSet::new();
        for prompt in &self.prompts {
            if !(MIN_OPTIONS..=MAX_OPTIONS).contains(&prompt.options.len()) {
                return Err(DefinitionError::BadOptionCount {
                    instrument_id: self.id.clone(),
                    prompt_id: prompt.id,
                    count: prompt.options.len(),
                });
            }
            if !seen.insert(prompt.id) {
                return Err(DefinitionError::DuplicatePromptId {
                    instrument_id: self.id.clone(),
                    prompt_id: prompt.id,
                });
            }
        }

        if self.ranges.is_empty() {
            return Err(DefinitionError::NoRanges {
                instrument_id: self.id.clone(),
            });
        }
        for pair in self.ranges.windows(2) {
            if pair[1].min <= pair[0].max || pair[0].min > pair[0].max {
                return Err(DefinitionError::RangesOutOfOrder {
                    instrument_id: self.id.clone(),
                    at: pair[1].min,
                });
            }
        }
        let last = &self.ranges[self.ranges.len() - 1];
        if last.min > last.max {
            return Err(DefinitionError::RangesOutOfOrder {
                instrument_id: self.id.clone(),
                at: last.min,
            });
        }

        let raw_step = self
            .raw_score_step()
            .ok_or_else(|| DefinitionError::ScoreStepTooFine {
                instrument_id: self.id.clone(),
            })?;
        let step = self.finalize_score(raw_step);
        let min = self.min_possible_score();
        let max = self.max_possible_score();
        let steps = if step > 0.0 {
            ((max - min) / step).round() as u64
        } else {
            0
        };
        for k in 0..=steps {
            let score = min + k as f64 * step;
            let matches = self.ranges.iter().filter(|r| r.contains(score)).count();
            if matches != 1 {
                return Err(DefinitionError::UncoveredScore {
                    instrument_id: self.id.clone(),
                    score,
                    matches,
                });
            }
        }

        Ok(())
    }
}
