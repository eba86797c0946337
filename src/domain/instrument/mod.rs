//! Screening instrument definitions and the static catalog.

pub mod catalog;
mod definition;

pub use definition::{
    AnswerOption, DefinitionError, Instrument, InterpretationRange, Prompt, ScoringMethod,
    Severity, MAX_OPTIONS, MIN_OPTIONS,
};
