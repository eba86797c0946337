//! Screening submission handling.

mod submit_screening;

pub use submit_screening::{
    AnswerPayload, StructuredAnswer, SubmitScreeningCommand, SubmitScreeningHandler,
    SubmitScreeningOutcome,
};
