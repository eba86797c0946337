//! HTTP DTOs for screening endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing
//! independent evolution. Field names are camelCase on the wire.

use serde::{Deserialize, Serialize};

use crate::application::handlers::screening::{
    AnswerPayload, StructuredAnswer, SubmitScreeningCommand,
};
use crate::domain::instrument::Instrument;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Submission payload for `POST /api/screenings/:id/results`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitScreeningRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub answers: AnswersDto,
}

/// The two accepted answer shapes, distinguished by structure.
///
/// Older clients send a flat option-index array in prompt order; current
/// clients send explicit answer objects.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AnswersDto {
    Legacy(Vec<usize>),
    Structured(Vec<StructuredAnswerDto>),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredAnswerDto {
    pub question_id: u32,
    pub option_index: usize,
}

impl SubmitScreeningRequest {
    /// Resolves the wire payload into the canonical command.
    pub fn into_command(self, instrument_id: String) -> SubmitScreeningCommand {
        let answers = match self.answers {
            AnswersDto::Legacy(indexes) => AnswerPayload::Legacy(indexes),
            AnswersDto::Structured(answers) => AnswerPayload::Structured(
                answers
                    .into_iter()
                    .map(|a| StructuredAnswer {
                        prompt_id: a.question_id,
                        option_index: a.option_index,
                    })
                    .collect(),
            ),
        };
        SubmitScreeningCommand {
            instrument_id,
            answers,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Success response for a submission.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitScreeningResponse {
    pub message: String,
    pub id: String,
    pub total_score: f64,
    pub interpretation: String,
}

/// Error body for 4xx/5xx responses.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

/// Catalog entry summary for list responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentSummaryResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub prompt_count: usize,
}

impl From<&Instrument> for InstrumentSummaryResponse {
    fn from(instrument: &Instrument) -> Self {
        Self {
            id: instrument.id.clone(),
            title: instrument.title.clone(),
            description: instrument.description.clone(),
            duration: instrument.duration.clone(),
            prompt_count: instrument.prompt_count(),
        }
    }
}

/// Full instrument definition for client rendering.
///
/// Interpretation ranges stay server-side; clients only ever see the
/// resolved interpretation of a submitted result.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub instructions: Vec<String>,
    pub disclaimer: String,
    pub duration: String,
    pub prompts: Vec<PromptResponse>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptResponse {
    pub id: u32,
    pub text: String,
    pub options: Vec<OptionResponse>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionResponse {
    pub text: String,
    pub value: u32,
}

impl From<&Instrument> for InstrumentResponse {
    fn from(instrument: &Instrument) -> Self {
        Self {
            id: instrument.id.clone(),
            title: instrument.title.clone(),
            description: instrument.description.clone(),
            instructions: instrument.instructions.clone(),
            disclaimer: instrument.disclaimer.clone(),
            duration: instrument.duration.clone(),
            prompts: instrument
                .prompts
                .iter()
                .map(|p| PromptResponse {
                    id: p.id,
                    text: p.text.clone(),
                    options: p
                        .options
                        .iter()
                        .map(|o| OptionResponse {
                            text: o.text.clone(),
                            value: o.value,
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn legacy_answers_deserialize_from_flat_array() {
        let req: SubmitScreeningRequest = serde_json::from_value(json!({
            "firstName": "Ayşe",
            "lastName": "Yılmaz",
            "email": "ayse@example.com",
            "answers": [0, 1, 2, 3, 0, 1, 2]
        }))
        .unwrap();

        assert!(matches!(req.answers, AnswersDto::Legacy(ref v) if v.len() == 7));
        assert_eq!(req.phone, None);
    }

    #[test]
    fn structured_answers_deserialize_from_objects() {
        let req: SubmitScreeningRequest = serde_json::from_value(json!({
            "firstName": "Ayşe",
            "lastName": "Yılmaz",
            "email": "ayse@example.com",
            "phone": "0555 111 22 33",
            "answers": [
                { "questionId": 1, "optionIndex": 2 },
                { "questionId": 2, "optionIndex": 0 }
            ]
        }))
        .unwrap();

        match req.answers {
            AnswersDto::Structured(ref answers) => {
                assert_eq!(answers[0].question_id, 1);
                assert_eq!(answers[0].option_index, 2);
            }
            AnswersDto::Legacy(_) => panic!("expected structured answers"),
        }
    }

    #[test]
    fn into_command_preserves_payload_shape() {
        let req: SubmitScreeningRequest = serde_json::from_value(json!({
            "firstName": "Ayşe",
            "lastName": "Yılmaz",
            "email": "ayse@example.com",
            "answers": [1, 1, 1]
        }))
        .unwrap();

        let cmd = req.into_command("gad7".to_string());
        assert_eq!(cmd.instrument_id, "gad7");
        assert!(matches!(cmd.answers, AnswerPayload::Legacy(ref v) if v == &vec![1, 1, 1]));
    }

    #[test]
    fn error_response_omits_empty_details() {
        let body = serde_json::to_value(ErrorResponse::new("bad input")).unwrap();
        assert_eq!(body, json!({ "error": "bad input" }));

        let body =
            serde_json::to_value(ErrorResponse::with_details("failed", "store unavailable"))
                .unwrap();
        assert_eq!(body["details"], "store unavailable");
    }

    #[test]
    fn instrument_response_hides_interpretation_ranges() {
        let instrument = crate::domain::instrument::catalog::instrument("gad7").unwrap();
        let response = InstrumentResponse::from(instrument);
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["id"], "gad7");
        assert_eq!(value["prompts"].as_array().unwrap().len(), 7);
        assert!(value.get("ranges").is_none());
    }
}
