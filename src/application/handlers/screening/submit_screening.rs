//! SubmitScreeningHandler - scores a submission and persists the result.
//!
//! This is the single canonical submission path: one validation routine,
//! one scoring engine, one persistence port. Payload-shape differences
//! (legacy flat arrays vs structured answer objects) are resolved here,
//! before the session engine is touched.

use std::sync::Arc;

use crate::domain::contact::ContactInfo;
use crate::domain::errors::ScreeningError;
use crate::domain::session::Session;
use crate::ports::{DocumentId, ResultStore};

/// One answer in the structured payload shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructuredAnswer {
    pub prompt_id: u32,
    pub option_index: usize,
}

/// The two wire shapes clients submit answers in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerPayload {
    /// One option index per prompt, in instrument prompt order.
    Legacy(Vec<usize>),
    /// Explicit (prompt id, option index) pairs.
    Structured(Vec<StructuredAnswer>),
}

/// Command to score and persist one screening submission.
#[derive(Debug, Clone)]
pub struct SubmitScreeningCommand {
    pub instrument_id: String,
    pub answers: AnswerPayload,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
}

/// Result of a successful submission.
#[derive(Debug, Clone)]
pub struct SubmitScreeningOutcome {
    pub id: DocumentId,
    pub total_score: f64,
    pub interpretation: String,
}

/// Handler for screening submissions.
pub struct SubmitScreeningHandler {
    store: Arc<dyn ResultStore>,
}

impl SubmitScreeningHandler {
    pub fn new(store: Arc<dyn ResultStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: SubmitScreeningCommand,
    ) -> Result<SubmitScreeningOutcome, ScreeningError> {
        // 1. Validate respondent identity before any scoring work.
        let contact = ContactInfo::new(
            &cmd.first_name,
            &cmd.last_name,
            &cmd.email,
            cmd.phone.as_deref(),
        )?;

        // 2. Replay the answers into a fresh session.
        let mut session = Session::start(&cmd.instrument_id)?;
        for answer in resolve_answers(&session, &cmd.answers)? {
            session.select_response(answer.prompt_id, answer.option_index)?;
        }

        // 3. Score and persist.
        let result = session.compute_result(contact)?;
        let id = self.store.save(&result).await?;

        tracing::info!(
            instrument = %result.instrument_id,
            severity = %result.severity.as_str(),
            needs_follow_up = result.needs_follow_up,
            document_id = %id,
            "screening result persisted"
        );

        Ok(SubmitScreeningOutcome {
            id,
            total_score: result.total_score,
            interpretation: result.interpretation,
        })
    }
}

/// Normalizes both payload shapes to (prompt id, option index) pairs.
///
/// A legacy array is positional, so it must cover every prompt exactly.
fn resolve_answers(
    session: &Session<'_>,
    payload: &AnswerPayload,
) -> Result<Vec<StructuredAnswer>, ScreeningError> {
    match payload {
        AnswerPayload::Structured(answers) => Ok(answers.clone()),
        AnswerPayload::Legacy(indexes) => {
            let prompts = &session.instrument().prompts;
            if indexes.len() != prompts.len() {
                return Err(ScreeningError::validation(
                    "answers",
                    format!("expected {} answers, got {}", prompts.len(), indexes.len()),
                ));
            }
            Ok(prompts
                .iter()
                .zip(indexes)
                .map(|(prompt, index)| StructuredAnswer {
                    prompt_id: prompt.id,
                    option_index: *index,
                })
                .collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::result::ScreeningResult;
    use crate::ports::StoreError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockResultStore {
        saved: Mutex<Vec<ScreeningResult>>,
        fail_with: Option<StoreError>,
    }

    impl MockResultStore {
        fn new() -> Self {
            Self {
                saved: Mutex::new(Vec::new()),
                fail_with: None,
            }
        }

        fn failing(error: StoreError) -> Self {
            Self {
                saved: Mutex::new(Vec::new()),
                fail_with: Some(error),
            }
        }

        fn saved(&self) -> Vec<ScreeningResult> {
            self.saved.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ResultStore for MockResultStore {
        async fn save(&self, result: &ScreeningResult) -> Result<DocumentId, StoreError> {
            if let Some(error) = &self.fail_with {
                return Err(error.clone());
            }
            self.saved.lock().unwrap().push(result.clone());
            Ok(DocumentId::new("doc-1"))
        }
    }

    fn gad7_command(answers: AnswerPayload) -> SubmitScreeningCommand {
        SubmitScreeningCommand {
            instrument_id: "gad7".to_string(),
            answers,
            first_name: "Ayşe".to_string(),
            last_name: "Yılmaz".to_string(),
            email: "Ayse@Example.com".to_string(),
            phone: None,
        }
    }

    #[tokio::test]
    async fn submits_legacy_array_payload() {
        let store = Arc::new(MockResultStore::new());
        let handler = SubmitScreeningHandler::new(store.clone());

        let outcome = handler
            .handle(gad7_command(AnswerPayload::Legacy(vec![2; 7])))
            .await
            .unwrap();

        assert_eq!(outcome.total_score, 14.0);
        assert_eq!(outcome.id, DocumentId::new("doc-1"));
        let saved = store.saved();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].contact.email(), "ayse@example.com");
    }

    #[tokio::test]
    async fn structured_and_legacy_payloads_score_identically() {
        let store = Arc::new(MockResultStore::new());
        let handler = SubmitScreeningHandler::new(store.clone());

        let structured: Vec<StructuredAnswer> = (1..=7)
            .map(|prompt_id| StructuredAnswer {
                prompt_id,
                option_index: 2,
            })
            .collect();

        let legacy = handler
            .handle(gad7_command(AnswerPayload::Legacy(vec![2; 7])))
            .await
            .unwrap();
        let structured = handler
            .handle(gad7_command(AnswerPayload::Structured(structured)))
            .await
            .unwrap();

        assert_eq!(legacy.total_score, structured.total_score);
        assert_eq!(legacy.interpretation, structured.interpretation);
    }

    #[tokio::test]
    async fn rejects_legacy_array_of_wrong_length() {
        let handler = SubmitScreeningHandler::new(Arc::new(MockResultStore::new()));

        let result = handler
            .handle(gad7_command(AnswerPayload::Legacy(vec![0; 5])))
            .await;

        assert!(matches!(
            result,
            Err(ScreeningError::Validation { field, .. }) if field == "answers"
        ));
    }

    #[tokio::test]
    async fn rejects_unknown_instrument_before_touching_store() {
        let store = Arc::new(MockResultStore::new());
        let handler = SubmitScreeningHandler::new(store.clone());

        let mut cmd = gad7_command(AnswerPayload::Legacy(vec![0; 7]));
        cmd.instrument_id = "nope".to_string();

        assert!(matches!(
            handler.handle(cmd).await,
            Err(ScreeningError::UnknownInstrument(_))
        ));
        assert!(store.saved().is_empty());
    }

    #[tokio::test]
    async fn rejects_invalid_contact_before_scoring() {
        let store = Arc::new(MockResultStore::new());
        let handler = SubmitScreeningHandler::new(store.clone());

        let mut cmd = gad7_command(AnswerPayload::Legacy(vec![0; 7]));
        cmd.email = "user@mailinator.com".to_string();

        assert!(matches!(
            handler.handle(cmd).await,
            Err(ScreeningError::DisposableEmail { .. })
        ));
        assert!(store.saved().is_empty());
    }

    #[tokio::test]
    async fn incomplete_structured_payload_fails() {
        let handler = SubmitScreeningHandler::new(Arc::new(MockResultStore::new()));

        let partial = vec![StructuredAnswer {
            prompt_id: 1,
            option_index: 1,
        }];
        let result = handler
            .handle(gad7_command(AnswerPayload::Structured(partial)))
            .await;

        assert!(matches!(
            result,
            Err(ScreeningError::Incomplete { missing_prompts, total: 7 })
                if missing_prompts == vec![2, 3, 4, 5, 6, 7]
        ));
    }

    #[tokio::test]
    async fn store_failure_propagates() {
        let handler = SubmitScreeningHandler::new(Arc::new(MockResultStore::failing(
            StoreError::PermissionDenied,
        )));

        let result = handler
            .handle(gad7_command(AnswerPayload::Legacy(vec![1; 7])))
            .await;

        assert!(matches!(
            result,
            Err(ScreeningError::Store(StoreError::PermissionDenied))
        ));
    }
}
