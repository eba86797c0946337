//! Integration tests for the screening submission flow.
//!
//! These tests drive the application handler against the in-memory store,
//! the same wiring the HTTP layer uses: DTO deserialization, payload
//! resolution, scoring, and persistence.

use std::sync::Arc;

use serde_json::json;

use screening_backend::adapters::content_store::InMemoryResultStore;
use screening_backend::adapters::http::screening::dto::SubmitScreeningRequest;
use screening_backend::application::handlers::screening::{
    AnswerPayload, SubmitScreeningCommand, SubmitScreeningHandler,
};
use screening_backend::domain::errors::ScreeningError;
use screening_backend::domain::instrument::Severity;
use screening_backend::ports::StoreError;

fn handler_with_store() -> (SubmitScreeningHandler, Arc<InMemoryResultStore>) {
    let store = Arc::new(InMemoryResultStore::new());
    (SubmitScreeningHandler::new(store.clone()), store)
}

fn beck_command(option_index: usize) -> SubmitScreeningCommand {
    SubmitScreeningCommand {
        instrument_id: "beck-anxiety".to_string(),
        answers: AnswerPayload::Legacy(vec![option_index; 21]),
        first_name: "Ayşe".to_string(),
        last_name: "Yılmaz".to_string(),
        email: "Ayse.Yilmaz@Example.com".to_string(),
        phone: Some(" 0555 111 22 33 ".to_string()),
    }
}

#[tokio::test]
async fn beck_anxiety_all_ones_scores_moderate_without_follow_up() {
    let (handler, store) = handler_with_store();

    let outcome = handler.handle(beck_command(1)).await.unwrap();

    assert_eq!(outcome.total_score, 21.0);
    assert_eq!(outcome.id.as_str(), "mem-1");

    let saved = store.saved();
    assert_eq!(saved.len(), 1);
    let result = &saved[0];
    assert_eq!(result.severity, Severity::Moderate);
    assert!(!result.needs_follow_up);
    assert_eq!(result.answers.len(), 21);
    // Stored contact fields are normalized.
    assert_eq!(result.contact.email(), "ayse.yilmaz@example.com");
    assert_eq!(result.contact.phone(), Some("0555 111 22 33"));
}

#[tokio::test]
async fn beck_anxiety_all_maximum_scores_high_with_follow_up() {
    let (handler, store) = handler_with_store();

    let outcome = handler.handle(beck_command(3)).await.unwrap();

    assert_eq!(outcome.total_score, 63.0);
    let result = &store.saved()[0];
    assert_eq!(result.severity, Severity::High);
    assert!(result.needs_follow_up);
}

#[tokio::test]
async fn wire_request_resolves_to_same_result_as_direct_command() {
    let (handler, store) = handler_with_store();

    let request: SubmitScreeningRequest = serde_json::from_value(json!({
        "firstName": "Ayşe",
        "lastName": "Yılmaz",
        "email": "ayse@example.com",
        "answers": [
            { "questionId": 1, "optionIndex": 2 },
            { "questionId": 2, "optionIndex": 2 },
            { "questionId": 3, "optionIndex": 2 },
            { "questionId": 4, "optionIndex": 2 },
            { "questionId": 5, "optionIndex": 2 },
            { "questionId": 6, "optionIndex": 2 },
            { "questionId": 7, "optionIndex": 2 }
        ]
    }))
    .unwrap();

    let outcome = handler
        .handle(request.into_command("gad7".to_string()))
        .await
        .unwrap();

    assert_eq!(outcome.total_score, 14.0);
    assert_eq!(store.saved()[0].severity, Severity::Moderate);
}

#[tokio::test]
async fn disposable_email_is_rejected_before_any_write() {
    let (handler, store) = handler_with_store();

    let mut cmd = beck_command(1);
    cmd.email = "throwaway@yopmail.com".to_string();

    let result = handler.handle(cmd).await;

    assert!(matches!(
        result,
        Err(ScreeningError::DisposableEmail { domain }) if domain == "yopmail.com"
    ));
    assert!(store.is_empty());
}

#[tokio::test]
async fn permission_denied_from_store_reaches_the_caller() {
    let store = Arc::new(InMemoryResultStore::failing(StoreError::PermissionDenied));
    let handler = SubmitScreeningHandler::new(store);

    let result = handler.handle(beck_command(1)).await;

    assert!(matches!(
        result,
        Err(ScreeningError::Store(StoreError::PermissionDenied))
    ));
}

#[tokio::test]
async fn overwriting_an_answer_keeps_one_response_per_prompt() {
    let (handler, store) = handler_with_store();

    // The same prompt answered twice in a structured payload: last one wins.
    let request: SubmitScreeningRequest = serde_json::from_value(json!({
        "firstName": "Ayşe",
        "lastName": "Yılmaz",
        "email": "ayse@example.com",
        "answers": [
            { "questionId": 1, "optionIndex": 3 },
            { "questionId": 1, "optionIndex": 0 },
            { "questionId": 2, "optionIndex": 0 },
            { "questionId": 3, "optionIndex": 0 },
            { "questionId": 4, "optionIndex": 0 },
            { "questionId": 5, "optionIndex": 0 },
            { "questionId": 6, "optionIndex": 0 },
            { "questionId": 7, "optionIndex": 0 }
        ]
    }))
    .unwrap();

    let outcome = handler
        .handle(request.into_command("gad7".to_string()))
        .await
        .unwrap();

    assert_eq!(outcome.total_score, 0.0);
    assert_eq!(store.saved()[0].answers.len(), 7);
}
