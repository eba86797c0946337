//! HTTP handlers for screening endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::screening::SubmitScreeningHandler;
use crate::domain::errors::ScreeningError;
use crate::domain::instrument::catalog;
use crate::ports::StoreError;

use super::dto::{
    ErrorResponse, InstrumentResponse, InstrumentSummaryResponse, SubmitScreeningRequest,
    SubmitScreeningResponse,
};

#[derive(Clone)]
pub struct ScreeningHandlers {
    submit_handler: Arc<SubmitScreeningHandler>,
}

impl ScreeningHandlers {
    pub fn new(submit_handler: Arc<SubmitScreeningHandler>) -> Self {
        Self { submit_handler }
    }
}

/// GET /api/screenings - List available instruments
pub async fn list_screenings() -> Response {
    let summaries: Vec<InstrumentSummaryResponse> = catalog::all_instruments()
        .iter()
        .map(InstrumentSummaryResponse::from)
        .collect();
    (StatusCode::OK, Json(summaries)).into_response()
}

/// GET /api/screenings/:id - Full instrument definition
pub async fn get_screening(Path(instrument_id): Path<String>) -> Response {
    match catalog::instrument(&instrument_id) {
        Some(instrument) => {
            (StatusCode::OK, Json(InstrumentResponse::from(instrument))).into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(format!(
                "Screening '{}' not found",
                instrument_id
            ))),
        )
            .into_response(),
    }
}

/// POST /api/screenings/:id/results - Score and persist a submission
pub async fn submit_screening(
    State(handlers): State<ScreeningHandlers>,
    Path(instrument_id): Path<String>,
    Json(req): Json<SubmitScreeningRequest>,
) -> Response {
    let cmd = req.into_command(instrument_id);

    match handlers.submit_handler.handle(cmd).await {
        Ok(outcome) => {
            let response = SubmitScreeningResponse {
                message: "Screening result saved".to_string(),
                id: outcome.id.to_string(),
                total_score: outcome.total_score,
                interpretation: outcome.interpretation,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => map_screening_error(e),
    }
}

/// Maps the error taxonomy to HTTP responses.
///
/// Respondent errors surface with their actionable message; configuration
/// and infrastructure faults are logged and answered generically.
fn map_screening_error(error: ScreeningError) -> Response {
    match &error {
        ScreeningError::Validation { .. }
        | ScreeningError::DisposableEmail { .. }
        | ScreeningError::OptionOutOfRange { .. }
        | ScreeningError::Incomplete { .. } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(error.to_string())),
        )
            .into_response(),

        // Malformed client payload referencing a prompt outside the instrument.
        ScreeningError::UnknownPrompt { .. } => {
            tracing::warn!(%error, "submission referenced an unknown prompt");
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(error.to_string())),
            )
                .into_response()
        }

        ScreeningError::UnknownInstrument(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(format!("Screening '{}' not found", id))),
        )
            .into_response(),

        ScreeningError::Store(StoreError::PermissionDenied) => {
            tracing::error!("content store rejected the write credential");
            (
                StatusCode::FORBIDDEN,
                Json(ErrorResponse::new(
                    "The result could not be saved: write access denied",
                )),
            )
                .into_response()
        }

        ScreeningError::Store(store_error) => {
            tracing::error!(%store_error, "content store write failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::with_details(
                    "The result could not be saved, please try again",
                    "content store unavailable",
                )),
            )
                .into_response()
        }

        ScreeningError::ScoringConfiguration { .. } => {
            tracing::error!(%error, "instrument definition does not cover a computed score");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::with_details(
                    "The result could not be processed",
                    "instrument configuration error",
                )),
            )
                .into_response()
        }
    }
}
