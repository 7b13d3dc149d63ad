//! Axum route handlers for the problem-solving evaluation API.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::evaluation::{evaluate, EvaluationRequest};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    /// Canonical JSON text of the evaluation record (success or fallback).
    pub feedback: String,
}

/// POST /api/v1/problem-solving/feedback
///
/// No field validation on purpose: empty strings are legal pipeline inputs
/// and still produce a well-formed record.
pub async fn handle_feedback(
    State(state): State<AppState>,
    Json(request): Json<EvaluationRequest>,
) -> Result<Json<FeedbackResponse>, AppError> {
    let feedback = evaluate(&state.llm, &request).await?;
    Ok(Json(FeedbackResponse { feedback }))
}
