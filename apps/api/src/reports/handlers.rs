//! Axum route handlers for the reports API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::reports::{generate_progress_report, QuizAttempt};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateReportRequest {
    pub employee_id: Uuid,
    pub attempts: Vec<QuizAttempt>,
}

#[derive(Debug, Serialize)]
pub struct GenerateReportResponse {
    pub report_id: Uuid,
    pub employee_id: Uuid,
    pub report: String,
}

/// POST /api/v1/reports/generate
///
/// The quiz history travels in the request body; this service holds no
/// submission storage of its own.
pub async fn handle_generate_report(
    State(state): State<AppState>,
    Json(request): Json<GenerateReportRequest>,
) -> Result<Json<GenerateReportResponse>, AppError> {
    if request.attempts.is_empty() {
        return Err(AppError::Validation(
            "attempts cannot be empty".to_string(),
        ));
    }

    let report = generate_progress_report(
        &state.llm,
        &request.employee_id.to_string(),
        &request.attempts,
    )
    .await?;

    Ok(Json(GenerateReportResponse {
        report_id: Uuid::new_v4(),
        employee_id: request.employee_id,
        report,
    }))
}
