//! Axum route handlers for the quiz API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::quiz::{generate_quiz, QuizItem};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateQuizRequest {
    pub sop_text: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateQuizResponse {
    pub quiz: Vec<QuizItem>,
}

/// POST /api/v1/quiz/generate
pub async fn handle_generate_quiz(
    State(state): State<AppState>,
    Json(request): Json<GenerateQuizRequest>,
) -> Result<Json<GenerateQuizResponse>, AppError> {
    if request.sop_text.trim().is_empty() {
        return Err(AppError::Validation("sop_text cannot be empty".to_string()));
    }

    let quiz = generate_quiz(&state.llm, &request.sop_text).await?;

    Ok(Json(GenerateQuizResponse { quiz }))
}
