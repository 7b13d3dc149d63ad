//! Axum route handlers for the AI training API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;
use crate::training::{roleplay_chat, roleplay_feedback, TestSession};

#[derive(Debug, Deserialize)]
pub struct RoleplayChatRequest {
    pub message: String,
    pub topic: String,
    #[serde(default)]
    pub test_history: Vec<TestSession>,
}

#[derive(Debug, Serialize)]
pub struct RoleplayChatResponse {
    pub response: String,
}

#[derive(Debug, Deserialize)]
pub struct RoleplayFeedbackRequest {
    pub scenario: String,
    pub user_response: String,
}

#[derive(Debug, Serialize)]
pub struct RoleplayFeedbackResponse {
    pub feedback: String,
}

/// POST /api/v1/ai-training/roleplay-chat
pub async fn handle_roleplay_chat(
    State(state): State<AppState>,
    Json(request): Json<RoleplayChatRequest>,
) -> Result<Json<RoleplayChatResponse>, AppError> {
    if request.message.trim().is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }

    let response = roleplay_chat(
        &state.llm,
        &request.message,
        &request.topic,
        &request.test_history,
    )
    .await?;

    Ok(Json(RoleplayChatResponse { response }))
}

/// POST /api/v1/ai-training/roleplay-feedback
pub async fn handle_roleplay_feedback(
    State(state): State<AppState>,
    Json(request): Json<RoleplayFeedbackRequest>,
) -> Result<Json<RoleplayFeedbackResponse>, AppError> {
    if request.scenario.trim().is_empty() {
        return Err(AppError::Validation("scenario cannot be empty".to_string()));
    }

    let feedback = roleplay_feedback(&state.llm, &request.scenario, &request.user_response).await?;

    Ok(Json(RoleplayFeedbackResponse { feedback }))
}
