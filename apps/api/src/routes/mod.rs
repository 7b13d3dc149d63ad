pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::evaluation;
use crate::quiz;
use crate::reports;
use crate::state::AppState;
use crate::training;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Problem-solving evaluation
        .route(
            "/api/v1/problem-solving/feedback",
            post(evaluation::handlers::handle_feedback),
        )
        // Roleplay training
        .route(
            "/api/v1/ai-training/roleplay-chat",
            post(training::handlers::handle_roleplay_chat),
        )
        .route(
            "/api/v1/ai-training/roleplay-feedback",
            post(training::handlers::handle_roleplay_feedback),
        )
        // Quiz generation
        .route(
            "/api/v1/quiz/generate",
            post(quiz::handlers::handle_generate_quiz),
        )
        // Progress reports
        .route(
            "/api/v1/reports/generate",
            post(reports::handlers::handle_generate_report),
        )
        .with_state(state)
}
