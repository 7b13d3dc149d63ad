//! Employee progress reports: quiz-history analysis generated by the model.

pub mod handlers;
pub mod prompts;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::llm_client::{ChatClient, LlmError, TEMPERATURE};

/// Reports summarize an entire training history; give the model more room
/// than the default completion budget.
const REPORT_MAX_TOKENS: u32 = 2000;

/// One answered quiz question from the employee's training history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizAttempt {
    pub topic: String,
    pub question: String,
    pub user_answer: String,
    pub correct_answer: String,
    pub is_correct: bool,
    pub answered_at: DateTime<Utc>,
}

/// Generates a progress report for one employee from their quiz attempts.
pub async fn generate_progress_report(
    llm: &ChatClient,
    employee: &str,
    attempts: &[QuizAttempt],
) -> Result<String, LlmError> {
    let history = prompts::format_quiz_history(attempts);
    let prompt = prompts::build_report_prompt(employee, &history);
    llm.chat(&prompt, REPORT_MAX_TOKENS, TEMPERATURE).await
}
