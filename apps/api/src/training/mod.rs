//! Roleplay training: interactive skill-test chat and scenario feedback.
//!
//! Both endpoints return free text from the model, not normalized records —
//! the trainee reads the reply directly.

pub mod handlers;
pub mod prompts;

use serde::{Deserialize, Serialize};

use crate::llm_client::{ChatClient, LlmError, MAX_TOKENS, TEMPERATURE};

/// One message of a recorded roleplay conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: String,
    pub content: String,
}

/// A past test session, summarized into the chat prompt for continuity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestSession {
    pub topic: String,
    #[serde(default)]
    pub conversation: Vec<ChatTurn>,
}

/// Generates a roleplay-coach reply for a trainee message on a test topic.
pub async fn roleplay_chat(
    llm: &ChatClient,
    message: &str,
    topic: &str,
    history: &[TestSession],
) -> Result<String, LlmError> {
    let prompt = prompts::build_roleplay_chat_prompt(message, topic, history);
    llm.chat(&prompt, MAX_TOKENS, TEMPERATURE).await
}

/// Generates structured feedback (strengths / improvements / actions) for a
/// trainee's response to a roleplay scenario.
pub async fn roleplay_feedback(
    llm: &ChatClient,
    scenario: &str,
    user_response: &str,
) -> Result<String, LlmError> {
    let prompt = prompts::build_roleplay_feedback_prompt(scenario, user_response);
    llm.chat(&prompt, MAX_TOKENS, TEMPERATURE).await
}
