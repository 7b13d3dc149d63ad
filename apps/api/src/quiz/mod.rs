//! Quiz generation: turns SOP text into a list of training questions.
//!
//! Unlike the evaluation pipeline, a malformed question list is an error,
//! not a fallback — there is no degraded quiz worth serving, so parse
//! failures surface to the caller.

pub mod handlers;
pub mod prompts;

use serde::{Deserialize, Serialize};

use crate::llm_client::{ChatClient, LlmError, MAX_TOKENS, TEMPERATURE};

fn default_difficulty() -> String {
    "easy".to_string()
}

/// One generated quiz question. `options` is empty for fill-in-the-blank
/// questions; `difficulty`, `source_text`, and `tags` are optional in the
/// model's output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizItem {
    pub sop_topic: String,
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    pub answer: String,
    #[serde(rename = "type")]
    pub question_type: String,
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
    #[serde(default)]
    pub source_text: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Generates quiz questions from one SOP document.
pub async fn generate_quiz(llm: &ChatClient, sop_text: &str) -> Result<Vec<QuizItem>, LlmError> {
    let prompt = prompts::build_quiz_prompt(sop_text);
    let completion = llm.chat(&prompt, MAX_TOKENS, TEMPERATURE).await?;
    parse_quiz(&completion)
}

/// Parses the completion text into a question list, tolerating the usual
/// code-fence wrappers around the JSON array.
pub(crate) fn parse_quiz(raw: &str) -> Result<Vec<QuizItem>, LlmError> {
    let candidate = extract_array(raw);
    serde_json::from_str(candidate).map_err(LlmError::Parse)
}

/// Extracts the candidate JSON array: strips fences and a leading `json`
/// language tag, then takes the greedy span from the first `[` to the last
/// `]`. With no brackets, the cleaned text itself is the candidate.
fn extract_array(raw: &str) -> &str {
    let mut text = raw.trim();

    if let Some(rest) = text.strip_prefix("```") {
        text = rest.trim_start();
    }
    if text
        .get(..4)
        .is_some_and(|tag| tag.eq_ignore_ascii_case("json"))
    {
        text = text[4..].trim_start();
    }
    if let Some(rest) = text.strip_suffix("```") {
        text = rest.trim_end();
    }

    match (text.find('['), text.rfind(']')) {
        (Some(start), Some(end)) if start < end => &text[start..=end],
        _ => text,
    }
}
