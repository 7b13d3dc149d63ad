//! Problem-solving evaluation pipeline: prompt → completion → normalized record.
//!
//! The one deliberate asymmetry: configuration/transport/shape errors from
//! the LLM client surface to the caller, but malformed model *output* never
//! does — it degrades into a fallback record so a model hiccup cannot fail
//! the trainee's request.

pub mod handlers;
mod normalize;
pub mod prompts;
mod record;

pub use record::{EvaluationRecord, EvaluationRequest, Scores};

use crate::llm_client::{ChatClient, LlmError, MAX_TOKENS, TEMPERATURE};

/// Runs the full pipeline and returns the canonical JSON text of the
/// resulting record.
pub async fn evaluate(llm: &ChatClient, request: &EvaluationRequest) -> Result<String, LlmError> {
    let prompt = prompts::build_evaluation_prompt(request);
    let completion = llm.chat(&prompt, MAX_TOKENS, TEMPERATURE).await?;
    let record = normalize::normalize(&completion);
    Ok(record.to_canonical_json())
}
