//! Data model for the problem-solving evaluation pipeline.

use serde::{Deserialize, Serialize};

/// One evaluation request: the case under discussion plus the trainee's
/// submitted analysis. Constructed by the caller, consumed once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationRequest {
    pub case_title: String,
    pub case_background: String,
    pub case_problem: String,
    pub user_response: String,
    pub user_role: String,
    pub skill_dimension: String,
}

/// Per-criterion scores on a 0-5 scale. Sub-fields the model omits
/// deserialize to 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scores {
    #[serde(default)]
    pub analysis: f64,
    #[serde(default)]
    pub solution: f64,
    #[serde(default)]
    pub professionalism: f64,
    #[serde(default)]
    pub improvement: f64,
    #[serde(default)]
    pub weighted_total: f64,
}

/// The normalized evaluation returned to the caller. Every field is always
/// present, whether the record came from a successful parse or the fallback
/// path. Never mutated after construction, never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRecord {
    pub overall_evaluation: String,
    pub analysis_feedback: String,
    pub solution_feedback: String,
    pub professionalism_feedback: String,
    pub improvement_suggestions: String,
    pub scores: Scores,
    pub pass: bool,
    pub redlines: Vec<String>,
    pub assumptions: Vec<String>,
}

/// Fixed feedback text used for every feedback field of a fallback record.
const FALLBACK_FEEDBACK: &str = "抱歉，AI 评估结果生成失败，本次未能给出有效反馈，请稍后重试。";

/// Fixed caveat recorded in `assumptions` of a fallback record.
const FALLBACK_ASSUMPTION: &str = "本次评估未通过格式校验，结果仅供参考。";

impl EvaluationRecord {
    /// The deterministic record returned when the model's output cannot be
    /// parsed into the expected shape. All scores are 0 and `pass` is false;
    /// `detail` describes the parse error for the single redline entry.
    pub fn parse_fallback(detail: &str) -> Self {
        EvaluationRecord {
            overall_evaluation: FALLBACK_FEEDBACK.to_string(),
            analysis_feedback: FALLBACK_FEEDBACK.to_string(),
            solution_feedback: FALLBACK_FEEDBACK.to_string(),
            professionalism_feedback: FALLBACK_FEEDBACK.to_string(),
            improvement_suggestions: FALLBACK_FEEDBACK.to_string(),
            scores: Scores::default(),
            pass: false,
            redlines: vec![format!("评估结果解析失败：{detail}")],
            assumptions: vec![FALLBACK_ASSUMPTION.to_string()],
        }
    }

    /// Canonical text form: stable key order (declaration order above) and
    /// two-space indentation. This is what callers receive over the wire.
    pub fn to_canonical_json(&self) -> String {
        serde_json::to_string_pretty(self).expect("EvaluationRecord always serializes")
    }
}
