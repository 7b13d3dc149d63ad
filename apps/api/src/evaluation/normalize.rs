//! Response Normalizer — turns raw completion text into a well-formed
//! `EvaluationRecord`, never failing.
//!
//! Chat models wrap JSON in prose and code fences no matter how firmly the
//! prompt forbids it. The normalizer strips the known wrappers, extracts the
//! widest brace-delimited span, parses it strictly (all seven top-level
//! fields required), repairs the optional parts, and degrades to a fixed
//! fallback record when nothing parseable remains.

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::evaluation::record::{EvaluationRecord, Scores};

/// Strict parse target. The seven required top-level fields must all be
/// present; `redlines`/`assumptions` are repaired afterwards and score
/// sub-fields default to 0 via `Scores`.
#[derive(Debug, Deserialize)]
struct RawRecord {
    overall_evaluation: String,
    analysis_feedback: String,
    solution_feedback: String,
    professionalism_feedback: String,
    improvement_suggestions: String,
    scores: Scores,
    pass: bool,
    redlines: Option<Value>,
    assumptions: Option<Value>,
}

/// Normalizes raw completion text into an `EvaluationRecord`.
///
/// Parse failures (including missing required fields) are absorbed into the
/// fallback record rather than surfaced: a model hiccup must not fail the
/// trainee's request.
pub fn normalize(raw: &str) -> EvaluationRecord {
    let candidate = extract_payload(raw);
    match serde_json::from_str::<RawRecord>(candidate) {
        Ok(parsed) => repair(parsed),
        Err(err) => {
            warn!("evaluation output failed to normalize: {err}");
            EvaluationRecord::parse_fallback(&err.to_string())
        }
    }
}

/// Extracts the candidate JSON payload from raw model output.
///
/// Strips a leading code-fence marker, a leading `json` language tag
/// (case-insensitive), and a trailing fence, then takes the greedy span from
/// the first `{` to the last `}`. With no braces at all, the cleaned text
/// itself is the candidate.
pub(crate) fn extract_payload(raw: &str) -> &str {
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

    match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if start < end => &text[start..=end],
        _ => text,
    }
}

fn repair(raw: RawRecord) -> EvaluationRecord {
    EvaluationRecord {
        overall_evaluation: raw.overall_evaluation,
        analysis_feedback: raw.analysis_feedback,
        solution_feedback: raw.solution_feedback,
        professionalism_feedback: raw.professionalism_feedback,
        improvement_suggestions: raw.improvement_suggestions,
        scores: raw.scores,
        pass: raw.pass,
        redlines: string_list(raw.redlines),
        assumptions: string_list(raw.assumptions),
    }
}

/// Coerces an optional JSON value into a list of strings. Anything that is
/// not an array (absent, null, a bare string) becomes an empty list;
/// non-string array elements are dropped.
fn string_list(value: Option<Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_PAYLOAD: &str = r#"{
        "overall_evaluation": "整体表现良好",
        "analysis_feedback": "问题定位准确",
        "solution_feedback": "方案可执行",
        "professionalism_feedback": "表达专业",
        "improvement_suggestions": "建议补充预防措施",
        "scores": {
            "analysis": 4,
            "solution": 4.5,
            "professionalism": 4,
            "improvement": 3,
            "weighted_total": 4.1
        },
        "pass": true,
        "redlines": [],
        "assumptions": ["假设门店当天正常营业"]
    }"#;

    #[test]
    fn test_plain_payload_parses_unchanged() {
        let record = normalize(FULL_PAYLOAD);
        assert!(record.pass);
        assert_eq!(record.overall_evaluation, "整体表现良好");
        assert!((record.scores.weighted_total - 4.1).abs() < f64::EPSILON);
        assert_eq!(record.assumptions, vec!["假设门店当天正常营业"]);
        assert!(record.redlines.is_empty());
    }

    #[test]
    fn test_fenced_payload_equals_unfenced() {
        let fenced = format!("```json\n{FULL_PAYLOAD}\n```");
        assert_eq!(normalize(&fenced), normalize(FULL_PAYLOAD));
    }

    #[test]
    fn test_uppercase_language_tag_is_stripped() {
        let fenced = format!("```JSON\n{FULL_PAYLOAD}\n```");
        assert_eq!(normalize(&fenced), normalize(FULL_PAYLOAD));
    }

    #[test]
    fn test_leading_prose_before_fence_is_ignored() {
        let wrapped = format!("Sure! Here is the evaluation:\n```json\n{FULL_PAYLOAD}\n```");
        assert_eq!(normalize(&wrapped), normalize(FULL_PAYLOAD));
    }

    #[test]
    fn test_missing_redlines_defaults_to_empty_array() {
        let payload = r#"{
            "overall_evaluation": "ok",
            "analysis_feedback": "a",
            "solution_feedback": "s",
            "professionalism_feedback": "p",
            "improvement_suggestions": "i",
            "scores": {},
            "pass": false
        }"#;
        let record = normalize(payload);
        assert!(record.redlines.is_empty());
        assert!(record.assumptions.is_empty());
        assert_eq!(record.scores, Scores::default());
        assert!(!record.pass);
    }

    #[test]
    fn test_non_array_redlines_is_coerced_to_empty() {
        let payload = r#"{
            "overall_evaluation": "ok",
            "analysis_feedback": "a",
            "solution_feedback": "s",
            "professionalism_feedback": "p",
            "improvement_suggestions": "i",
            "scores": {"analysis": 2},
            "pass": false,
            "redlines": "无",
            "assumptions": null
        }"#;
        let record = normalize(payload);
        assert!(record.redlines.is_empty());
        assert!(record.assumptions.is_empty());
        assert!((record.scores.analysis - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_non_string_array_elements_are_dropped() {
        let payload = r#"{
            "overall_evaluation": "ok",
            "analysis_feedback": "a",
            "solution_feedback": "s",
            "professionalism_feedback": "p",
            "improvement_suggestions": "i",
            "scores": {},
            "pass": true,
            "redlines": ["食品安全违规", 42, {"note": "x"}]
        }"#;
        let record = normalize(payload);
        assert_eq!(record.redlines, vec!["食品安全违规"]);
    }

    #[test]
    fn test_truncated_payload_yields_fallback() {
        let record = normalize(r#"{"overall_evaluation": "incomple"#);
        assert!(!record.pass);
        assert_eq!(record.scores, Scores::default());
        assert_eq!(record.redlines.len(), 1);
        assert!(record.redlines[0].contains("评估结果解析失败"));
        assert_eq!(record.assumptions.len(), 1);
    }

    #[test]
    fn test_missing_required_field_yields_fallback() {
        // No `pass` field.
        let payload = r#"{
            "overall_evaluation": "ok",
            "analysis_feedback": "a",
            "solution_feedback": "s",
            "professionalism_feedback": "p",
            "improvement_suggestions": "i",
            "scores": {}
        }"#;
        let record = normalize(payload);
        assert!(!record.pass);
        assert_eq!(record.redlines.len(), 1);
    }

    #[test]
    fn test_braceless_text_yields_fallback() {
        let record = normalize("抱歉，我无法完成这次评估。");
        assert!(!record.pass);
        assert_eq!(record.scores, Scores::default());
    }

    #[test]
    fn test_normalize_is_idempotent_on_canonical_output() {
        let record = normalize(FULL_PAYLOAD);
        let round_tripped = normalize(&record.to_canonical_json());
        assert_eq!(round_tripped, record);
    }

    #[test]
    fn test_fallback_record_round_trips_through_normalize() {
        let fallback = normalize("not json at all");
        let round_tripped = normalize(&fallback.to_canonical_json());
        assert_eq!(round_tripped, fallback);
    }

    #[test]
    fn test_extract_payload_takes_widest_brace_span() {
        let raw = "prefix {\"a\": {\"b\": 1}} suffix";
        assert_eq!(extract_payload(raw), "{\"a\": {\"b\": 1}}");
    }

    #[test]
    fn test_extract_payload_without_braces_returns_cleaned_text() {
        assert_eq!(extract_payload("```json\nplain text\n```"), "plain text");
    }

    #[test]
    fn test_extract_payload_handles_multibyte_leading_text() {
        // Leading CJK text must not trip the language-tag check.
        let raw = "好的{\"x\": 1}";
        assert_eq!(extract_payload(raw), "{\"x\": 1}");
    }
}
