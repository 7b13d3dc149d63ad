//! Prompt construction for quiz generation from SOP text.

/// Exact item schema the model must return, shown verbatim so field names
/// match `QuizItem` one-to-one.
const QUIZ_SCHEMA: &str = r#"[
  {
    "sop_topic": "topic this question covers",
    "question": "the question text",
    "options": ["option A", "option B", "option C", "option D"],
    "answer": "the correct answer",
    "type": "choice",
    "difficulty": "easy",
    "source_text": "the SOP sentence this question is based on",
    "tags": ["keyword"]
  }
]"#;

/// Renders the quiz-generation prompt for one SOP document.
///
/// Pure function of its input; the SOP text is embedded verbatim.
pub fn build_quiz_prompt(sop_text: &str) -> String {
    format!(
        "You are a training content generator for restaurant employees.\n\
         Based on the following SOP, generate 3 multiple choice questions and 1 fill-in-the-blank question.\n\
         \n\
         SOP:\n\
         \"\"\"\n\
         {sop_text}\n\
         \"\"\"\n\
         \n\
         Format the output as a JSON list of objects with exactly this shape\n\
         (use \"type\": \"fill_blank\" and an empty options list for the fill-in-the-blank question):\n\
         {schema}\n\
         \n\
         Return only the JSON list, with no surrounding prose or code fences.",
        schema = QUIZ_SCHEMA,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_sop_text_verbatim() {
        let sop = "高压锅最多只能装到 3/4 满。";
        let prompt = build_quiz_prompt(sop);
        assert!(prompt.contains(sop));
    }

    #[test]
    fn test_prompt_requests_question_mix_and_schema() {
        let prompt = build_quiz_prompt("Fire extinguisher: Hold, Pull, Hold, Press.");
        assert!(prompt.contains("3 multiple choice questions and 1 fill-in-the-blank question"));
        assert!(prompt.contains("\"sop_topic\""));
        assert!(prompt.contains("\"fill_blank\""));
        assert!(prompt.contains("Return only the JSON list"));
    }

    #[test]
    fn test_empty_sop_still_produces_a_prompt() {
        let prompt = build_quiz_prompt("");
        assert!(prompt.contains("training content generator"));
    }
}
