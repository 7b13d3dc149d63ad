//! Prompt construction for employee progress reports.
//!
//! The report prompt is English: managers consume these reports, and the
//! analysis sections follow the business-reporting format.

use crate::reports::QuizAttempt;

/// Formats quiz attempts into the history block embedded in the prompt, one
/// stanza per attempt in the order given.
pub fn format_quiz_history(attempts: &[QuizAttempt]) -> String {
    attempts
        .iter()
        .map(|attempt| {
            format!(
                "=== {} ===\n\
                 Topic: {}\n\
                 Question: {}\n\
                 User Answer: {}\n\
                 Correct Answer: {}\n\
                 Correct: {}",
                attempt.answered_at.format("%Y-%m-%d %H:%M:%S"),
                attempt.topic,
                attempt.question,
                attempt.user_answer,
                attempt.correct_answer,
                if attempt.is_correct { "yes" } else { "no" },
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Renders the full analysis prompt for one employee's training history.
pub fn build_report_prompt(employee: &str, formatted_history: &str) -> String {
    format!(
        "**Employee Training Analysis Request**\n\
         \n\
         Employee: {employee}\n\
         Training History Overview:\n\
         {formatted_history}\n\
         \n\
         Please analyze this employee's quiz performance and provide:\n\
         \n\
         1. Knowledge Assessment:\n\
         \x20  - Strongest areas (topics with consistent correct answers)\n\
         \x20  - Weakest areas (frequent mistakes or uncertainties)\n\
         \x20  - Notable improvement trends over time\n\
         \n\
         2. Behavioral Insights:\n\
         \x20  - Answer patterns (e.g., guessing, confidence indicators)\n\
         \x20  - Response quality (detailed vs. vague answers)\n\
         \n\
         3. Recommendations:\n\
         \x20  - Specific topics needing reinforcement\n\
         \x20  - Suggested training methods\n\
         \x20  - Any concerning patterns\n\
         \n\
         Write in professional business English, using bullet points for clarity."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn attempt(topic: &str, correct: bool) -> QuizAttempt {
        QuizAttempt {
            topic: topic.to_string(),
            question: format!("Question about {topic}"),
            user_answer: "Hold, Pull, Hold, Press".to_string(),
            correct_answer: "Hold, Pull, Hold, Press".to_string(),
            is_correct: correct,
            answered_at: Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_history_block_contains_attempt_fields() {
        let history = format_quiz_history(&[attempt("Fire Safety", true)]);
        assert!(history.contains("=== 2025-03-14 09:30:00 ==="));
        assert!(history.contains("Topic: Fire Safety"));
        assert!(history.contains("Question: Question about Fire Safety"));
        assert!(history.contains("User Answer: Hold, Pull, Hold, Press"));
        assert!(history.contains("Correct: yes"));
    }

    #[test]
    fn test_history_block_preserves_attempt_order() {
        let history = format_quiz_history(&[
            attempt("Fire Safety", true),
            attempt("Dish Preparation", false),
        ]);
        let first = history.find("Fire Safety").unwrap();
        let second = history.find("Dish Preparation").unwrap();
        assert!(first < second);
        assert!(history.contains("Correct: no"));
    }

    #[test]
    fn test_report_prompt_embeds_employee_and_history() {
        let history = format_quiz_history(&[attempt("Fire Safety", true)]);
        let prompt = build_report_prompt("d33b2c44", &history);
        assert!(prompt.contains("Employee: d33b2c44"));
        assert!(prompt.contains("Topic: Fire Safety"));
        assert!(prompt.contains("1. Knowledge Assessment:"));
        assert!(prompt.contains("3. Recommendations:"));
    }
}
