//! Prompt construction for the roleplay training endpoints.

use crate::training::TestSession;

/// At most this many recent sessions are summarized into the chat prompt.
const HISTORY_LIMIT: usize = 3;

/// Summarizes recent test sessions as a context block, or an empty string
/// when there is no history.
pub fn build_history_context(history: &[TestSession]) -> String {
    if history.is_empty() {
        return String::new();
    }
    let mut context = String::from("最近测试记录：\n");
    for session in history.iter().take(HISTORY_LIMIT) {
        context.push_str(&format!(
            "- {}: {} 条对话\n",
            session.topic,
            session.conversation.len()
        ));
    }
    context
}

/// Renders the roleplay-coach chat prompt.
pub fn build_roleplay_chat_prompt(message: &str, topic: &str, history: &[TestSession]) -> String {
    format!(
        "你是一个专业的餐厅技能测试AI助手。你的任务是帮助用户测试他们在餐厅工作中的各种技能。\n\
         \n\
         当前测试主题：{topic}\n\
         {history_context}\n\
         用户消息：{message}\n\
         \n\
         请根据用户的请求，提供相应的测试场景、反馈或指导。回复应该：\n\
         1. 用中文回复\n\
         2. 根据主题提供相关的测试内容\n\
         3. 给出建设性的反馈和建议\n\
         4. 保持专业和友好的语调",
        history_context = build_history_context(history),
    )
}

/// Renders the roleplay scenario feedback prompt: strengths, improvements,
/// concrete actions.
pub fn build_roleplay_feedback_prompt(scenario: &str, user_response: &str) -> String {
    format!(
        "你是一个专业的餐厅技能评估专家。请对用户的角色扮演表现进行评估。\n\
         \n\
         测试场景：{scenario}\n\
         用户回应：{user_response}\n\
         \n\
         请提供以下方面的反馈：\n\
         1. 优点认可\n\
         2. 改进建议\n\
         3. 具体行动建议\n\
         \n\
         用中文回复，每部分用2-3句话。"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::training::ChatTurn;

    fn session(topic: &str, turns: usize) -> TestSession {
        TestSession {
            topic: topic.to_string(),
            conversation: (0..turns)
                .map(|i| ChatTurn {
                    role: "user".to_string(),
                    content: format!("消息 {i}"),
                })
                .collect(),
        }
    }

    #[test]
    fn test_history_context_empty_without_sessions() {
        assert_eq!(build_history_context(&[]), "");
    }

    #[test]
    fn test_history_context_limits_to_three_sessions() {
        let history = vec![
            session("食品安全", 4),
            session("客户服务", 2),
            session("消防安全", 1),
            session("收银流程", 9),
        ];
        let context = build_history_context(&history);
        assert!(context.contains("- 食品安全: 4 条对话"));
        assert!(context.contains("- 消防安全: 1 条对话"));
        assert!(!context.contains("收银流程"));
    }

    #[test]
    fn test_chat_prompt_embeds_topic_and_message() {
        let prompt = build_roleplay_chat_prompt("我想练习处理投诉", "客户服务", &[]);
        assert!(prompt.contains("当前测试主题：客户服务"));
        assert!(prompt.contains("用户消息：我想练习处理投诉"));
    }

    #[test]
    fn test_feedback_prompt_embeds_scenario_and_response() {
        let prompt = build_roleplay_feedback_prompt("顾客对菜品不满", "我会先道歉并更换菜品");
        assert!(prompt.contains("测试场景：顾客对菜品不满"));
        assert!(prompt.contains("用户回应：我会先道歉并更换菜品"));
        assert!(prompt.contains("优点认可"));
    }
}
