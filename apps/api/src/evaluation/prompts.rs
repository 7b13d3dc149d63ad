//! Prompt construction for problem-solving evaluation.
//!
//! The rubric weights, the redline rules, and the pass threshold live in the
//! prompt itself: the model applies them and the normalizer only validates
//! shape, not arithmetic.

use crate::evaluation::record::EvaluationRequest;

/// Exact output schema the model must return. Shown verbatim in the prompt so
/// field names match `EvaluationRecord` one-to-one.
const OUTPUT_SCHEMA: &str = r#"{
  "overall_evaluation": "总体评价，2-3 句话",
  "analysis_feedback": "问题分析维度的具体反馈",
  "solution_feedback": "解决方案维度的具体反馈",
  "professionalism_feedback": "职业素养维度的具体反馈",
  "improvement_suggestions": "可执行的改进建议",
  "scores": {
    "analysis": 0,
    "solution": 0,
    "professionalism": 0,
    "improvement": 0,
    "weighted_total": 0
  },
  "pass": false,
  "redlines": [],
  "assumptions": []
}"#;

/// Renders an evaluation request into the grading prompt.
///
/// Pure function of its input: any request, including one with empty fields,
/// produces a valid prompt. The user's response is embedded verbatim.
pub fn build_evaluation_prompt(request: &EvaluationRequest) -> String {
    format!(
        "你是一位资深的餐厅运营培训评估专家。请对员工针对以下案例提交的分析与解决方案进行评估。\n\
         \n\
         【案例标题】{case_title}\n\
         【案例背景】{case_background}\n\
         【案例问题】{case_problem}\n\
         【员工角色】{user_role}\n\
         【考察维度】{skill_dimension}\n\
         \n\
         【员工的回答】\n\
         {user_response}\n\
         \n\
         评分标准（每项 0-5 分）：\n\
         1. 问题分析（权重 30%）：是否准确识别问题根因，考虑是否全面\n\
         2. 解决方案（权重 40%）：方案是否具体可行，是否符合门店操作规范\n\
         3. 职业素养（权重 20%）：表达是否专业，是否体现顾客意识与团队意识\n\
         4. 改进意识（权重 10%）：是否提出预防措施与后续改进建议\n\
         \n\
         加权总分 = 问题分析 × 0.3 + 解决方案 × 0.4 + 职业素养 × 0.2 + 改进意识 × 0.1。\n\
         加权总分达到 3.5 分（含）以上判定为通过，pass 为 true，否则为 false。\n\
         \n\
         红线规则：员工的回答中若出现以下任一严重违规，加权总分不得超过 2.0 分，\n\
         并且必须在 redlines 数组中逐条列出：\n\
         - 食品安全违规（如使用变质食材、无视保质期、生熟交叉污染）\n\
         - 忽视人身安全隐患（如消防、燃气、高压设备的不当操作）\n\
         - 辱骂、歧视或威胁顾客\n\
         - 隐瞒或伪造事故信息\n\
         \n\
         若回答依赖案例之外的假设，请在 assumptions 数组中逐条列出；没有则返回空数组。\n\
         \n\
         请只输出下面这个 JSON 对象，不要输出任何其他文字、解释或代码块标记：\n\
         {schema}",
        case_title = request.case_title,
        case_background = request.case_background,
        case_problem = request.case_problem,
        user_role = request.user_role,
        skill_dimension = request.skill_dimension,
        user_response = request.user_response,
        schema = OUTPUT_SCHEMA,
    )
}
