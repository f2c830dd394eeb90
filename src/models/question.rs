use serde::{Deserialize, Serialize};

/// 面试计划中的一个出题条目
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionSlot {
    /// 面试方向（字符串形式，处理时解析为 InterviewTopic）
    pub topic: String,
    /// 该方向需要生成的题目数量
    #[serde(default = "default_count")]
    pub count: usize,
}

fn default_count() -> usize {
    1
}

/// 面试计划（来自 TOML 文件）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionPlan {
    /// 计划名称
    pub name: String,
    /// 目标公司（可选）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// 难度（字符串形式，处理时解析为 Difficulty）
    pub difficulty: String,
    /// 出题条目列表
    #[serde(default)]
    pub slots: Vec<QuestionSlot>,
    /// 来源文件路径（加载时注入，不来自 TOML 本身）
    #[serde(skip_serializing, skip_deserializing)]
    pub file_path: Option<String>,
}

impl SessionPlan {
    /// 计划中的题目总数
    pub fn total_questions(&self) -> usize {
        self.slots.iter().map(|slot| slot.count).sum()
    }
}

/// 已生成的面试题（题库文件中的一条 JSON 记录）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedQuestion {
    /// 所属计划名称
    pub plan_name: String,
    /// 目标公司
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// 面试方向
    pub topic: String,
    /// 难度
    pub difficulty: String,
    /// 题目内容
    pub question: String,
    /// 生成时间
    pub generated_at: String,
    /// 实际消耗的生成次数
    pub attempts: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_from_toml() {
        let content = r#"
            name = "后端一面模拟"
            company = "Acme"
            difficulty = "mid"

            [[slots]]
            topic = "rust"
            count = 2

            [[slots]]
            topic = "system design"
        "#;

        let plan: SessionPlan = toml::from_str(content).unwrap();
        assert_eq!(plan.name, "后端一面模拟");
        assert_eq!(plan.company.as_deref(), Some("Acme"));
        assert_eq!(plan.slots.len(), 2);
        // count 缺省为 1
        assert_eq!(plan.slots[1].count, 1);
        assert_eq!(plan.total_questions(), 3);
        assert!(plan.file_path.is_none());
    }

    #[test]
    fn test_generated_question_roundtrip() {
        let record = GeneratedQuestion {
            plan_name: "p".to_string(),
            company: None,
            topic: "Rust".to_string(),
            difficulty: "Senior".to_string(),
            question: "What is a lifetime?".to_string(),
            generated_at: "2026-08-06 12:00:00".to_string(),
            attempts: 1,
        };

        let line = serde_json::to_string(&record).unwrap();
        // company 为 None 时不序列化该字段
        assert!(!line.contains("company"));

        let parsed: GeneratedQuestion = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed.question, record.question);
    }
}
