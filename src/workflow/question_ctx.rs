//! 题目生成上下文
//!
//! 封装"我正在为哪个计划的第几道题出题"这一信息

use std::fmt::Display;

use crate::models::{Difficulty, InterviewTopic};

/// 题目生成上下文
///
/// 包含生成单道面试题所需的所有上下文信息
#[derive(Debug, Clone)]
pub struct QuestionCtx {
    /// 计划名称
    pub plan_name: String,

    /// 计划索引（仅用于日志显示）
    pub plan_index: usize,

    /// 题目在计划中的索引（从1开始）
    pub question_index: usize,

    /// 面试方向
    pub topic: InterviewTopic,

    /// 难度
    pub difficulty: Difficulty,

    /// 目标公司
    pub company: Option<String>,
}

impl QuestionCtx {
    /// 创建新的题目上下文
    pub fn new(
        plan_name: String,
        plan_index: usize,
        question_index: usize,
        topic: InterviewTopic,
        difficulty: Difficulty,
        company: Option<String>,
    ) -> Self {
        Self {
            plan_name,
            plan_index,
            question_index,
            topic,
            difficulty,
            company,
        }
    }
}

impl Display for QuestionCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[计划「{}」 题目#{} 方向#{} 难度#{}]",
            self.plan_name, self.question_index, self.topic, self.difficulty
        )
    }
}
