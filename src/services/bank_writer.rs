//! 题库写入服务 - 业务能力层
//!
//! 只负责"往题库文件追加一条记录"能力，不关心流程
//!
//! 题库采用 JSON Lines 格式：一行一条 `GeneratedQuestion` 记录，
//! 方便追加写入和逐行消费。

use std::fs::OpenOptions;
use std::io::Write;
use tracing::debug;

use crate::error::{AppResult, FileError};
use crate::models::GeneratedQuestion;

/// 题库写入服务
///
/// 职责：
/// - 将生成好的面试题追加到题库文件
/// - 只处理单条记录
/// - 不关心流程顺序
pub struct BankWriter {
    bank_file_path: String,
}

impl BankWriter {
    /// 创建新的题库写入服务
    pub fn new() -> Self {
        Self {
            bank_file_path: "question_bank.jsonl".to_string(),
        }
    }

    /// 使用自定义文件路径创建
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            bank_file_path: path.into(),
        }
    }

    /// 追加一条题库记录
    ///
    /// # 参数
    /// - `record`: 已生成的面试题记录
    ///
    /// # 返回
    /// 返回是否成功写入
    pub async fn write(&self, record: &GeneratedQuestion) -> AppResult<()> {
        debug!(
            "写入题库: 计划 {} | 方向 {} | 题目长度: {}",
            record.plan_name,
            record.topic,
            record.question.len()
        );

        let line = serde_json::to_string(record)
            .map_err(|e| FileError::JsonEncodeFailed { source: e })?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.bank_file_path)
            .map_err(|e| FileError::WriteFailed {
                path: self.bank_file_path.clone(),
                source: e,
            })?;

        writeln!(file, "{}", line).map_err(|e| FileError::WriteFailed {
            path: self.bank_file_path.clone(),
            source: e,
        })?;

        Ok(())
    }
}

impl Default for BankWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_appends_json_lines() {
        let path = std::env::temp_dir().join("interview_question_gen_bank_test.jsonl");
        let _ = std::fs::remove_file(&path);

        let writer = BankWriter::with_path(path.to_string_lossy().to_string());

        let record = GeneratedQuestion {
            plan_name: "测试计划".to_string(),
            company: Some("Acme".to_string()),
            topic: "Rust".to_string(),
            difficulty: "Mid".to_string(),
            question: "What is a trait object?".to_string(),
            generated_at: "2026-08-06 12:00:00".to_string(),
            attempts: 2,
        };

        tokio_test::block_on(async {
            writer.write(&record).await.unwrap();
            writer.write(&record).await.unwrap();
        });

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        let parsed: GeneratedQuestion = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(parsed.question, record.question);
        assert_eq!(parsed.attempts, 2);

        let _ = std::fs::remove_file(&path);
    }
}
