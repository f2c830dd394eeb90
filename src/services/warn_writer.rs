//! 警告写入服务 - 业务能力层
//!
//! 只负责"写 warn.txt"能力，不关心流程

use std::fs::OpenOptions;
use std::io::Write;
use tracing::debug;

use crate::error::{AppResult, FileError};

/// 警告写入服务
///
/// 职责：
/// - 将生成失败的题目条目写入 warn.txt
/// - 只处理单个条目的警告
/// - 不出现 Vec<SessionPlan>
/// - 不关心流程顺序
pub struct WarnWriter {
    warn_file_path: String,
}

impl WarnWriter {
    /// 创建新的警告写入服务
    pub fn new() -> Self {
        Self {
            warn_file_path: "warn.txt".to_string(),
        }
    }

    /// 使用自定义文件路径创建
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            warn_file_path: path.into(),
        }
    }

    /// 写入警告信息
    ///
    /// # 参数
    /// - `plan_name`: 计划名称
    /// - `question_index`: 题目索引
    /// - `topic`: 面试方向
    ///
    /// # 返回
    /// 返回是否成功写入
    pub async fn write(
        &self,
        plan_name: &str,
        question_index: usize,
        topic: &str,
    ) -> AppResult<()> {
        debug!(
            "写入警告: 计划 {} | 题目 {} | 方向: {}",
            plan_name, question_index, topic
        );

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.warn_file_path)
            .map_err(|e| FileError::WriteFailed {
                path: self.warn_file_path.clone(),
                source: e,
            })?;

        let warn_msg = format!(
            "计划 {} | 题目 {} | 方向: {}\n",
            plan_name, question_index, topic
        );

        file.write_all(warn_msg.as_bytes())
            .map_err(|e| FileError::WriteFailed {
                path: self.warn_file_path.clone(),
                source: e,
            })?;

        Ok(())
    }
}

impl Default for WarnWriter {
    fn default() -> Self {
        Self::new()
    }
}
