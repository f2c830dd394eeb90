//! 题目生成流程 - 流程层
//!
//! 核心职责：定义"一道题"的完整生成流程
//!
//! 流程顺序：
//! 1. LLM 生成（内部带重试与提取）→ 写入题库
//! 2. 多次生成仍提取失败 → warn.txt（兜底）

use anyhow::Result;
use tracing::{info, warn};

use crate::config::Config;
use crate::models::GeneratedQuestion;
use crate::services::{BankWriter, GeneratedDraft, LlmService, WarnWriter};
use crate::utils::logging::truncate_text;
use crate::workflow::question_ctx::QuestionCtx;

/// 题目处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessResult {
    /// 处理成功
    Success,
    /// 跳过（未能生成有效题目）
    Skipped,
}

/// 题目生成流程
///
/// - 编排完整的单题生成流程
/// - 决定何时生成、何时入库、何时兜底
/// - 不持有任何批量状态
/// - 只依赖业务能力（services）
pub struct QuestionFlow {
    llm_service: LlmService,
    bank_writer: BankWriter,
    warn_writer: WarnWriter,
    verbose_logging: bool,
}

impl QuestionFlow {
    /// 创建新的题目生成流程
    pub fn new(config: &Config) -> Self {
        Self {
            llm_service: LlmService::new(config),
            bank_writer: BankWriter::with_path(config.bank_file.clone()),
            warn_writer: WarnWriter::with_path(config.warn_file.clone()),
            verbose_logging: config.verbose_logging,
        }
    }

    pub async fn run(&self, ctx: &QuestionCtx) -> Result<ProcessResult> {
        info!(
            "[计划 {}] 🎯 正在生成面试题: {} / {}",
            ctx.plan_index, ctx.topic, ctx.difficulty
        );

        // ========== 流程 1: LLM 生成（内部带提取与重试） ==========
        let draft = self
            .llm_service
            .generate_question(ctx.topic, ctx.difficulty, ctx.company.as_deref())
            .await?;

        match draft {
            Some(draft) => {
                // 生成成功，写入题库
                info!(
                    "[计划 {}] ✓ 生成成功 (尝试 {} 次): {}",
                    ctx.plan_index,
                    draft.attempts,
                    truncate_text(&draft.question, 80)
                );

                if self.verbose_logging {
                    info!("[计划 {}] 完整题目: {}", ctx.plan_index, draft.question);
                }

                self.submit_question(ctx, &draft).await?;

                Ok(ProcessResult::Success)
            }
            None => {
                // 多次生成都提取失败，写入 warn.txt 兜底
                warn!(
                    "[计划 {}] ⚠️ 多次生成仍无法提取有效面试题，写入 warn.txt",
                    ctx.plan_index
                );
                self.write_warn(ctx).await?;
                Ok(ProcessResult::Skipped)
            }
        }
    }

    /// 将生成结果写入题库
    async fn submit_question(&self, ctx: &QuestionCtx, draft: &GeneratedDraft) -> Result<()> {
        let record = GeneratedQuestion {
            plan_name: ctx.plan_name.clone(),
            company: ctx.company.clone(),
            topic: ctx.topic.name().to_string(),
            difficulty: ctx.difficulty.name().to_string(),
            question: draft.question.clone(),
            generated_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            attempts: draft.attempts,
        };

        self.bank_writer.write(&record).await?;

        info!("[计划 {}] 📤 已写入题库", ctx.plan_index);

        Ok(())
    }

    /// 写入警告日志
    async fn write_warn(&self, ctx: &QuestionCtx) -> Result<()> {
        self.warn_writer
            .write(&ctx.plan_name, ctx.question_index, ctx.topic.name())
            .await?;

        warn!(
            "[计划 {}] ⚠️ 已写入 warn.txt: 题目 {}",
            ctx.plan_index, ctx.question_index
        );

        Ok(())
    }
}
