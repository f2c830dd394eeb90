//! 单个计划处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块负责处理单个面试计划的所有出题条目，是计划级别的编排器。
//!
//! ## 核心功能
//!
//! 1. **遍历条目**：循环处理 `Vec<QuestionSlot>`
//! 2. **流程调度**：创建并复用 `QuestionFlow`
//! 3. **方向解析**：将条目中的字符串解析为 `InterviewTopic`
//! 4. **文件清理**：删除已处理的 TOML 文件
//! 5. **统计输出**：记录成功/跳过数量

use crate::config::Config;
use crate::models::{Difficulty, InterviewTopic, SessionPlan};
use crate::workflow::{ProcessResult, QuestionCtx, QuestionFlow};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{error, info, warn};

/// 题目处理统计
#[derive(Debug, Default)]
pub struct QuestionStats {
    pub processed: usize,
    pub skipped: usize,
}

/// 处理单个计划
///
/// # 参数
/// - `plan`: 计划数据
/// - `plan_index`: 计划索引（用于日志）
/// - `config`: 配置
///
/// # 返回
/// 返回是否成功处理
pub async fn process_plan(plan: SessionPlan, plan_index: usize, config: &Config) -> Result<bool> {
    let total = plan.total_questions();

    log_plan_start(plan_index, &plan.name, plan.company.as_deref(), total);

    // 创建流程对象（只创建一次，复用）
    let question_flow = QuestionFlow::new(config);

    // 解析难度（提前计算，避免重复）
    let difficulty = Difficulty::from_str(&plan.difficulty)
        .with_context(|| format!("无法解析难度: {}", plan.difficulty))?;

    let mut stats = QuestionStats::default();
    let mut question_index = 0;

    // ========== 遍历所有出题条目（Vec<QuestionSlot>） ==========
    for slot in plan.slots.iter() {
        // 方向解析失败时跳过整个条目，不中断计划
        let topic = match InterviewTopic::from_str(&slot.topic) {
            Some(topic) => topic,
            None => {
                error!(
                    "[计划 {}] 无法解析面试方向: {}，跳过 {} 道题",
                    plan_index, slot.topic, slot.count
                );
                question_index += slot.count;
                stats.skipped += slot.count;
                continue;
            }
        };

        for _ in 0..slot.count {
            question_index += 1;
            log_question_start(plan_index, question_index, total);

            // 构建上下文
            let ctx = QuestionCtx::new(
                plan.name.clone(),
                plan_index,
                question_index,
                topic,
                difficulty,
                plan.company.clone(),
            );

            // 执行流程（委托给 QuestionFlow）
            match question_flow.run(&ctx).await {
                Ok(ProcessResult::Success) => {
                    stats.processed += 1;
                }
                Ok(ProcessResult::Skipped) => {
                    stats.skipped += 1;
                }
                Err(e) => {
                    error!(
                        "[计划 {}] 题目 {} 处理失败: {}",
                        plan_index, question_index, e
                    );
                    stats.skipped += 1;
                }
            }
        }
    }

    // 清理文件
    cleanup_file(plan.file_path.as_deref(), plan_index)?;

    // 输出统计信息
    log_plan_complete(plan_index, &stats, total);

    Ok(true)
}

/// 清理已处理的文件
fn cleanup_file(file_path: Option<&str>, plan_index: usize) -> Result<()> {
    info!("[计划 {}] 🗑️ 清理已处理的文件...", plan_index);

    if let Some(file_path) = file_path {
        if Path::new(file_path).exists() {
            fs::remove_file(file_path).with_context(|| format!("无法删除文件: {}", file_path))?;
            info!(
                "[计划 {}] ✓ 文件已删除: {}",
                plan_index,
                Path::new(file_path)
                    .file_name()
                    .unwrap_or_default()
                    .to_string_lossy()
            );
        } else {
            warn!("[计划 {}] ⚠️ 文件不存在: {}", plan_index, file_path);
        }
    } else {
        warn!("[计划 {}] ⚠️ 文件路径未设置", plan_index);
    }

    Ok(())
}

// ========== 日志辅助函数 ==========

fn log_plan_start(plan_index: usize, name: &str, company: Option<&str>, question_count: usize) {
    info!("[计划 {}] 开始处理", plan_index);
    info!("[计划 {}] 名称: {}", plan_index, name);
    info!(
        "[计划 {}] 目标公司: {}",
        plan_index,
        company.unwrap_or("不限")
    );
    info!("[计划 {}] 题目总数: {}", plan_index, question_count);
}

fn log_question_start(plan_index: usize, question_index: usize, total: usize) {
    info!("\n[计划 {}] {}", plan_index, "─".repeat(30));
    info!(
        "[计划 {}] 生成第 {}/{} 道题目",
        plan_index, question_index, total
    );
}

fn log_plan_complete(plan_index: usize, stats: &QuestionStats, total: usize) {
    info!(
        "[计划 {}] 题目统计: 成功 {}, 跳过 {}, 总计 {}",
        plan_index, stats.processed, stats.skipped, total
    );
    info!("\n[计划 {}] ✅ 计划处理完成\n", plan_index);
}
