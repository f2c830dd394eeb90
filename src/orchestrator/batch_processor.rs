//! 批量计划处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责批量面试计划的处理。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：启动运行日志
//! 2. **批量加载**：扫描并加载所有待处理的计划（`Vec<SessionPlan>`）
//! 3. **并发控制**：使用 Semaphore 限制并发数量
//! 4. **分批处理**：将计划分批次处理，每批完成后再开始下一批
//! 5. **全局统计**：汇总所有计划的处理结果
//!
//! ## 设计特点
//!
//! - **顶层编排**：不处理单个计划的细节
//! - **并发安全**：通过 Semaphore 和 tokio::spawn 实现并发
//! - **向下委托**：委托 plan_processor 处理单个计划

use crate::config::Config;
use crate::models::SessionPlan;
use crate::orchestrator::plan_processor;
use anyhow::Result;
use std::fs;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{error, info, warn};

/// 应用主结构
pub struct App {
    config: Config,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        // 初始化日志文件
        init_log_file(&config.output_log_file)?;

        log_startup(&config);

        Ok(Self { config })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<()> {
        // 加载所有待处理的计划
        let all_plans = self.load_plans().await?;

        if all_plans.is_empty() {
            warn!("⚠️ 没有找到待处理的TOML文件，程序结束");
            return Ok(());
        }

        let total_plans = all_plans.len();
        log_plans_loaded(total_plans, self.config.max_concurrent_plans);

        // 处理所有计划
        let stats = self.process_all_plans(all_plans).await?;

        // 输出最终统计
        print_final_stats(&stats, &self.config);

        Ok(())
    }

    /// 加载计划
    async fn load_plans(&self) -> Result<Vec<SessionPlan>> {
        info!("\n📁 正在扫描待处理的面试计划...");
        crate::models::load_all_plan_files(&self.config.plans_folder).await
    }

    /// 处理所有计划
    async fn process_all_plans(&self, all_plans: Vec<SessionPlan>) -> Result<ProcessingStats> {
        let semaphore = Arc::new(Semaphore::new(self.config.max_concurrent_plans));
        let total_plans = all_plans.len();
        let mut stats = ProcessingStats {
            total: total_plans,
            ..Default::default()
        };

        // 分批处理
        for batch_start in (0..total_plans).step_by(self.config.max_concurrent_plans) {
            let batch_end = (batch_start + self.config.max_concurrent_plans).min(total_plans);
            let batch_plans = &all_plans[batch_start..batch_end];
            let batch_num = (batch_start / self.config.max_concurrent_plans) + 1;
            let total_batches = (total_plans + self.config.max_concurrent_plans - 1)
                / self.config.max_concurrent_plans;

            log_batch_start(
                batch_num,
                total_batches,
                batch_start + 1,
                batch_end,
                total_plans,
            );

            // 处理本批
            let batch_result = self
                .process_batch(batch_plans, batch_start, semaphore.clone())
                .await?;

            stats.success += batch_result.success;
            stats.failed += batch_result.failed;

            log_batch_complete(batch_num, &batch_result);
        }

        Ok(stats)
    }

    /// 处理单个批次
    async fn process_batch(
        &self,
        batch_plans: &[SessionPlan],
        batch_start: usize,
        semaphore: Arc<Semaphore>,
    ) -> Result<BatchResult> {
        let mut batch_handles = Vec::new();

        // 为本批创建并发任务
        for (idx, plan) in batch_plans.iter().enumerate() {
            let plan_index = batch_start + idx + 1;
            let permit = semaphore.clone().acquire_owned().await?;

            let plan_clone = plan.clone();
            let config_clone = self.config.clone();

            let handle = tokio::spawn(async move {
                let _permit = permit;
                match plan_processor::process_plan(plan_clone, plan_index, &config_clone).await {
                    Ok(ok) => Ok(ok),
                    Err(e) => {
                        error!("[计划 {}] ❌ 处理过程中发生错误: {}", plan_index, e);
                        Err(e)
                    }
                }
            });
            batch_handles.push((plan_index, handle));
        }

        // 等待本批所有任务完成
        let mut result = BatchResult::default();

        for (plan_index, handle) in batch_handles {
            match handle.await {
                Ok(Ok(true)) => {
                    result.success += 1;
                }
                Ok(Ok(false)) | Ok(Err(_)) => {
                    result.failed += 1;
                }
                Err(e) => {
                    error!("[计划 {}] 任务执行失败: {}", plan_index, e);
                    result.failed += 1;
                }
            }
        }

        Ok(result)
    }
}

/// 处理统计
#[derive(Debug, Default)]
struct ProcessingStats {
    success: usize,
    failed: usize,
    total: usize,
}

/// 批次处理结果
#[derive(Debug, Default)]
struct BatchResult {
    success: usize,
    failed: usize,
}

// ========== 日志辅助函数 ==========

fn init_log_file(log_file_path: &str) -> Result<()> {
    let log_header = format!(
        "{}\n面试题生成日志 - {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "=".repeat(60)
    );
    fs::write(log_file_path, log_header)?;
    Ok(())
}

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 批量面试题生成模式");
    info!("📊 最大并发数: {}", config.max_concurrent_plans);
    info!("🤖 使用模型: {}", config.llm_model_name);
    info!("{}", "=".repeat(60));
}

fn log_plans_loaded(total: usize, max_concurrent: usize) {
    info!("✓ 找到 {} 个待处理的计划", total);
    info!("📋 将以每批 {} 个的方式处理", max_concurrent);
    info!("💡 每批完成后再开始下一批\n");
}

fn log_batch_start(batch_num: usize, total_batches: usize, start: usize, end: usize, total: usize) {
    info!("\n{}", "=".repeat(60));
    info!("📦 开始处理第 {}/{} 批", batch_num, total_batches);
    info!("📄 本批计划: {}-{} / 共 {} 个", start, end, total);
    info!("{}", "=".repeat(60));
}

fn log_batch_complete(batch_num: usize, result: &BatchResult) {
    info!("\n{}", "─".repeat(60));
    info!(
        "✓ 第 {} 批完成: 成功 {}/{}",
        batch_num,
        result.success,
        result.success + result.failed
    );
    info!("{}", "─".repeat(60));
}

fn print_final_stats(stats: &ProcessingStats, config: &Config) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}/{}", stats.success, stats.total);
    info!("❌ 失败: {}", stats.failed);
    info!("{}", "=".repeat(60));
    info!("\n题库已写入: {}", config.bank_file);
    info!("日志已保存至: {}", config.output_log_file);
}
