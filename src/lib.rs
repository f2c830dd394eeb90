//! # Interview Question Gen
//!
//! 一个用于批量生成模拟面试题的 Rust 应用程序
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 核心层（Extractor）
//! - `extractor` - 纯函数核心，从 LLM 原始输出中恢复单道面试题
//! - 无 I/O、无状态、对任意输入不 panic
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单道题
//! - `LlmService` - LLM 出题能力（含提取与重试）
//! - `BankWriter` - 写题库文件能力
//! - `WarnWriter` - 写 warn.txt 能力
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一道题"的完整生成流程
//! - `QuestionCtx` - 上下文封装（计划 + 题目索引 + 方向 + 难度）
//! - `QuestionFlow` - 流程编排（generate → bank → warn）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 批量计划处理器，管理并发
//! - `orchestrator/plan_processor` - 单个计划处理器，遍历出题条目
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod extractor;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use extractor::extract_question;
pub use models::{Difficulty, GeneratedQuestion, InterviewTopic, QuestionSlot, SessionPlan};
pub use orchestrator::{process_plan, App};
pub use workflow::{ProcessResult, QuestionCtx, QuestionFlow};
