//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责批量处理和流程调度，是整个系统的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量计划处理器
//! - 管理应用生命周期（初始化、运行）
//! - 批量加载计划（Vec<SessionPlan>）
//! - 控制并发数量（Semaphore）
//! - 输出全局统计信息
//!
//! ### `plan_processor` - 单个计划处理器
//! - 遍历单个计划的所有出题条目（Vec<QuestionSlot>）
//! - 创建并复用 QuestionFlow
//! - 解析方向与难度
//! - 清理文件
//! - 输出单个计划的统计信息
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<SessionPlan>)
//!     ↓
//! plan_processor (处理 Vec<QuestionSlot>)
//!     ↓
//! workflow::QuestionFlow (处理单道题)
//!     ↓
//! services (能力层：llm / bank / warn)
//!     ↓
//! extractor (纯函数核心：从原始输出恢复单道题)
//! ```
//!
//! ## 设计原则
//!
//! 1. **单一职责**：batch_processor 管批量，plan_processor 管单个
//! 2. **向下依赖**：编排层 → workflow → services → extractor
//! 3. **无业务逻辑**：只做调度和统计，不做具体业务判断

pub mod batch_processor;
pub mod plan_processor;

// 重新导出主要类型
pub use batch_processor::App;
pub use plan_processor::{process_plan, QuestionStats};
