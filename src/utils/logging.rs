//! 日志工具模块
//!
//! 提供 tracing 初始化和日志格式化的辅助函数

use tracing_subscriber::EnvFilter;

/// 初始化 tracing 日志
///
/// 默认级别为 info，可通过 RUST_LOG 环境变量覆盖。
/// 重复调用是安全的（测试中可能多次初始化）。
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("0123456789", 4), "0123...");
        // 按字符而不是字节截断
        assert_eq!(truncate_text("什么是闭包", 2), "什么...");
    }
}
