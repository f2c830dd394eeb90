use std::str::FromStr;

use crate::error::ConfigError;

/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 同时处理的计划数量
    pub max_concurrent_plans: usize,
    /// 面试计划 TOML 文件存放目录
    pub plans_folder: String,
    /// 题库输出文件（JSON Lines）
    pub bank_file: String,
    /// 警告输出文件
    pub warn_file: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
    // --- LLM 配置 ---
    pub llm_api_key: String,
    pub llm_api_base_url: String,
    pub llm_model_name: String,
    /// 单道题允许的最大生成次数（含提取失败后的重试）
    pub max_generation_attempts: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_concurrent_plans: 4,
            plans_folder: "plans".to_string(),
            bank_file: "question_bank.jsonl".to_string(),
            warn_file: "warn.txt".to_string(),
            verbose_logging: false,
            output_log_file: "output.txt".to_string(),
            llm_api_key: String::new(),
            llm_api_base_url: "https://api.openai.com/v1".to_string(),
            llm_model_name: "gpt-4o-mini".to_string(),
            max_generation_attempts: 3,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            max_concurrent_plans: env_parse("MAX_CONCURRENT_PLANS", default.max_concurrent_plans),
            plans_folder: std::env::var("PLANS_FOLDER").unwrap_or(default.plans_folder),
            bank_file: std::env::var("BANK_FILE").unwrap_or(default.bank_file),
            warn_file: std::env::var("WARN_FILE").unwrap_or(default.warn_file),
            verbose_logging: env_parse("VERBOSE_LOGGING", default.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
            llm_api_key: std::env::var("LLM_API_KEY").unwrap_or(default.llm_api_key),
            llm_api_base_url: std::env::var("LLM_API_BASE_URL").unwrap_or(default.llm_api_base_url),
            llm_model_name: std::env::var("LLM_MODEL_NAME").unwrap_or(default.llm_model_name),
            max_generation_attempts: env_parse(
                "MAX_GENERATION_ATTEMPTS",
                default.max_generation_attempts,
            ),
        }
    }
}

/// 解析环境变量，解析失败时记录警告并回退到默认值
fn env_parse<T: FromStr>(var_name: &str, default: T) -> T {
    match std::env::var(var_name) {
        Ok(raw) => match raw.parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!(
                    "{}",
                    ConfigError::EnvVarParseFailed {
                        var_name: var_name.to_string(),
                        value: raw,
                    }
                );
                default
            }
        },
        Err(_) => default,
    }
}
