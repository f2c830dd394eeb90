//! LLM 服务 - 业务能力层
//!
//! 只负责"调用 LLM 生成一道面试题"能力，不关心流程
//!
//! ## 技术栈
//! - 使用 `async-openai` crate 进行 API 调用
//! - 支持自定义 API 端点和模型
//! - 兼容 OpenAI API 的服务（如 Azure, Gemini, Doubao 等）

use anyhow::Result;
use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{AppResult, LlmError};
use crate::extractor;
use crate::models::{Difficulty, InterviewTopic};
use crate::utils::logging::truncate_text;

/// 一次成功生成的结果
#[derive(Debug, Clone)]
pub struct GeneratedDraft {
    /// 提取出的面试题（保证以问号结尾）
    pub question: String,
    /// 实际消耗的生成次数（从 1 开始）
    pub attempts: usize,
}

/// LLM 服务
///
/// 职责：
/// - 调用 LLM API 生成面试题
/// - 提供通用的 LLM 调用接口
/// - 只处理单道题的生成
/// - 不出现 Vec<SessionPlan>
/// - 不关心流程顺序
pub struct LlmService {
    client: Client<OpenAIConfig>,
    model_name: String,
    max_attempts: usize,
}

impl LlmService {
    /// 创建新的 LLM 服务
    pub fn new(config: &Config) -> Self {
        // 配置 OpenAI 客户端（兼容 OpenAI API 的服务）
        let openai_config = OpenAIConfig::new()
            .with_api_key(&config.llm_api_key)
            .with_api_base(&config.llm_api_base_url);

        let client = Client::with_config(openai_config);

        Self {
            client,
            model_name: config.llm_model_name.clone(),
            max_attempts: config.max_generation_attempts.max(1),
        }
    }

    /// 通用的 LLM 调用函数
    ///
    /// 这是最基础的 LLM 调用接口，其他所有 LLM 相关功能都应该基于此函数。
    ///
    /// # 参数
    /// - `user_message`: 用户消息内容
    /// - `system_message`: 系统消息（可选）
    ///
    /// # 返回
    /// 返回 LLM 的响应内容（字符串）
    pub async fn send_to_llm(
        &self,
        user_message: &str,
        system_message: Option<&str>,
    ) -> AppResult<String> {
        debug!("调用 LLM API，模型: {}", self.model_name);
        debug!("用户消息长度: {} 字符", user_message.len());

        // 构建消息列表
        let mut messages = Vec::new();

        // 添加系统消息（如果提供）
        if let Some(sys_msg) = system_message {
            let system_msg = ChatCompletionRequestSystemMessageArgs::default()
                .content(sys_msg)
                .build()
                .map_err(|e| LlmError::ApiCallFailed {
                    model: self.model_name.clone(),
                    source: Box::new(e),
                })?;
            messages.push(ChatCompletionRequestMessage::System(system_msg));
        }

        // 添加用户消息
        let user_msg = ChatCompletionRequestUserMessageArgs::default()
            .content(user_message)
            .build()
            .map_err(|e| LlmError::ApiCallFailed {
                model: self.model_name.clone(),
                source: Box::new(e),
            })?;
        messages.push(ChatCompletionRequestMessage::User(user_msg));

        // 构建请求
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model_name)
            .messages(messages)
            .temperature(0.7)
            .max_tokens(256u32)
            .build()
            .map_err(|e| LlmError::ApiCallFailed {
                model: self.model_name.clone(),
                source: Box::new(e),
            })?;

        // 调用 API
        let response = self.client.chat().create(request).await.map_err(|e| {
            warn!("LLM API 调用失败: {}", e);
            LlmError::ApiCallFailed {
                model: self.model_name.clone(),
                source: Box::new(e),
            }
        })?;

        debug!("LLM API 调用成功");

        // 提取响应内容
        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| LlmError::EmptyContent {
                model: self.model_name.clone(),
            })?;

        Ok(content.trim().to_string())
    }

    /// 生成一道面试题
    ///
    /// 这个函数基于 `send_to_llm` 实现，专门用于出题场景：
    /// 提示词要求模型返回 `{"question": "..."}` 形式的 JSON，
    /// 但不信任模型会照做，每次响应都交给提取器恢复出单道题。
    ///
    /// 重试策略：
    /// - 响应无法提取出有效面试题 → 换一次生成再试，最多 `max_attempts` 次
    /// - 所有尝试都提取失败 → 返回 `Ok(None)`（区别于传输层错误）
    /// - 最后一次尝试仍遇到 API 错误 → 返回 `Err`
    ///
    /// # 参数
    /// - `topic`: 面试方向
    /// - `difficulty`: 难度
    /// - `company`: 目标公司（可选）
    ///
    /// # 返回
    /// 返回提取出的面试题和实际消耗的生成次数
    pub async fn generate_question(
        &self,
        topic: InterviewTopic,
        difficulty: Difficulty,
        company: Option<&str>,
    ) -> Result<Option<GeneratedDraft>> {
        debug!(
            "开始生成面试题，方向: {}, 难度: {}, 模型: {}",
            topic, difficulty, self.model_name
        );

        let (user_message, system_message) =
            self.build_generation_messages(topic, difficulty, company);

        for attempt in 1..=self.max_attempts {
            let response = match self.send_to_llm(&user_message, Some(&system_message)).await {
                Ok(response) => response,
                Err(e) => {
                    if attempt == self.max_attempts {
                        return Err(e.into());
                    }
                    warn!(
                        "LLM 调用失败 (第 {}/{} 次): {}",
                        attempt, self.max_attempts, e
                    );
                    continue;
                }
            };

            match extractor::extract_question(&response) {
                Some(question) => {
                    debug!("第 {} 次生成成功", attempt);
                    return Ok(Some(GeneratedDraft {
                        question,
                        attempts: attempt,
                    }));
                }
                None => {
                    warn!(
                        "无法从 LLM 响应中提取面试题 (第 {}/{} 次): {}",
                        attempt,
                        self.max_attempts,
                        truncate_text(&response, 80)
                    );
                }
            }
        }

        Ok(None)
    }

    /// 构建用于出题的消息
    ///
    /// 返回 (user_message, system_message)
    fn build_generation_messages(
        &self,
        topic: InterviewTopic,
        difficulty: Difficulty,
        company: Option<&str>,
    ) -> (String, String) {
        // 构建系统消息
        let system_message = "你是一个资深的技术面试官，擅长为候选人出高质量的英文面试题。\
                             你每次只出一道题，并且只返回一个 JSON 对象，不返回任何其他内容。"
            .to_string();

        // 构建目标公司信息
        let company_info = match company {
            Some(company) => format!("目标公司：{}（题目风格应贴近该公司的面试习惯）", company),
            None => "目标公司：不限".to_string(),
        };

        // 构建用户消息
        let user_message = format!(
            r#"请为一场模拟技术面试出一道面试题。

【面试要求】
- 考察方向：{}
- 难度：{}
- {}

【出题规则】
1. 只出一道题，不要列出多道备选题
2. 题目必须用英文书写，并以问号结尾
3. 不要带编号、不要带 "Question:" 之类的前缀
4. 不要给出答案或提示

【输出格式】
只返回如下 JSON 对象，不要返回任何其他内容：
{{"question": "<你的面试题>"}}"#,
            topic.prompt_hint(),
            difficulty.prompt_hint(),
            company_info
        );

        (user_message, system_message)
    }
}
