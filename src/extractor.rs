//! 面试题提取器 - 核心模块
//!
//! 从 LLM 的原始输出中恢复出"恰好一道"格式良好的面试题。
//!
//! LLM 虽然被提示词要求返回 `{"question": "..."}` 形式的 JSON，
//! 但实际输出并不可信：可能在 JSON 前后夹杂说明文字、直接用自然语言回答、
//! 返回带编号的多个小题，或者把几个问题挤在同一行里。
//!
//! ## 提取策略（按顺序，先命中者赢）
//!
//! 1. **结构化路径**：在原文中定位第一个 `{` 到最后一个 `}` 的子串并尝试
//!    按 JSON 解析，取其中非空的 `question` 字段。这是高置信度路径。
//! 2. **启发式回退**：JSON 不可用时，剥掉整体的编号前缀，按行切分，
//!    用一组显式的有序规则（见 [`SELECT_RULES`]）选出一个候选行，
//!    再剥掉行内的编号/标签前缀。
//! 3. **单题收尾**：两条路径的结果统一做"只保留第一问"处理：
//!    截断到第一个 `?`（含），缺问号则补一个。
//! 4. **拒绝**：收尾后为空或只剩一个 `?`，视为提取失败，返回 `None`。
//!
//! 本模块是纯函数：无 I/O、无共享状态、对任意输入都不会 panic，
//! 相同输入永远得到相同输出。在线生成链路（`LlmService`）和测试
//! 共用这一份实现，不允许出现第二份拷贝。
//!
//! 注意：截断到第一个 `?` 是有损的。像
//! `He asked "why?" — how would you respond?` 这种引号里带问号的题目
//! 会被截短，这是既定取舍（宁可返回一道合法的单题，也不返回多题），
//! 不做引号感知。

use phf::phf_set;
use regex::Regex;
use std::sync::OnceLock;

/// 疑问词表：候选行只要整词命中其中之一，就认为它"像一个问题"
static QUESTION_WORDS: phf::Set<&'static str> = phf_set! {
    "what",
    "how",
    "why",
    "explain",
    "describe",
    "define",
    "implement",
    "compare",
    "difference",
    "when",
    "where",
    "which",
};

/// 整体编号前缀：`1. ` / `2) ` 这类
fn re_enum_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*\d+\s*[.)]\s*").expect("内置正则不合法"))
}

/// 整体编号标签：`Question 2: ` / `question 1 - ` 这类
fn re_question_num_label() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*(?i:question)\s*\d+\s*[:\-]\s*").expect("内置正则不合法"))
}

/// 行内编号/项目符号前缀：`3. ` / `- ` / `* ` / `• `
fn re_line_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*(?:\d+\s*[.)]|[-*•])\s*").expect("内置正则不合法"))
}

/// 行内标签：`Question: ` / `Q - ` / `Ask ` 这类（整词，大小写不敏感）
fn re_label() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*(?i:question|q|ask)\b\s*[:\-]?\s*").expect("内置正则不合法"))
}

/// 候选行选择规则
///
/// 规则按声明顺序逐条尝试，每条规则都先扫完整个候选行序列，
/// 命中才轮到下一条。把优先级摊开成显式列表，便于逐条审计和单测。
struct SelectRule {
    /// 规则名，用于测试定位
    name: &'static str,
    /// 谓词：该行是否命中本规则
    hit: fn(&str) -> bool,
}

const SELECT_RULES: [SelectRule; 3] = [
    SelectRule {
        name: "contains_question_mark",
        hit: has_question_mark,
    },
    SelectRule {
        name: "contains_question_word",
        hit: has_question_word,
    },
    SelectRule {
        name: "long_enough_after_prefix",
        hit: long_enough_after_prefix,
    },
];

/// 从 LLM 原始输出中提取一道面试题
///
/// 成功时返回的字符串保证：非空、两端无空白、以恰好一个 `?` 结尾，
/// 且内部不再含有其他 `?`。无法提取时返回 `None`，绝不 panic。
///
/// # 示例
/// ```
/// use interview_question_gen::extractor::extract_question;
///
/// assert_eq!(
///     extract_question(r#"{"question": "What is polymorphism?"}"#),
///     Some("What is polymorphism?".to_string())
/// );
/// assert_eq!(extract_question("   "), None);
/// ```
pub fn extract_question(raw: &str) -> Option<String> {
    let candidate = match extract_from_json(raw) {
        Some(question) => question,
        None => heuristic_candidate(raw),
    };
    finalize(&candidate)
}

// ========== 结构化路径 ==========

/// 尝试从原文中的 JSON 对象里取出 `question` 字段
///
/// 取第一个 `{` 到最后一个 `}`（贪婪），解析失败、字段缺失或为空
/// 都静默返回 `None`，由启发式路径兜底。
fn extract_from_json(raw: &str) -> Option<String> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end < start {
        return None;
    }

    let value: serde_json::Value = serde_json::from_str(&raw[start..=end]).ok()?;
    let question = value.get("question")?.as_str()?.trim();

    if question.is_empty() {
        None
    } else {
        Some(question.to_string())
    }
}

// ========== 启发式回退 ==========

/// 启发式路径：编号剥离 → 按行切分 → 规则选行 → 行内归一化
///
/// 返回的候选可能为空串，由 [`finalize`] 统一判定失败。
fn heuristic_candidate(raw: &str) -> String {
    let text = strip_leading_enumeration(raw);
    let lines = candidate_lines(text);
    let selected = select_candidate(&lines);
    normalize_line(selected)
}

/// 剥掉整段文本开头的一个编号前缀（`1. ` 或 `Question 2: `）
fn strip_leading_enumeration(text: &str) -> &str {
    if let Some(m) = re_enum_prefix().find(text) {
        return &text[m.end()..];
    }
    if let Some(m) = re_question_num_label().find(text) {
        return &text[m.end()..];
    }
    text
}

/// 按任意换行约定切分，去掉首尾空白和空行
fn candidate_lines(text: &str) -> Vec<&str> {
    text.split(|c| c == '\n' || c == '\r')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// 按 [`SELECT_RULES`] 的顺序选出一个候选行
///
/// 所有规则都落空时退回第一行；序列为空则返回空串。
fn select_candidate<'a>(lines: &[&'a str]) -> &'a str {
    for rule in &SELECT_RULES {
        if let Some(line) = lines.iter().find(|line| (rule.hit)(line)) {
            return line;
        }
    }
    lines.first().copied().unwrap_or("")
}

/// 规则 1：行内含 `?`
fn has_question_mark(line: &str) -> bool {
    line.contains('?')
}

/// 规则 2：行内整词命中疑问词表（大小写不敏感）
fn has_question_word(line: &str) -> bool {
    line.split(|c: char| !c.is_ascii_alphabetic())
        .any(|word| !word.is_empty() && QUESTION_WORDS.contains(word.to_ascii_lowercase().as_str()))
}

/// 规则 3：剥掉行首编号后长度超过 5 个字符
fn long_enough_after_prefix(line: &str) -> bool {
    let stripped = match re_enum_prefix().find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    };
    stripped.chars().count() > 5
}

/// 行内归一化：依次剥掉一个编号/项目符号前缀和一个 `Question|Q|Ask` 标签
fn normalize_line(line: &str) -> String {
    let no_prefix = re_line_prefix().replace(line, "");
    let no_label = re_label().replace(&no_prefix, "");
    no_label.trim().to_string()
}

// ========== 单题收尾 ==========

/// 收尾：截断到第一个 `?`（含），缺问号则补一个；退化结果判失败
fn finalize(candidate: &str) -> Option<String> {
    let mut question = candidate.trim().to_string();

    if let Some(pos) = question.find('?') {
        question.truncate(pos + 1);
    }
    if !question.ends_with('?') {
        question.push('?');
    }

    // 空候选补完问号后只剩 "?"，同样视为失败
    if question == "?" {
        None
    } else {
        Some(question)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 校验提取结果的不变式：非空、无首尾空白、恰好以一个 `?` 结尾
    fn assert_invariant(result: &str) {
        assert!(!result.is_empty());
        assert_eq!(result, result.trim());
        assert!(result.ends_with('?'));
        assert_eq!(result.matches('?').count(), 1, "结果中不应再有多余的 ?: {}", result);
    }

    #[test]
    fn test_clean_input_unchanged() {
        // 已经干净的单题原样返回
        assert_eq!(
            extract_question("What is polymorphism?"),
            Some("What is polymorphism?".to_string())
        );
    }

    #[test]
    fn test_json_short_circuit() {
        assert_eq!(
            extract_question(r#"{"question":"Describe how a hash table works?"}"#),
            Some("Describe how a hash table works?".to_string())
        );
    }

    #[test]
    fn test_json_with_surrounding_prose() {
        // JSON 前后夹杂说明文字时仍走结构化路径
        let raw = "Sure! Here is your question:\n{\"question\": \"What is a deadlock?\"}\nGood luck!";
        assert_eq!(extract_question(raw), Some("What is a deadlock?".to_string()));
    }

    #[test]
    fn test_json_without_trailing_question_mark() {
        // JSON 字段里没写问号，收尾阶段补上
        assert_eq!(
            extract_question(r#"{"question": "Explain ownership in Rust"}"#),
            Some("Explain ownership in Rust?".to_string())
        );
    }

    #[test]
    fn test_json_multi_question_truncated() {
        // JSON 字段里塞了两问，只保留第一问
        assert_eq!(
            extract_question(r#"{"question": "What is a REST API? Also, explain GraphQL?"}"#),
            Some("What is a REST API?".to_string())
        );
    }

    #[test]
    fn test_malformed_json_falls_through() {
        // 花括号配对但内容不是合法 JSON，回退到启发式路径
        let raw = "{oops not json}\nWhat is a closure?";
        assert_eq!(extract_question(raw), Some("What is a closure?".to_string()));
    }

    #[test]
    fn test_unterminated_brace_falls_through() {
        // 右花括号缺失时整行按普通文本处理，截断到第一个问号
        let raw = "{\"question\": \"What is a mutex?";
        assert_eq!(
            extract_question(raw),
            Some("{\"question\": \"What is a mutex?".to_string())
        );
    }

    #[test]
    fn test_json_missing_question_field() {
        let raw = "{\"answer\": \"42\"}\nHow does garbage collection work?";
        assert_eq!(
            extract_question(raw),
            Some("How does garbage collection work?".to_string())
        );
    }

    #[test]
    fn test_json_empty_question_field() {
        // question 字段为空白同样回退，疑问词规则选中第二行
        let raw = "{\"question\": \"   \"}\nDescribe the TCP handshake";
        assert_eq!(
            extract_question(raw),
            Some("Describe the TCP handshake?".to_string())
        );
    }

    #[test]
    fn test_multi_question_one_line_truncated() {
        assert_eq!(
            extract_question("What is a REST API? Also, explain GraphQL differences?"),
            Some("What is a REST API?".to_string())
        );
    }

    #[test]
    fn test_numbered_list_keeps_first_question() {
        let result =
            extract_question("1. What is polymorphism in OOP? 2. Explain encapsulation.").unwrap();
        assert_eq!(result, "What is polymorphism in OOP?");
        assert_invariant(&result);
    }

    #[test]
    fn test_numbered_lines_pick_question_line() {
        let raw = "Here are some options:\n1. Tell me about yourself.\n2. What is dependency injection?";
        assert_eq!(
            extract_question(raw),
            Some("What is dependency injection?".to_string())
        );
    }

    #[test]
    fn test_label_question_stripped() {
        assert_eq!(
            extract_question("Question: What is a closure in JavaScript?"),
            Some("What is a closure in JavaScript?".to_string())
        );
    }

    #[test]
    fn test_label_q_stripped() {
        assert_eq!(
            extract_question("Q: How does HTTPS work?"),
            Some("How does HTTPS work?".to_string())
        );
    }

    #[test]
    fn test_question_number_prefix_stripped() {
        assert_eq!(
            extract_question("Question 3: Why is indexing faster than a full scan?"),
            Some("Why is indexing faster than a full scan?".to_string())
        );
    }

    #[test]
    fn test_question_word_line_without_mark() {
        // 没有任何问号时，靠疑问词选行并补问号
        let raw = "Below is the task.\nExplain the event loop in Node";
        assert_eq!(
            extract_question(raw),
            Some("Explain the event loop in Node?".to_string())
        );
    }

    #[test]
    fn test_question_word_is_whole_word() {
        // "Whatever" 不应整词命中 "what"，第一行只能靠长度规则选中
        let raw = "Whatever happens happens";
        assert_eq!(extract_question(raw), Some("Whatever happens happens?".to_string()));
        assert!(!has_question_word("Whatever happens"));
        assert!(has_question_word("tell me WHAT happened"));
    }

    #[test]
    fn test_short_lines_skipped_by_length_rule() {
        // 前两行太短，长度规则选中第三行
        let raw = "Ok.\n---\nA binary tree stores ordered data";
        assert_eq!(
            extract_question(raw),
            Some("A binary tree stores ordered data?".to_string())
        );
    }

    #[test]
    fn test_fallback_to_first_line() {
        // 所有规则落空时退回第一行
        assert_eq!(extract_question("abc\nde"), Some("abc?".to_string()));
    }

    #[test]
    fn test_crlf_and_cr_newlines() {
        assert_eq!(
            extract_question("noise\r\nWhat is sharding?\r\nmore noise"),
            Some("What is sharding?".to_string())
        );
        assert_eq!(
            extract_question("noise\rWhat is sharding?"),
            Some("What is sharding?".to_string())
        );
    }

    #[test]
    fn test_empty_and_blank_inputs_fail() {
        assert_eq!(extract_question(""), None);
        assert_eq!(extract_question("   "), None);
        assert_eq!(extract_question("\n\r\n\t  \n"), None);
    }

    #[test]
    fn test_question_mark_only_fails() {
        assert_eq!(extract_question("?"), None);
        assert_eq!(extract_question("  ?  "), None);
        assert_eq!(extract_question("??"), None);
    }

    #[test]
    fn test_quoted_question_mark_truncates() {
        // 既定取舍：引号内的问号同样触发截断，不做引号感知
        assert_eq!(
            extract_question(r#"He asked "why?" — how would you respond?"#),
            Some(r#"He asked "why?"#.to_string())
        );
    }

    #[test]
    fn test_never_panics_and_invariant_holds() {
        let nasty_inputs = [
            "",
            "?",
            "{",
            "}",
            "}{",
            "{\"question\": 42}",
            "{\"question\": null}",
            "{\"question\": [\"a\"]}",
            "\u{0000}\u{FFFD}\u{FFFD}",
            "no newline at all but quite a long single line of text",
            "1.\n2.\n3.",
            "Question",
            "q",
            "￥#@……&*（）",
            "{\"question\":\"日本語で質問しますか？\"}",
            "   leading and trailing   \n\n\n",
        ];

        for raw in nasty_inputs {
            if let Some(result) = extract_question(raw) {
                assert_invariant(&result);
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let raw = "Intro\n1. What is CAP theorem? Explain each part.";
        assert_eq!(extract_question(raw), extract_question(raw));
    }

    // ========== 规则级单测 ==========

    #[test]
    fn test_rule_order_is_audited() {
        // 规则顺序就是优先级，调整前先改这里
        let names: Vec<&str> = SELECT_RULES.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            [
                "contains_question_mark",
                "contains_question_word",
                "long_enough_after_prefix"
            ]
        );
    }

    #[test]
    fn test_strip_leading_enumeration() {
        assert_eq!(strip_leading_enumeration("1. What is X"), "What is X");
        assert_eq!(strip_leading_enumeration("12) What is X"), "What is X");
        assert_eq!(strip_leading_enumeration("Question 2: What is X"), "What is X");
        assert_eq!(strip_leading_enumeration("question 10 - What is X"), "What is X");
        // 不带编号的标签不在整体剥离范围内，由行内归一化处理
        assert_eq!(strip_leading_enumeration("Question: What is X"), "Question: What is X");
        assert_eq!(strip_leading_enumeration("What is X"), "What is X");
    }

    #[test]
    fn test_normalize_line() {
        assert_eq!(normalize_line("3. What is X"), "What is X");
        assert_eq!(normalize_line("- What is X"), "What is X");
        assert_eq!(normalize_line("* Question: What is X"), "What is X");
        assert_eq!(normalize_line("ask - What is X"), "What is X");
        // "Quick" 不是整词 "q"，不应误剥
        assert_eq!(normalize_line("Quick sort basics"), "Quick sort basics");
    }

    #[test]
    fn test_long_enough_after_prefix() {
        assert!(long_enough_after_prefix("1. abcdef"));
        assert!(!long_enough_after_prefix("1. abc"));
        assert!(long_enough_after_prefix("abcdefg"));
        assert!(!long_enough_after_prefix("abc"));
    }
}
