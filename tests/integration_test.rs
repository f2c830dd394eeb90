use interview_question_gen::config::Config;
use interview_question_gen::extract_question;
use interview_question_gen::models::load_all_plan_files;
use interview_question_gen::services::LlmService;
use interview_question_gen::utils::logging;
use interview_question_gen::{Difficulty, InterviewTopic};
use std::path::PathBuf;

/// 通过公共 API 走一遍提取器：在线生成链路和测试用的是同一份实现
#[test]
fn test_extract_question_via_public_api() {
    // 合规的 JSON 输出
    assert_eq!(
        extract_question(r#"{"question": "What is a race condition?"}"#),
        Some("What is a race condition?".to_string())
    );

    // 不合规的多题输出只保留第一问
    assert_eq!(
        extract_question("1. What is a process? 2. What is a thread?"),
        Some("What is a process?".to_string())
    );

    // 完全没有可用内容时提取失败
    assert_eq!(extract_question("   "), None);
}

/// 加载计划文件的完整流程（写临时文件 → 扫描目录 → 解析）
#[tokio::test]
async fn test_load_plan_files() {
    // 初始化日志
    logging::init();

    let folder: PathBuf = std::env::temp_dir().join("interview_question_gen_plans_test");
    let _ = std::fs::remove_dir_all(&folder);
    std::fs::create_dir_all(&folder).expect("创建临时目录失败");

    let content = r#"
        name = "前端一面模拟"
        difficulty = "junior"

        [[slots]]
        topic = "js"
        count = 2

        [[slots]]
        topic = "networking"
    "#;
    std::fs::write(folder.join("plan_a.toml"), content).expect("写入临时文件失败");

    // 非 TOML 文件应被忽略
    std::fs::write(folder.join("notes.txt"), "ignore me").expect("写入临时文件失败");

    let plans = load_all_plan_files(&folder.to_string_lossy())
        .await
        .expect("应该能够加载计划文件");

    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].name, "前端一面模拟");
    assert_eq!(plans[0].total_questions(), 3);
    assert!(plans[0].file_path.is_some());

    let _ = std::fs::remove_dir_all(&folder);
}

/// 坏文件不应中断整个目录的加载
#[tokio::test]
async fn test_load_plan_files_skips_broken_toml() {
    logging::init();

    let folder: PathBuf = std::env::temp_dir().join("interview_question_gen_broken_test");
    let _ = std::fs::remove_dir_all(&folder);
    std::fs::create_dir_all(&folder).expect("创建临时目录失败");

    std::fs::write(folder.join("broken.toml"), "name = [unclosed").expect("写入临时文件失败");
    std::fs::write(
        folder.join("good.toml"),
        "name = \"ok\"\ndifficulty = \"mid\"\n\n[[slots]]\ntopic = \"rust\"\n",
    )
    .expect("写入临时文件失败");

    let plans = load_all_plan_files(&folder.to_string_lossy())
        .await
        .expect("应该能够加载计划文件");

    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].name, "ok");

    let _ = std::fs::remove_dir_all(&folder);
}

/// 测试真实 LLM 出题
///
/// 运行方式：
/// ```bash
/// LLM_API_KEY=... cargo test test_generate_single_question -- --ignored --nocapture
/// ```
#[tokio::test]
#[ignore] // 默认忽略，需要配置好 LLM_API_KEY 后手动运行
async fn test_generate_single_question() {
    // 初始化日志
    logging::init();

    // 加载配置
    let config = Config::from_env();

    let service = LlmService::new(&config);

    let result = service
        .generate_question(InterviewTopic::Rust, Difficulty::Mid, None)
        .await
        .expect("LLM 调用不应失败");

    match result {
        Some(draft) => {
            println!("\n========== 生成结果 ==========");
            println!("题目: {}", draft.question);
            println!("尝试次数: {}", draft.attempts);
            println!("==============================\n");
            assert!(draft.question.ends_with('?'));
            assert_eq!(draft.question.matches('?').count(), 1);
        }
        None => panic!("多次生成都未能提取出有效面试题"),
    }
}
