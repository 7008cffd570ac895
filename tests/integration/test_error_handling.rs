// 失敗分離の統合テスト
// 1入力の失敗は報告されるだけで、他の入力やプール全体には波及しない

use crate::support::{echo_backend, echo_template, RecordingReporter};
use prompt_batch::core::types::InputMode;
use prompt_batch::generation::MockGenerationBackend;
use prompt_batch::pipeline::{spawn_line_reader, PromptPool};
use prompt_batch::services::DefaultPipelineConfig;
use prompt_batch::template::PromptTemplate;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

#[tokio::test]
async fn test_missing_file_does_not_block_pool() {
    let temp_dir = TempDir::new().unwrap();
    let valid = temp_dir.path().join("valid.txt");
    fs::write(&valid, "readable content").unwrap();
    let missing = temp_dir.path().join("missing.txt");

    let stdin_data = format!("{}\n{}\n", valid.display(), missing.display());
    let input_rx = spawn_line_reader(std::io::Cursor::new(stdin_data.into_bytes()), 10);

    let reporter = Arc::new(RecordingReporter::default());
    let pool = PromptPool::new(echo_template(), echo_backend(), Arc::clone(&reporter));
    let config = DefaultPipelineConfig::default()
        .with_max_workers(2)
        .with_input_mode(InputMode::File);

    let mut result_rx = pool.run(input_rx, &config).await;

    let mut results = Vec::new();
    while let Some(result) = result_rx.recv().await {
        results.push(result);
    }

    // 有効なファイルの分だけ結果が出る
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].output, "readable content-ok");

    // 欠損ファイルはエラーとして報告される
    let error_inputs = reporter.error_inputs.lock().unwrap();
    assert_eq!(error_inputs.len(), 1);
    assert!(error_inputs[0].ends_with("missing.txt"));
    assert_eq!(*reporter.completed.lock().unwrap(), Some((1, 1)));
}

#[tokio::test]
async fn test_all_items_failing_terminates_normally() {
    // 全入力が描画で失敗しても、プールは空のシンクで正常終了する
    let template = Arc::new(PromptTemplate::parse("{undefined}").unwrap());

    let input_rx = spawn_line_reader(&b"a\nb\nc\n"[..], 10);
    let reporter = Arc::new(RecordingReporter::default());
    let pool = PromptPool::new(template, echo_backend(), Arc::clone(&reporter));
    let config = DefaultPipelineConfig::default().with_max_workers(2);

    let mut result_rx = pool.run(input_rx, &config).await;

    assert!(result_rx.recv().await.is_none());
    assert_eq!(*reporter.completed.lock().unwrap(), Some((0, 3)));
    assert_eq!(reporter.error_inputs.lock().unwrap().len(), 3);
}

#[tokio::test]
async fn test_service_failure_isolated_to_one_item() {
    let template = Arc::new(PromptTemplate::parse("<output>{input}</output>").unwrap());
    let mut mock_backend = MockGenerationBackend::new();
    mock_backend.expect_generate().returning(|prompt| {
        if prompt.contains("flaky") {
            Err(anyhow::anyhow!("503 overloaded"))
        } else {
            Ok(prompt.to_string())
        }
    });

    let input_rx = spawn_line_reader(&b"steady\nflaky\nanother\n"[..], 10);
    let reporter = Arc::new(RecordingReporter::default());
    let pool = PromptPool::new(template, Arc::new(mock_backend), Arc::clone(&reporter));
    let config = DefaultPipelineConfig::default().with_max_workers(2);

    let mut result_rx = pool.run(input_rx, &config).await;

    let mut succeeded = Vec::new();
    while let Some(result) = result_rx.recv().await {
        succeeded.push(result.input);
    }

    succeeded.sort();
    assert_eq!(succeeded, vec!["another", "steady"]);
    assert_eq!(
        *reporter.error_inputs.lock().unwrap(),
        vec!["flaky".to_string()]
    );
}

#[tokio::test]
async fn test_extract_failure_isolated_to_one_item() {
    let template = Arc::new(PromptTemplate::parse("{input}").unwrap());
    let mut mock_backend = MockGenerationBackend::new();
    mock_backend.expect_generate().returning(|prompt| {
        if prompt == "untagged" {
            // タグなしの応答は抽出段階で落ちる
            Ok("plain response".to_string())
        } else {
            Ok(format!("<output>{prompt}</output>"))
        }
    });

    let input_rx = spawn_line_reader(&b"tagged\nuntagged\n"[..], 10);
    let reporter = Arc::new(RecordingReporter::default());
    let pool = PromptPool::new(template, Arc::new(mock_backend), Arc::clone(&reporter));
    let config = DefaultPipelineConfig::default().with_max_workers(1);

    let mut result_rx = pool.run(input_rx, &config).await;

    let result = result_rx.recv().await.unwrap();
    assert_eq!(result.input, "tagged");
    assert!(result_rx.recv().await.is_none());
    assert_eq!(*reporter.completed.lock().unwrap(), Some((1, 1)));
}
