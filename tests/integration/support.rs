// テスト用の共有ユーティリティ

use async_trait::async_trait;
use prompt_batch::core::error::StageError;
use prompt_batch::core::traits::ProgressReporter;
use prompt_batch::generation::MockGenerationBackend;
use prompt_batch::template::PromptTemplate;
use std::sync::atomic::AtomicUsize;
use std::sync::{Arc, Mutex};

/// 報告内容を記録するテスト用レポーター
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub started_workers: AtomicUsize,
    pub error_inputs: Mutex<Vec<String>>,
    pub completed: Mutex<Option<(usize, usize)>>,
}

#[async_trait]
impl ProgressReporter for RecordingReporter {
    async fn report_started(&self, worker_count: usize) {
        self.started_workers
            .store(worker_count, std::sync::atomic::Ordering::Relaxed);
    }

    async fn report_item_error(&self, input: &str, _error: &StageError) {
        self.error_inputs.lock().unwrap().push(input.to_string());
    }

    async fn report_completed(&self, processed: usize, errors: usize) {
        *self.completed.lock().unwrap() = Some((processed, errors));
    }
}

/// プロンプトをそのまま返す生成バックエンド
pub fn echo_backend() -> Arc<MockGenerationBackend> {
    let mut mock_backend = MockGenerationBackend::new();
    mock_backend
        .expect_generate()
        .returning(|prompt| Ok(prompt.to_string()));
    Arc::new(mock_backend)
}

/// 入力をタグで囲んで返す標準テンプレート
pub fn echo_template() -> Arc<PromptTemplate> {
    Arc::new(PromptTemplate::parse("<output>{input}-ok</output>").unwrap())
}
