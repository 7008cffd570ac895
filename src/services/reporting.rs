// 進捗・診断報告の具象実装
// 結果は標準出力に流れるため、報告はすべて標準エラーに出す

use crate::core::error::StageError;
use crate::core::traits::ProgressReporter;
use async_trait::async_trait;

/// 標準エラーへの進捗報告実装
#[derive(Debug, Default, Clone)]
pub struct ConsoleProgressReporter {
    quiet: bool,
}

impl ConsoleProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet() -> Self {
        Self { quiet: true }
    }
}

#[async_trait]
impl ProgressReporter for ConsoleProgressReporter {
    async fn report_started(&self, worker_count: usize) {
        if !self.quiet {
            eprintln!("🚀 {worker_count}ワーカーで処理を開始します");
        }
    }

    async fn report_item_error(&self, input: &str, error: &StageError) {
        if !self.quiet {
            eprintln!("❌ 入力処理エラー ({input}): {error}");
        }
    }

    async fn report_completed(&self, processed: usize, errors: usize) {
        if !self.quiet {
            eprintln!("✅ 処理完了! 成功: {processed}, エラー: {errors}");
        }
    }
}

/// 何もしない進捗報告実装（テスト・ベンチマーク用）
#[derive(Debug, Default, Clone)]
pub struct NoOpProgressReporter;

impl NoOpProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProgressReporter for NoOpProgressReporter {
    async fn report_started(&self, _worker_count: usize) {
        // 何もしない
    }

    async fn report_item_error(&self, _input: &str, _error: &StageError) {
        // 何もしない
    }

    async fn report_completed(&self, _processed: usize, _errors: usize) {
        // 何もしない
    }
}
