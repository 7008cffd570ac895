// ワーカープール - 並列実行のオーケストレーション
// 入力チャンネルをワーカー群に分配し、結果を単一のシンクに集約する

use super::worker::{spawn_worker, WorkerSettings};
use crate::core::traits::{PipelineConfig, ProgressReporter};
use crate::core::types::PromptResult;
use crate::generation::GenerationBackend;
use crate::template::PromptTemplate;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;

/// テンプレート・生成バックエンド・報告先を束ねたワーカープール
pub struct PromptPool<G, R> {
    template: Arc<PromptTemplate>,
    backend: Arc<G>,
    reporter: Arc<R>,
}

impl<G, R> PromptPool<G, R>
where
    G: GenerationBackend + 'static,
    R: ProgressReporter + 'static,
{
    /// 新しいプールを作成
    pub fn new(template: Arc<PromptTemplate>, backend: Arc<G>, reporter: Arc<R>) -> Self {
        Self {
            template,
            backend,
            reporter,
        }
    }

    /// ワーカー群を起動し、結果シンクの受信側を即座に返す
    ///
    /// シンクは全ワーカーの終了後にのみ閉じられる。容量はワーカー数で
    /// 抑えてあり、読み出しが遅ければワーカー側が待たされる。
    /// 結果は完了順に並び、入力順は保証されない
    pub async fn run<C>(
        &self,
        input_rx: mpsc::Receiver<String>,
        config: &C,
    ) -> mpsc::Receiver<PromptResult>
    where
        C: PipelineConfig,
    {
        let worker_count = config.max_workers();
        let (result_tx, result_rx) = mpsc::channel(worker_count.max(1));

        // 入力チャンネルを全ワーカーで共有。取り出しの排他はここで担保する
        let input_rx = Arc::new(tokio::sync::Mutex::new(input_rx));
        let processed = Arc::new(AtomicUsize::new(0));
        let errors = Arc::new(AtomicUsize::new(0));
        let settings = WorkerSettings {
            sleep_duration: config.sleep_duration(),
            input_mode: config.input_mode(),
        };

        self.reporter.report_started(worker_count).await;

        let mut handles = Vec::with_capacity(worker_count);
        for _ in 0..worker_count {
            handles.push(spawn_worker(
                Arc::clone(&self.template),
                Arc::clone(&self.backend),
                Arc::clone(&self.reporter),
                Arc::clone(&input_rx),
                result_tx.clone(),
                settings,
                Arc::clone(&processed),
                Arc::clone(&errors),
            ));
        }

        // 全ワーカーの終了を待ってから送信側を落とし、シンクの終端を知らせる
        let reporter = Arc::clone(&self.reporter);
        tokio::spawn(async move {
            for handle in handles {
                let _ = handle.await;
            }
            reporter
                .report_completed(
                    processed.load(Ordering::Relaxed),
                    errors.load(Ordering::Relaxed),
                )
                .await;
            drop(result_tx);
        });

        result_rx
    }
}
