// パイプラインの抽象化インターフェース定義

use super::error::StageError;
use super::types::InputMode;
use async_trait::async_trait;
use mockall::automock;
use std::time::Duration;

/// ワーカープールの設定を抽象化するトレイト
#[automock]
pub trait PipelineConfig: Send + Sync {
    /// 同時に動かすワーカー数を取得
    fn max_workers(&self) -> usize;

    /// 入力チャンネルのバッファサイズを取得
    fn channel_buffer_size(&self) -> usize;

    /// ワーカーごとのAPI呼び出し間隔を取得
    fn sleep_duration(&self) -> Duration;

    /// 入力行の解釈モードを取得
    fn input_mode(&self) -> InputMode;
}

/// 進捗・診断報告の抽象化トレイト
/// 結果シンクには乗らないエラーはここに流れる
#[automock]
#[async_trait]
pub trait ProgressReporter: Send + Sync {
    /// 処理開始時の報告
    async fn report_started(&self, worker_count: usize);

    /// 1入力の処理失敗の報告
    async fn report_item_error(&self, input: &str, error: &StageError);

    /// 全ワーカー終了時の報告
    async fn report_completed(&self, processed: usize, errors: usize);
}
