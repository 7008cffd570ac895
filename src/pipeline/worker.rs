// ワーカー - 1入力分のパイプラインとワーカーループ

use crate::core::error::StageError;
use crate::core::traits::ProgressReporter;
use crate::core::types::{InputMode, PromptResult};
use crate::extract::{escape_newlines, extract_tag, OUTPUT_TAG};
use crate::generation::GenerationBackend;
use crate::resolve::resolve_content;
use crate::template::PromptTemplate;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// 全ワーカーで共有される読み取り専用の動作設定
#[derive(Debug, Clone, Copy)]
pub struct WorkerSettings {
    pub sleep_duration: Duration,
    pub input_mode: InputMode,
}

/// 1入力を 解決 → 描画 → 生成 → 抽出 の順で処理する
/// 成功時は改行エスケープ済みの抽出値を返す
pub async fn process_single_input<G>(
    template: &PromptTemplate,
    backend: &G,
    input: &str,
    mode: InputMode,
) -> Result<String, StageError>
where
    G: GenerationBackend,
{
    let content = resolve_content(input, mode).await?;
    let prompt = template.render(&content)?;
    let text = backend
        .generate(&prompt)
        .await
        .map_err(StageError::Service)?;
    let value = extract_tag(OUTPUT_TAG, &text)?;

    Ok(escape_newlines(&value))
}

/// 単一ワーカーを起動
/// 入力チャンネルが尽きるまで処理を続け、失敗した入力は報告して捨てる
#[allow(clippy::too_many_arguments)]
pub fn spawn_worker<G, R>(
    template: Arc<PromptTemplate>,
    backend: Arc<G>,
    reporter: Arc<R>,
    input_rx: Arc<tokio::sync::Mutex<mpsc::Receiver<String>>>,
    result_tx: mpsc::Sender<PromptResult>,
    settings: WorkerSettings,
    processed: Arc<AtomicUsize>,
    errors: Arc<AtomicUsize>,
) -> tokio::task::JoinHandle<()>
where
    G: GenerationBackend + 'static,
    R: ProgressReporter + 'static,
{
    tokio::spawn(async move {
        let mut first_call = true;
        loop {
            // 次の入力を取得。ロックは取得中のみ保持する
            let input = {
                let mut rx = input_rx.lock().await;
                match rx.recv().await {
                    Some(input) => input,
                    None => break, // 入力ソース終端
                }
            };

            // 2回目以降の呼び出しはスリープで間隔を空ける
            // 粗い呼び出しレート抑制であり、全体のレート上限ではない
            if !first_call && !settings.sleep_duration.is_zero() {
                tokio::time::sleep(settings.sleep_duration).await;
            }

            match process_single_input(
                template.as_ref(),
                backend.as_ref(),
                &input,
                settings.input_mode,
            )
            .await
            {
                Ok(output) => {
                    processed.fetch_add(1, Ordering::Relaxed);
                    if result_tx.send(PromptResult { input, output }).await.is_err() {
                        // 結果チャンネルが閉じられた場合は終了
                        break;
                    }
                }
                Err(error) => {
                    errors.fetch_add(1, Ordering::Relaxed);
                    reporter.report_item_error(&input, &error).await;
                }
            }

            // 成否にかかわらず初回フラグを下ろす
            first_call = false;
        }
    })
}
