// run コマンド - 構築時検証、パイプライン組み立て、結果の書き出し

use crate::cli::args::Cli;
use crate::core::traits::PipelineConfig;
use crate::core::types::{InputMode, PromptResult};
use crate::generation::anthropic::AnthropicClient;
use crate::output::format_result_line;
use crate::pipeline::{spawn_line_reader, PromptPool};
use crate::services::{ConsoleProgressReporter, DefaultPipelineConfig};
use crate::template::PromptTemplate;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::BufReader;
use tokio::sync::mpsc;

/// APIキーのフォールバック先の環境変数名
pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

/// APIキーをフラグまたは環境変数から解決する
pub fn resolve_api_key(flag: Option<String>) -> Result<String> {
    if let Some(key) = flag.filter(|key| !key.is_empty()) {
        return Ok(key);
    }

    std::env::var(API_KEY_ENV)
        .ok()
        .filter(|key| !key.is_empty())
        .ok_or_else(|| {
            anyhow::anyhow!("APIキーを -k フラグか {API_KEY_ENV} 環境変数で指定してください")
        })
}

/// テンプレートファイルを読み込んで解析する
/// ここでの失敗は致命的で、ワーカー起動前に処理を中断する
pub fn load_template(path: &Path) -> Result<PromptTemplate> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("テンプレートファイルを読み込めません: {}", path.display()))?;

    PromptTemplate::parse(&source)
        .with_context(|| format!("テンプレートを解析できません: {}", path.display()))
}

/// 結果シンクを排出し、1件ごとにタブ区切り行を書き出す
pub async fn drain_results(
    mut result_rx: mpsc::Receiver<PromptResult>,
    mode: InputMode,
    out: &mut impl Write,
) -> Result<()> {
    while let Some(result) = result_rx.recv().await {
        writeln!(out, "{}", format_result_line(&result, mode))?;
    }
    Ok(())
}

/// run コマンドの実行
/// 標準入力を行単位で取り込み、結果を標準出力に書き出す
pub async fn execute_run(cli: Cli) -> Result<()> {
    if cli.workers == 0 {
        anyhow::bail!("ワーカー数は1以上を指定してください");
    }

    let api_key = resolve_api_key(cli.api_key)?;
    let template = load_template(&cli.template)?;

    let client = AnthropicClient::new(api_key)
        .with_model(cli.model)
        .with_max_tokens(cli.max_tokens);

    let input_mode = if cli.file_mode {
        InputMode::File
    } else {
        InputMode::Text
    };
    let config = DefaultPipelineConfig::default()
        .with_max_workers(cli.workers)
        .with_sleep_duration(Duration::from_millis(cli.sleep_ms))
        .with_input_mode(input_mode);

    let reporter = if cli.quiet {
        ConsoleProgressReporter::quiet()
    } else {
        ConsoleProgressReporter::new()
    };

    let input_rx = spawn_line_reader(
        BufReader::new(tokio::io::stdin()),
        config.channel_buffer_size(),
    );
    let pool = PromptPool::new(Arc::new(template), Arc::new(client), Arc::new(reporter));
    let result_rx = pool.run(input_rx, &config).await;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    drain_results(result_rx, input_mode, &mut out).await
}
