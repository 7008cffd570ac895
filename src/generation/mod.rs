use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

pub mod anthropic;

pub use anthropic::AnthropicClient;

/// テキスト生成バックエンドのトレイト
/// プロンプト1つを渡して生成テキストを受け取る。失敗は呼び出し側で
/// 1入力分のエラーとして扱われる
#[automock]
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// プロンプトを送信して生成テキストを取得
    async fn generate(&self, prompt: &str) -> Result<String>;
}
