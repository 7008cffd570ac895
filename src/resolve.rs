// コンテンツ解決 - 入力行をテンプレートに渡すテキストへ変換

use crate::core::error::StageError;
use crate::core::types::InputMode;

/// 入力行を解決する
/// Text モードでは入力をそのまま返し、File モードではパスとして読み込む
pub async fn resolve_content(input: &str, mode: InputMode) -> Result<String, StageError> {
    match mode {
        InputMode::Text => Ok(input.to_string()),
        InputMode::File => tokio::fs::read_to_string(input)
            .await
            .map_err(|source| StageError::Read {
                path: input.to_string(),
                source,
            }),
    }
}
