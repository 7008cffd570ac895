// 入力ソース - 行単位の読み込みとチャンネルへの配信

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;

/// 行リーダーを起動し、入力チャンネルの受信側を返す
/// ストリーム終端でチャンネルを閉じる。バッファサイズ分だけ先読みする
pub fn spawn_line_reader<R>(reader: R, buffer_size: usize) -> mpsc::Receiver<String>
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    let (input_tx, input_rx) = mpsc::channel(buffer_size);

    tokio::spawn(async move {
        let mut lines = reader.lines();
        // EOF と読み込みエラーはどちらも配信終了として扱う
        while let Ok(Some(line)) = lines.next_line().await {
            if input_tx.send(line).await.is_err() {
                // 受信側が閉じられた場合は正常終了
                break;
            }
        }
    });

    input_rx
}
