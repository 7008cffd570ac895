// 出力整形 - タブ区切りの結果行を組み立てる

use crate::core::types::{InputMode, PromptResult};
use std::path::Path;

/// タブ文字を2文字のエスケープ列 \t に変換する
pub fn escape_tabs(value: &str) -> String {
    value.replace('\t', "\\t")
}

/// 結果1件をタブ区切りの1行に整形する
/// File モードではフルパスではなくファイル名のみを表示する
pub fn format_result_line(result: &PromptResult, mode: InputMode) -> String {
    let display_input = match mode {
        InputMode::Text => result.input.as_str(),
        InputMode::File => Path::new(&result.input)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(result.input.as_str()),
    };

    format!(
        "{}\t{}",
        escape_tabs(display_input),
        escape_tabs(&result.output)
    )
}
