// タグ抽出 - 生成テキストから区切りタグの中身を取り出す

use crate::core::error::ExtractError;

/// 生成結果から取り出すタグの名前
pub const OUTPUT_TAG: &str = "output";

/// text 中の最初の <tag> と、その後ろで最初の </tag> の間を取り出す
/// 前後の空白は取り除く。入れ子や2組目以降のタグは扱わない
pub fn extract_tag(tag: &str, text: &str) -> Result<String, ExtractError> {
    let start_marker = format!("<{tag}>");
    let end_marker = format!("</{tag}>");

    let start = text
        .find(&start_marker)
        .ok_or_else(|| ExtractError::StartNotFound(tag.to_string()))?;
    let after_start = start + start_marker.len();

    let end = text[after_start..]
        .find(&end_marker)
        .ok_or_else(|| ExtractError::EndNotFound(tag.to_string()))?;

    Ok(text[after_start..after_start + end].trim().to_string())
}

/// 改行文字を2文字のエスケープ列 \n に変換する
/// 単射ではない。元から \n の2文字を含む値と生の改行を含む値は
/// 同じ結果になるため、逆変換はできない
pub fn escape_newlines(value: &str) -> String {
    value.replace('\n', "\\n")
}
