// 処理に関連するデータ型定義

/// 入力行の解釈モード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// 入力行をそのままテンプレートに渡す
    #[default]
    Text,
    /// 入力行をファイルパスとして解釈し、その内容を渡す
    File,
}

/// 1入力に対する生成結果
/// output は改行エスケープ済みの抽出値
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptResult {
    pub input: String,
    pub output: String,
}
