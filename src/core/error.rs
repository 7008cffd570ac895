// パイプライン処理用のカスタムエラー型定義

use thiserror::Error;

/// テンプレート解析・描画のエラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("閉じられていないプレースホルダがあります")]
    UnclosedPlaceholder,

    #[error("未定義のプレースホルダ: {{{name}}}")]
    UndefinedPlaceholder { name: String },
}

/// タグ抽出のエラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("開始タグ <{0}> が見つかりません")]
    StartNotFound(String),

    #[error("終了タグ </{0}> が見つかりません")]
    EndNotFound(String),
}

/// 1入力分のパイプラインで発生するエラー
/// どの段階で失敗したかをバリアントで区別する
#[derive(Error, Debug)]
pub enum StageError {
    #[error("入力読み込みエラー: {path} - {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("テンプレート描画エラー: {0}")]
    Render(#[from] TemplateError),

    #[error("生成APIエラー: {0}")]
    Service(#[source] anyhow::Error),

    #[error("タグ抽出エラー: {0}")]
    Extract(#[from] ExtractError),
}

impl StageError {
    /// 失敗した段階の名前を取得
    pub const fn stage(&self) -> &'static str {
        match self {
            Self::Read { .. } => "resolve",
            Self::Render(_) => "render",
            Self::Service(_) => "generate",
            Self::Extract(_) => "extract",
        }
    }
}
