// プロンプトテンプレート - プレースホルダ展開
// {input} を解決済みコンテンツに置き換える。{{ と }} は波括弧リテラル

use crate::core::error::TemplateError;

/// テンプレートに渡される唯一のフィールド名
pub const INPUT_FIELD: &str = "input";

#[derive(Debug, Clone)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// 解析済みのプロンプトテンプレート
/// 解析は起動時に一度だけ行い、描画は入力ごとに繰り返す
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    segments: Vec<Segment>,
}

impl PromptTemplate {
    /// テンプレート文字列を解析
    /// 閉じられていないプレースホルダは解析時点で失敗する
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '{' => {
                    if chars.peek() == Some(&'{') {
                        chars.next();
                        literal.push('{');
                        continue;
                    }

                    let mut name = String::new();
                    let mut closed = false;
                    for c in chars.by_ref() {
                        if c == '}' {
                            closed = true;
                            break;
                        }
                        name.push(c);
                    }
                    if !closed {
                        return Err(TemplateError::UnclosedPlaceholder);
                    }

                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Placeholder(name));
                }
                '}' => {
                    // }} は } リテラル。単独の } もリテラルとして扱う
                    if chars.peek() == Some(&'}') {
                        chars.next();
                    }
                    literal.push('}');
                }
                _ => literal.push(c),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self { segments })
    }

    /// 解決済みコンテンツを流し込んでプロンプトを描画
    /// input 以外のプレースホルダ参照は失敗する
    pub fn render(&self, input: &str) -> Result<String, TemplateError> {
        let mut rendered = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => rendered.push_str(text),
                Segment::Placeholder(name) if name == INPUT_FIELD => rendered.push_str(input),
                Segment::Placeholder(name) => {
                    return Err(TemplateError::UndefinedPlaceholder { name: name.clone() });
                }
            }
        }
        Ok(rendered)
    }
}
