pub mod cli;
pub mod core;
pub mod extract;
pub mod generation;
pub mod output;
pub mod pipeline;
pub mod resolve;
pub mod services;
pub mod template;

// 公開API - 明示的にエクスポートして曖昧性を回避
pub use crate::core::{InputMode, PipelineConfig, ProgressReporter, PromptResult, StageError};
pub use crate::generation::{AnthropicClient, GenerationBackend};
pub use crate::pipeline::{spawn_line_reader, PromptPool};
pub use crate::services::{ConsoleProgressReporter, DefaultPipelineConfig, NoOpProgressReporter};
pub use crate::template::PromptTemplate;
