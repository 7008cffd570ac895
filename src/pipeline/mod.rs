// パイプライン層 - 入力ソース、ワーカー、プールのオーケストレーション

pub mod pool;
pub mod source;
pub mod worker;

// 公開API
pub use pool::PromptPool;
pub use source::spawn_line_reader;
pub use worker::{process_single_input, WorkerSettings};
