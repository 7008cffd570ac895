// パイプライン設定の具象実装

use crate::core::traits::PipelineConfig;
use crate::core::types::InputMode;
use std::time::Duration;

/// 既定値つきのパイプライン設定
#[derive(Debug, Clone)]
pub struct DefaultPipelineConfig {
    max_workers: usize,
    channel_buffer_size: usize,
    sleep_duration: Duration,
    input_mode: InputMode,
}

impl Default for DefaultPipelineConfig {
    fn default() -> Self {
        Self {
            max_workers: 1,
            channel_buffer_size: 100,
            sleep_duration: Duration::ZERO,
            input_mode: InputMode::Text,
        }
    }
}

impl DefaultPipelineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// ワーカー数を設定
    pub fn with_max_workers(mut self, max_workers: usize) -> Self {
        self.max_workers = max_workers;
        self
    }

    /// 入力チャンネルのバッファサイズを設定
    pub fn with_channel_buffer_size(mut self, channel_buffer_size: usize) -> Self {
        self.channel_buffer_size = channel_buffer_size;
        self
    }

    /// API呼び出し間隔を設定
    pub fn with_sleep_duration(mut self, sleep_duration: Duration) -> Self {
        self.sleep_duration = sleep_duration;
        self
    }

    /// 入力解釈モードを設定
    pub fn with_input_mode(mut self, input_mode: InputMode) -> Self {
        self.input_mode = input_mode;
        self
    }
}

impl PipelineConfig for DefaultPipelineConfig {
    fn max_workers(&self) -> usize {
        self.max_workers
    }

    fn channel_buffer_size(&self) -> usize {
        self.channel_buffer_size
    }

    fn sleep_duration(&self) -> Duration {
        self.sleep_duration
    }

    fn input_mode(&self) -> InputMode {
        self.input_mode
    }
}
