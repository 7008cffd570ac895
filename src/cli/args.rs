use crate::generation::anthropic::{DEFAULT_MAX_TOKENS, DEFAULT_MODEL};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "prompt_batch")]
#[command(about = "Render stdin lines into a prompt template and batch-process them through the Anthropic API")]
#[command(version)]
pub struct Cli {
    /// Path to the file containing the prompt template
    #[arg(short = 'p', long)]
    pub template: PathBuf,

    /// Anthropic API key (falls back to the ANTHROPIC_API_KEY environment variable)
    #[arg(short = 'k', long)]
    pub api_key: Option<String>,

    /// Maximum number of concurrent workers
    #[arg(short = 'w', long, default_value = "1")]
    pub workers: usize,

    /// Sleep duration in milliseconds between API calls per worker
    #[arg(short = 's', long, default_value = "0")]
    pub sleep_ms: u64,

    /// Treat input lines as file paths (default is to treat them as raw strings)
    #[arg(short = 'f', long)]
    pub file_mode: bool,

    /// Model identifier to request
    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Maximum number of tokens to generate per request
    #[arg(long, default_value_t = DEFAULT_MAX_TOKENS)]
    pub max_tokens: u32,

    /// Suppress progress output on stderr
    #[arg(short = 'q', long)]
    pub quiet: bool,
}
