use clap::Parser;
use prompt_batch::cli::{args::Cli, commands::execute_run};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(error) = execute_run(cli).await {
        eprintln!("❌ エラー: {error:#}");
        std::process::exit(1);
    }
}
