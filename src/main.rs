mod cli;
mod workflow;

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> ExitCode {
    // コマンドライン引数を解析します (必須の引数が無ければここで終了)
    let args = cli::Args::parse();

    // ログの初期化。RUST_LOG が設定されていればそちらを優先する。
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level()));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match workflow::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "conversion aborted");
            ExitCode::FAILURE
        }
    }
}
