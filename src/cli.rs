use clap::Parser;
use std::path::PathBuf;

/// StoryEngineのカードCSVを、セットと種別ごとのJSONファイルに変換するツール
#[derive(Parser, Debug)]
#[command(name = "card_converter", author, version, about, long_about = None)]
pub struct Args {
    /// 変換するCSVファイルのパス
    #[arg(short = 'i', long = "inputfile")]
    pub input_file: PathBuf,

    /// JSONファイルの出力先フォルダのパス (存在しない場合は作成)
    #[arg(short = 'o', long = "outputdir")]
    pub output_dir: PathBuf,

    /// ログを詳しく表示する (-v: debug, -vv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// `RUST_LOG` が未設定のときに使うログレベル。
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}
