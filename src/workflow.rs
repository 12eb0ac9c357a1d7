//! アプリケーションのメインワークフローを定義するモジュール。
//!
//! このモジュールは、UI層（`cli`）とドメイン層（`domain`）を仲介し、
//! CSVからJSONへの変換の処理フローを実装します。

use crate::cli::Args;
use card_converter::domain::converter::{CardConverter, Conversion};
use card_converter::domain::paths::csv_file_path::CsvFilePath;
use card_converter::domain::paths::output_directory::OutputDirectory;
use card_converter::error::AppError;

// --- public な main 関数 ---

/// アプリケーションのメインロジックを実行します。
///
/// # 引数
/// * `args`: コマンドラインからパースされた引数 (`cli::Args`)。
///
/// # 戻り値
/// * `Ok(())`: すべての処理が正常に完了した場合。
/// * `Err(AppError)`: 処理中に回復不可能なエラーが発生した場合。
///   この場合、エラーが起きる前に書き出したファイルはそのまま残る。
pub fn run(args: &Args) -> Result<(), AppError> {
    // 1. 入力ファイルの検証
    let input_file = CsvFilePath::new(&args.input_file)?;
    tracing::info!(input = %input_file, "reading cards");

    // 2. 全行の読み込み
    // 不正な行があればここで中断するため、出力ディレクトリには何も書かれない。
    let mut reader = input_file.open_reader()?;
    let conversion = CardConverter::read_from(&mut reader)?;

    // 3. 種別ごとの件数を表示
    print_tally(&conversion);

    // 4. 出力ディレクトリを準備して書き出し
    let output_dir = OutputDirectory::prepare(&args.output_dir)?;
    let written = conversion.write_to(&output_dir)?;
    for path in &written {
        println!("  -> 出力: {}", path.display());
    }

    println!(
        "完了: {} 枚のカードから {} 個のJSONファイルを {} に生成しました。",
        conversion.grouping().card_count(),
        written.len(),
        output_dir
    );
    Ok(())
}

// --- private なヘルパー関数 ---

fn print_tally(conversion: &Conversion) {
    for unknown in conversion.unrecognized() {
        println!(
            "Line doesn't have a card type: {} (line {})",
            unknown.type_name, unknown.line
        );
    }
    for (card_type, count) in conversion.tally().iter() {
        println!("Number of {}: {}", card_type.plural_label(), count);
    }
}
