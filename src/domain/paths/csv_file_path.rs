use super::path_error::PathError;
use csv::{Reader, ReaderBuilder};
use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};

/// 入力CSVファイルへのパスを表現し、その妥当性を保証する構造体。
#[derive(Debug)]
pub struct CsvFilePath(PathBuf);

impl CsvFilePath {
    /// 新しい `CsvFilePath` インスタンスを生成する。
    ///
    /// パスが存在し、ファイルであることを検証する。拡張子は問わない。
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, PathError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(PathError::InvalidPath(format!(
                "パス '{}' は存在しません。",
                path.display()
            )));
        }
        if !path.is_file() {
            return Err(PathError::InvalidPath(format!(
                "パス '{}' はファイルではありません。",
                path.display()
            )));
        }
        Ok(Self(path.to_path_buf()))
    }

    /// 内部の `Path` への参照を返す。
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// カードCSV用に設定したリーダーを開く。
    ///
    /// ヘッダー行なし、カンマ区切り、行ごとに列数が異なってもよい。
    pub fn open_reader(&self) -> Result<Reader<File>, PathError> {
        let file = File::open(&self.0)?;
        Ok(card_csv_reader_builder().from_reader(file))
    }
}

/// カードCSVの読み取り設定。
pub fn card_csv_reader_builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder.has_headers(false).flexible(true).delimiter(b',');
    builder
}

// Displayトレイトの実装（表示用）
impl fmt::Display for CsvFilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
