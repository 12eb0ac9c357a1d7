// --- 依存モジュール ---

use super::card::Card;
use super::card_grouping::group_file_name;
use super::paths::output_directory::OutputDirectory;

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// JSONの生成やファイル保存時に発生する可能性のあるエラー。
#[derive(Debug, Error)]
pub enum JsonFileError {
    /// カード列をJSON文字列に変換できなかった場合。
    #[error("{file_name} のJSON生成に失敗しました: {source}")]
    Render {
        file_name: String,
        #[source]
        source: serde_json::Error,
    },
    /// 生成したJSONをディスクに書き込めなかった場合。
    #[error("{} への書き込みに失敗しました: {}", .path.display(), .source)]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// セット名や種別名がファイル名の一部として使えない場合。
    #[error("'{name}' はファイル名に使えません (区切り文字や '.', '..' は不可)")]
    UnsafeName { name: String },
}

/// メモリ上に生成された1グループ分のJSONファイル。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFile {
    /// 出力ファイル名 (`<set>-<type>.json`)。
    pub file_name: String,
    /// インデント付きのJSON配列。
    pub json_data: String,
}

impl JsonFile {
    /// (セット, 種別) のカード列から、インデント付きJSON配列を生成します。
    ///
    /// # 戻り値
    /// - `Ok(Self)`: 生成に成功した場合。
    /// - `Err(JsonFileError::UnsafeName)`: セット名か種別名が出力先の外を指しうる場合。
    /// - `Err(JsonFileError::Render)`: シリアライズに失敗した場合。
    pub fn create_file(set: &str, card_type: &str, cards: &[Card]) -> Result<Self, JsonFileError> {
        check_name(set)?;
        check_name(card_type)?;
        let file_name = group_file_name(set, card_type);
        let json_data =
            serde_json::to_string_pretty(cards).map_err(|source| JsonFileError::Render {
                file_name: file_name.clone(),
                source,
            })?;
        Ok(Self {
            file_name,
            json_data,
        })
    }

    /// 指定したパスへ保存します。既存のファイルは上書きされます。
    pub fn save_to_path(&self, path: &Path) -> Result<(), JsonFileError> {
        fs::write(path, &self.json_data).map_err(|source| JsonFileError::Save {
            path: path.to_path_buf(),
            source,
        })
    }

    /// 出力ディレクトリに `file_name` で保存し、保存先のパスを返します。
    pub fn save_in(&self, dir: &OutputDirectory) -> Result<PathBuf, JsonFileError> {
        let path = dir.join(&self.file_name);
        self.save_to_path(&path)?;
        Ok(path)
    }
}

/// パス区切り文字を含む名前や `.`, `..` を拒否する。
fn check_name(name: &str) -> Result<(), JsonFileError> {
    if name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(JsonFileError::UnsafeName {
            name: name.to_string(),
        });
    }
    Ok(())
}
