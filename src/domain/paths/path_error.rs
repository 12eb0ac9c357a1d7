use thiserror::Error;

// エラー型を定義
#[derive(Debug, Error)]
pub enum PathError {
    #[error("無効なパスです: {0}")]
    InvalidPath(String),

    #[error("I/Oエラー: {0}")]
    Io(#[from] std::io::Error),
}
