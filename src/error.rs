use crate::domain::converter::ConvertError;
use crate::domain::paths::path_error::PathError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("パス関連のエラー: {0}")]
    Path(#[from] PathError),

    #[error("変換エラー: {0}")]
    Convert(#[from] ConvertError),
}
