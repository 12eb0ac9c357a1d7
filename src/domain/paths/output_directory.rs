use super::path_error::PathError;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// JSONの出力先ディレクトリ。存在し、ディレクトリであることが保証される。
#[derive(Debug)]
pub struct OutputDirectory {
    pub path: PathBuf,
}

impl OutputDirectory {
    /// 出力先を準備する。存在しない場合は親ディレクトリごと作成する。
    pub fn prepare<P: AsRef<Path>>(path: P) -> Result<Self, PathError> {
        let path = path.as_ref();

        if path.exists() && !path.is_dir() {
            return Err(PathError::InvalidPath(format!(
                "パス '{}' はディレクトリではありません。",
                path.display()
            )));
        }
        if !path.exists() {
            fs::create_dir_all(path)?;
        }

        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// 出力先ディレクトリのパス。
    pub fn as_path(&self) -> &Path {
        &self.path
    }

    /// ディレクトリ内のファイルパスを組み立てる。
    pub fn join(&self, file_name: &str) -> PathBuf {
        self.path.join(file_name)
    }
}

impl fmt::Display for OutputDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
