use std::fmt;
// エラー型を定義
#[derive(Debug)]
pub enum PathError {
    InvalidPath(String),
    WalkError(walkdir::Error),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::InvalidPath(s) => write!(f, "無効なパスです: {}", s),
            PathError::WalkError(e) => write!(f, "ディレクトリの走査に失敗しました: {}", e),
        }
    }
}

impl std::error::Error for PathError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PathError::InvalidPath(_) => None,
            PathError::WalkError(e) => Some(e),
        }
    }
}
