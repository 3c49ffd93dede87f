use super::path_error::PathError;
use std::fmt;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 処理対象とみなすファイル名の接尾辞（大文字小文字を区別する）。
pub const PNG_SUFFIX: &str = ".png";

// 構造体としてDirectoryPathを定義
#[derive(Debug)]
pub struct DirectoryPath {
    pub path: PathBuf,
}

impl DirectoryPath {
    // コンストラクタ: パスを受け取り、バリデーションを行う
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, PathError> {
        let path = path.as_ref();

        // パスが存在し、かつディレクトリであることを検証
        if !path.exists() {
            return Err(PathError::InvalidPath(format!(
                "パス '{}' は存在しません。",
                path.display()
            )));
        }
        if !path.is_dir() {
            return Err(PathError::InvalidPath(format!(
                "パス '{}' はディレクトリではありません。",
                path.display()
            )));
        }

        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    // 内部のPathBufへの参照を返す
    pub fn as_path(&self) -> &Path {
        &self.path
    }

    /// ディレクトリ直下にある `.png` で終わるエントリのパスを返します。
    ///
    /// サブディレクトリは再帰的に探索しません。
    /// 出力順を安定させるため、ファイル名順にソートして返します。
    pub fn png_files(&self) -> Result<Vec<PathBuf>, PathError> {
        let mut png_paths = Vec::new();
        for entry in WalkDir::new(&self.path)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(PathError::WalkError)?;
            if is_png_name(&entry.file_name().to_string_lossy()) {
                png_paths.push(entry.into_path());
            }
        }
        Ok(png_paths)
    }
}

/// ファイル名がリテラルの `.png` で終わるかを判定します。
///
/// 拡張子の大文字小文字は区別し、中身の検証も行いません。
pub fn is_png_name(file_name: &str) -> bool {
    file_name.ends_with(PNG_SUFFIX)
}

// Displayトレイトの実装（表示用）
impl fmt::Display for DirectoryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
