use crate::domain::input_source::path_error::PathError;
use thiserror::Error;

/// バッチ全体を中断させるエラー。
///
/// ファイル単位の失敗 (`IconError`) はここには含めず、報告したうえで処理を続けます。
#[derive(Debug, Error)]
pub enum AppError {
    #[error("アイコンディレクトリを読み込めません: {0}")]
    Path(#[from] PathError),
}
