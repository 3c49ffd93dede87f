//! アプリケーションのメインワークフローを定義するモジュール。
//!
//! このモジュールは、UI層（`cli`）とドメイン層（`domain`）を仲介し、
//! アイコンディレクトリ内のPNGに角丸を付ける一連の処理フローを実装します。

use crate::cli::Args;
use round_icons::domain::icon_image::add_rounded_corners;
use round_icons::domain::input_source::directory_path::DirectoryPath;
use round_icons::error::AppError;
use std::path::Path;

/// バッチ処理の結果の集計。
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub found: usize,
    pub succeeded: usize,
    pub failed: usize,
}

// --- public な main 関数 ---

/// アプリケーションのメインロジックを実行します。
///
/// # 引数
/// * `args`: コマンドラインからパースされた引数 (`cli::Args`)。
///
/// # 戻り値
/// * `Ok(BatchSummary)`: バッチが最後まで走った場合。個々のファイルの失敗はここに集計される。
/// * `Err(AppError)`: アイコンディレクトリを読めず、処理を始められなかった場合。
pub fn run(args: &Args) -> Result<BatchSummary, AppError> {
    // 1. 入力ディレクトリの検証と、処理対象のPNGの列挙
    let icon_dir = DirectoryPath::new(&args.icon_dir)?;
    println!("処理を開始します: {}", icon_dir);
    let png_files = icon_dir.png_files()?;

    let mut summary = BatchSummary {
        found: png_files.len(),
        ..BatchSummary::default()
    };
    println!("{} 個のPNGアイコンに角丸を付けています...", summary.found);

    // 2. 1ファイルずつ処理する。失敗しても次のファイルへ進む。
    for path in &png_files {
        match add_rounded_corners(path, args.radius_percent) {
            Ok(()) => {
                summary.succeeded += 1;
                println!("✓ {} に角丸を付けました", display_name(path));
            }
            Err(e) => {
                summary.failed += 1;
                println!("✗ {} の処理中にエラーが発生しました: {}", path.display(), e);
            }
        }
    }

    // 3. 完了メッセージ
    println!(
        "\n完了しました！ (成功: {} / 失敗: {})",
        summary.succeeded, summary.failed
    );
    Ok(summary)
}

// --- private なヘルパー関数 ---

/// 表示用にファイル名部分だけを取り出す。
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
