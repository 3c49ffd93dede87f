use clap::Parser;
use round_icons::domain::icon_image::DEFAULT_RADIUS_PERCENT;
use std::path::PathBuf;

/// 既定のアイコンディレクトリ（実行時のカレントディレクトリからの相対パス）。
pub const DEFAULT_ICON_DIR: &str = "../public/icons";

/// ディレクトリ内のPNGアイコンに角丸を付けて上書き保存するツール
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// 角丸を付けるPNGファイルが置かれたディレクトリ
    #[arg(short = 'd', long, default_value = DEFAULT_ICON_DIR)]
    pub icon_dir: PathBuf,

    /// 角丸の半径 (短辺に対する%)
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_RADIUS_PERCENT,
        value_parser = clap::value_parser!(u32).range(0..=50)
    )]
    pub radius_percent: u32,
}
