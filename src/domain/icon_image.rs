//! アイコン画像の読み込み・角丸加工・上書き保存を行うモジュール。

use super::rounded_mask::{CornerRadius, RoundedMask};
use image::{ImageFormat, Rgba, RgbaImage};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 半径のパーセンテージの既定値（短辺の 8%）。
pub const DEFAULT_RADIUS_PERCENT: u32 = 8;

/// 1ファイルの処理中に発生するエラー。
///
/// どの種類のエラーでも、呼び出し元はファイル名とメッセージを表示して次のファイルへ進みます。
#[derive(Debug, Error)]
pub enum IconError {
    #[error("{}: 画像を開けませんでした: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("{}: 画像を保存できませんでした: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// RGBA に変換済みのアイコン画像と、その読み込み元のパス。
#[derive(Debug)]
pub struct IconImage {
    path: PathBuf,
    pixels: RgbaImage,
}

impl IconImage {
    /// 画像ファイルを開き、4チャンネル (RGBA8) に変換します。
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, IconError> {
        let path = path.as_ref();
        let pixels = image::open(path)
            .map_err(|source| IconError::Open {
                path: path.to_path_buf(),
                source,
            })?
            .to_rgba8();

        Ok(Self {
            path: path.to_path_buf(),
            pixels,
        })
    }

    /// 画像全体に角丸のアルファマスクを適用した新しい画像を返します。
    ///
    /// 透明なキャンバスに元のピクセルを写し、アルファチャンネルをマスクの値で
    /// 置き換えます（掛け合わせではありません）。
    pub fn with_rounded_corners(&self, radius_percent: u32) -> RgbaImage {
        let (width, height) = self.pixels.dimensions();
        let radius = CornerRadius::new(width, height, radius_percent);
        let mask = RoundedMask::new(width, height, radius);

        let mut output = RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0]));
        image::imageops::replace(&mut output, &self.pixels, 0, 0);

        for (x, y, pixel) in output.enumerate_pixels_mut() {
            pixel[3] = mask.value_at(x, y);
        }
        output
    }

    /// 角丸を適用し、読み込み元のファイルを上書きします。
    ///
    /// 元のファイルのバックアップは作成しません。
    pub fn round_corners_in_place(&self, radius_percent: u32) -> Result<(), IconError> {
        let output = self.with_rounded_corners(radius_percent);
        output
            .save_with_format(&self.path, ImageFormat::Png)
            .map_err(|source| IconError::Save {
                path: self.path.clone(),
                source,
            })
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }
}

/// 指定されたパスの画像に角丸を付けて上書き保存します。
///
/// # 引数
/// * `path`: 対象の画像ファイル。
/// * `radius_percent`: 短辺に対する角丸の半径（%）。
pub fn add_rounded_corners<P: AsRef<Path>>(
    path: P,
    radius_percent: u32,
) -> Result<(), IconError> {
    IconImage::open(path)?.round_corners_in_place(radius_percent)
}

// --- テストモジュール ---
