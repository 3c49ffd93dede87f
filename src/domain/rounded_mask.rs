// use宣言：必要なクレートやモジュールをスコープに取り込む

use image::{GrayImage, Luma}; // 1チャンネル(8bit)のマスク画像として利用

/// マスクの内側（不透明）を表す値。
pub const MASK_INSIDE: u8 = 255;
/// マスクの外側（透明）を表す値。
pub const MASK_OUTSIDE: u8 = 0;

// --- 構造体定義 ---

/// 角丸の半径（ピクセル単位）。
///
/// 画像サイズと半径のパーセンテージから `new` で算出します。
/// 半径は `floor(min(幅, 高さ) × パーセント / 100)` です。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CornerRadius(u32);

impl CornerRadius {
    /// 画像サイズとパーセンテージから半径を計算します。
    ///
    /// # 引数
    /// * `width`, `height`: 画像の寸法。
    /// * `radius_percent`: 短辺に対する半径の割合（%）。
    pub fn new(width: u32, height: u32, radius_percent: u32) -> Self {
        // u32 同士の掛け算は溢れる可能性があるため u64 で計算する
        let shorter = u64::from(width.min(height));
        let radius = shorter * u64::from(radius_percent) / 100;
        // 短辺を超える半径は意味がないので丸める
        Self(radius.min(shorter) as u32)
    }

    /// 半径をピクセル数で返します。
    pub fn pixels(&self) -> u32 {
        self.0
    }
}

/// 画像と同じ寸法を持つ、角丸矩形の形をしたアルファマスク。
///
/// 角丸矩形の内側は `MASK_INSIDE`、外側は `MASK_OUTSIDE` になります。
/// 元の描画処理と同じく、境界はアンチエイリアスしない二値のマスクです。
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedMask {
    mask: GrayImage,
    radius: CornerRadius,
}

impl RoundedMask {
    /// 画像全体を覆う角丸矩形のマスクを生成します。
    ///
    /// ゼロ初期化したマスクを用意し、角丸矩形の内側を塗りつぶします。
    pub fn new(width: u32, height: u32, radius: CornerRadius) -> Self {
        let mut mask = GrayImage::new(width, height);
        for (x, y, pixel) in mask.enumerate_pixels_mut() {
            if Self::is_inside(x, y, width, height, radius.pixels()) {
                *pixel = Luma([MASK_INSIDE]);
            }
        }
        Self { mask, radius }
    }

    /// ピクセル `(x, y)` が角丸矩形の内側にあるかを判定します。
    ///
    /// 四隅を左上の角に折り返して考えると、角の領域 (`x' < r` かつ `y' < r`) では
    /// 中心 `(r, r)` の四分円の内側だけが塗られます。
    fn is_inside(x: u32, y: u32, width: u32, height: u32, radius: u32) -> bool {
        let mx = x.min(width - 1 - x);
        let my = y.min(height - 1 - y);
        if mx >= radius || my >= radius {
            return true;
        }
        let dx = u64::from(radius - mx);
        let dy = u64::from(radius - my);
        let r = u64::from(radius);
        dx * dx + dy * dy <= r * r
    }

    /// 指定位置のマスク値を返します。
    pub fn value_at(&self, x: u32, y: u32) -> u8 {
        self.mask.get_pixel(x, y)[0]
    }

    /// (幅, 高さ) をまとめて取得。
    pub fn dimensions(&self) -> (u32, u32) {
        self.mask.dimensions()
    }

    pub fn radius(&self) -> CornerRadius {
        self.radius
    }

    pub fn as_gray_image(&self) -> &GrayImage {
        &self.mask
    }
}

// --- テストモジュール ---

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_is_percentage_of_shorter_side() {
        assert_eq!(CornerRadius::new(100, 100, 8).pixels(), 8);
        assert_eq!(CornerRadius::new(512, 256, 8).pixels(), 20); // 256 * 8 / 100 = 20.48
        assert_eq!(CornerRadius::new(10, 10, 8).pixels(), 0); // 切り捨て
    }

    #[test]
    fn radius_does_not_overflow_for_huge_dimensions() {
        let radius = CornerRadius::new(u32::MAX, u32::MAX, 50);
        assert_eq!(radius.pixels(), u32::MAX / 2);
    }

    #[test]
    fn mask_has_same_dimensions_as_image() {
        let mask = RoundedMask::new(64, 32, CornerRadius::new(64, 32, 8));
        assert_eq!(mask.dimensions(), (64, 32));
    }

    /// 半径が正のとき、四隅のピクセルは必ず透明になることをテストします。
    #[test]
    fn corners_are_transparent_when_radius_is_positive() {
        for radius in [1, 2, 8, 25] {
            let mask = RoundedMask::new(50, 40, CornerRadius(radius));
            for (x, y) in [(0, 0), (49, 0), (0, 39), (49, 39)] {
                assert_eq!(
                    mask.value_at(x, y),
                    MASK_OUTSIDE,
                    "半径 {} で ({}, {}) が透明になっていません",
                    radius,
                    x,
                    y
                );
            }
        }
    }

    #[test]
    fn center_and_edge_midpoints_are_opaque() {
        let mask = RoundedMask::new(100, 100, CornerRadius::new(100, 100, 8));
        assert_eq!(mask.value_at(50, 50), MASK_INSIDE);
        assert_eq!(mask.value_at(50, 0), MASK_INSIDE);
        assert_eq!(mask.value_at(0, 50), MASK_INSIDE);
        assert_eq!(mask.value_at(99, 50), MASK_INSIDE);
        assert_eq!(mask.value_at(50, 99), MASK_INSIDE);
    }

    #[test]
    fn zero_radius_gives_fully_opaque_mask() {
        let mask = RoundedMask::new(10, 10, CornerRadius::new(10, 10, 8));
        assert_eq!(mask.radius().pixels(), 0);
        assert!(mask.as_gray_image().pixels().all(|p| p[0] == MASK_INSIDE));
    }

    /// 4つの角が対称に切り取られることをテストします。
    #[test]
    fn mask_is_symmetric() {
        let (w, h) = (37, 23);
        let mask = RoundedMask::new(w, h, CornerRadius(6));
        for y in 0..h {
            for x in 0..w {
                let v = mask.value_at(x, y);
                assert_eq!(v, mask.value_at(w - 1 - x, y));
                assert_eq!(v, mask.value_at(x, h - 1 - y));
            }
        }
    }

    #[test]
    fn mask_is_binary() {
        let mask = RoundedMask::new(40, 40, CornerRadius(12));
        assert!(mask
            .as_gray_image()
            .pixels()
            .all(|p| p[0] == MASK_INSIDE || p[0] == MASK_OUTSIDE));
    }
}
