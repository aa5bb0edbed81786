use std::path::Path;
use image::imageops::{self, FilterType};
use image::{ImageFormat, RgbaImage};
use crate::constants::{MAX_IMAGE_DIMENSION, MAX_PIXEL_COUNT};
use crate::error::{IconError, Result};

// 画像サイズ検証（DoS防止）
pub fn validate_dimensions(width: u32, height: u32) -> Result<()> {
    let invalid = |reason: String| IconError::InvalidDimensions { width, height, reason };

    if width == 0 || height == 0 {
        return Err(invalid("width or height is zero".to_string()));
    }
    if width > MAX_IMAGE_DIMENSION || height > MAX_IMAGE_DIMENSION {
        return Err(invalid(format!("edge exceeds {}", MAX_IMAGE_DIMENSION)));
    }
    let pixel_count = (width as u64) * (height as u64);
    if pixel_count > MAX_PIXEL_COUNT {
        return Err(invalid(format!(
            "{} pixels exceeds {}",
            pixel_count, MAX_PIXEL_COUNT
        )));
    }
    Ok(())
}

// 元画像を読み込み、RGBA8 に正規化
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path).map_err(|source| IconError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!(
        "decoded {}: {}x{} {:?}",
        path.display(),
        img.width(),
        img.height(),
        img.color()
    );

    validate_dimensions(img.width(), img.height())?;

    Ok(img.into_rgba8())
}

// 正方形アイコンへリサンプリング
// Lanczos3: 縮小時のシャープさを優先
pub fn resize_icon(source: &RgbaImage, edge: u32) -> RgbaImage {
    imageops::resize(source, edge, edge, FilterType::Lanczos3)
}

// PNG形式で保存（既存ファイルは上書き）
pub fn save_png(img: &RgbaImage, path: &Path) -> Result<()> {
    img.save_with_format(path, ImageFormat::Png)
        .map_err(|source| IconError::Save {
            path: path.to_path_buf(),
            source,
        })
}
