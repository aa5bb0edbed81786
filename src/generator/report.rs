use std::path::Path;
use image::RgbaImage;
use crate::error::Result;
use crate::image_utils::save_png;
use crate::types::{GeneratedIcon, IconTarget};

// 保存して進捗を標準出力へ
pub(super) fn save_and_report(
    icon: &RgbaImage,
    target: &IconTarget,
    output_dir: &Path,
) -> Result<GeneratedIcon> {
    let path = target.output_path(output_dir);
    save_png(icon, &path)?;
    println!("Saved {}", path.display());

    Ok(GeneratedIcon {
        edge: target.edge,
        path,
    })
}

pub(super) fn report_done() {
    println!("Done generating icons");
}
