mod report;

use std::fs;
use image::RgbaImage;
use rayon::prelude::*;
use crate::config::{Execution, GeneratorConfig};
use crate::error::{IconError, Result};
use crate::image_utils::{load_rgba, resize_icon};
use crate::types::{GeneratedIcon, IconTarget};

use self::report::{report_done, save_and_report};

/// 固定の入出力でアイコンを生成
pub fn generate_icons() -> Result<Vec<GeneratedIcon>> {
    IconGenerator::new(GeneratorConfig::default()).generate_icons()
}

/// 1枚の元画像から複数サイズのアイコンを生成する
pub struct IconGenerator {
    config: GeneratorConfig,
}

impl IconGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// 出力ディレクトリを用意し、元画像を読み込んで全サイズを書き出す
    ///
    /// 元画像が無い場合は何も書き出さずに `IconError::SourceNotFound` を返す。
    /// 途中で失敗した場合、それまでに保存したファイルはそのまま残る。
    pub fn generate_icons(&self) -> Result<Vec<GeneratedIcon>> {
        let output_dir = self.config.output_dir();

        // 既に存在していてもエラーにしない
        fs::create_dir_all(&output_dir).map_err(|source| IconError::CreateDir {
            path: output_dir.clone(),
            source,
        })?;

        let source_path = self.config.source_path();
        if !source_path.exists() {
            return Err(IconError::SourceNotFound { path: source_path });
        }

        let source = load_rgba(&source_path)?;
        warn_on_unusual_source(&source, &self.config.targets);

        let targets = &self.config.targets;
        let mut generated = Vec::with_capacity(targets.len());

        match self.config.execution {
            Execution::Sequential => {
                for target in targets {
                    log::debug!("resampling to {}x{}", target.edge, target.edge);
                    let icon = resize_icon(&source, target.edge);
                    generated.push(save_and_report(&icon, target, &output_dir)?);
                }
            }
            Execution::Parallel => {
                // リサンプリングのみ並列、保存と出力は宣言順
                let icons: Vec<RgbaImage> = targets
                    .par_iter()
                    .map(|target| resize_icon(&source, target.edge))
                    .collect();

                for (target, icon) in targets.iter().zip(icons) {
                    generated.push(save_and_report(&icon, target, &output_dir)?);
                }
            }
        }

        report_done();
        Ok(generated)
    }
}

// 非正方形・ターゲットより小さい元画像はそのまま処理（拡大・変形される）
fn warn_on_unusual_source(source: &RgbaImage, targets: &[IconTarget]) {
    let (width, height) = source.dimensions();
    if width != height {
        log::warn!(
            "source icon is not square ({}x{}); outputs will be stretched",
            width, height
        );
    }
    let shortest = width.min(height);
    for target in targets.iter().filter(|t| t.edge > shortest) {
        log::warn!(
            "source icon ({}x{}) is smaller than {}; it will be upscaled",
            width, height, target.file_name
        );
    }
}
