use std::path::{Path, PathBuf};

/// 生成対象のアイコン（辺の長さと出力ファイル名）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconTarget {
    /// 辺の長さ (px)
    pub edge: u32,
    /// 出力ファイル名
    pub file_name: String,
}

impl IconTarget {
    pub fn new(edge: u32, file_name: impl Into<String>) -> Self {
        Self {
            edge,
            file_name: file_name.into(),
        }
    }

    // 出力ディレクトリ内の保存先パス
    pub fn output_path(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(&self.file_name)
    }
}

impl From<&(u32, &str)> for IconTarget {
    fn from(&(edge, file_name): &(u32, &str)) -> Self {
        Self::new(edge, file_name)
    }
}
