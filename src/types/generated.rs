use std::path::PathBuf;

/// 書き出し済みアイコン
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    pub edge: u32,
    pub path: PathBuf,
}
