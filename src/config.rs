use std::path::PathBuf;
use crate::constants::{ICONS_DIR, ICON_TARGETS, SOURCE_ICON_NAME};
use crate::types::IconTarget;

/// リサンプリングの実行方法
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Execution {
    /// 宣言順に1件ずつ処理
    #[default]
    Sequential,
    /// rayon で全サイズを並列にリサンプリング（保存と出力は宣言順）
    Parallel,
}

/// アイコン生成の設定
///
/// `Default` は固定の入出力（`icons/icon-512.png` → `icons/icon-{144,72,48}.png`）を
/// カレントディレクトリ基準で再現する。
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// 基準ディレクトリ
    pub root: PathBuf,
    /// 入出力ディレクトリ名（root からの相対）
    pub icons_dir: String,
    /// 元画像ファイル名
    pub source_name: String,
    /// 生成対象（この順番で処理）
    pub targets: Vec<IconTarget>,
    pub execution: Execution,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::new(),
            icons_dir: ICONS_DIR.to_string(),
            source_name: SOURCE_ICON_NAME.to_string(),
            targets: ICON_TARGETS.iter().map(IconTarget::from).collect(),
            execution: Execution::default(),
        }
    }
}

impl GeneratorConfig {
    /// 固定の入出力を指定ディレクトリ基準で使う
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn execution(mut self, execution: Execution) -> Self {
        self.execution = execution;
        self
    }

    pub fn output_dir(&self) -> PathBuf {
        self.root.join(&self.icons_dir)
    }

    pub fn source_path(&self) -> PathBuf {
        self.output_dir().join(&self.source_name)
    }

    pub fn target_paths(&self) -> Vec<PathBuf> {
        let output_dir = self.output_dir();
        self.targets
            .iter()
            .map(|target| target.output_path(&output_dir))
            .collect()
    }
}
