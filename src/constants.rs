// 入出力ディレクトリ（カレントディレクトリからの相対パス）
pub const ICONS_DIR: &str = "icons";

// 元画像のファイル名
pub const SOURCE_ICON_NAME: &str = "icon-512.png";

// 生成するアイコン（辺の長さ, 出力ファイル名）。この順番で処理する
pub const ICON_TARGETS: &[(u32, &str)] = &[
    (144, "icon-144.png"),
    (72, "icon-72.png"),
    (48, "icon-48.png"),
];

// 画像サイズ制限（DoS防止）
pub const MAX_IMAGE_DIMENSION: u32 = 65535;      // 最大辺長
pub const MAX_PIXEL_COUNT: u64 = 100_000_000;    // 最大ピクセル数（100メガピクセル）
