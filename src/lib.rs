mod constants;
mod types;
mod error;
mod config;
mod image_utils;
mod generator;

use anyhow::Context;
use log::LevelFilter;

pub use config::{Execution, GeneratorConfig};
pub use constants::{ICONS_DIR, ICON_TARGETS, SOURCE_ICON_NAME};
pub use error::{IconError, Result};
pub use generator::{generate_icons, IconGenerator};
pub use types::{GeneratedIcon, IconTarget};

// ログ初期化（既定は warn、RUST_LOG で上書き可能）
fn init_logger() {
    let _ = env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .try_init();
}

fn try_run() -> anyhow::Result<()> {
    generate_icons().context("icon generation failed")?;
    Ok(())
}

pub fn run() {
    init_logger();

    if let Err(e) = try_run() {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}
