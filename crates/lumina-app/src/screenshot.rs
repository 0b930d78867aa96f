use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use lumina_core::{Frame, Mode};

/// File name for a screenshot of `mode` taken now.
pub fn screenshot_path(mode: Mode) -> PathBuf {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    PathBuf::from(format!(
        "lumina-{}-{}-{secs}.png",
        mode.family().name(),
        mode.name()
    ))
}

pub fn save_png(frame: &Frame, path: &Path) -> anyhow::Result<()> {
    let image = image::RgbaImage::from_raw(frame.width, frame.height, frame.pixels.clone())
        .context("frame buffer does not match its dimensions")?;
    image
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("writing {}", path.display()))?;
    log::info!("screenshot written to {}", path.display());
    Ok(())
}
