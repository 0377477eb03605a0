//! Writing rendered frames to disk.

use anyhow::{Context, Result};
use image::RgbImage;
use lumen_renderer::ImageBuffer;
use std::path::{Path, PathBuf};

/// Save a frame as PNG. The format follows the file extension.
pub fn save_png(image: &ImageBuffer, path: &Path) -> Result<()> {
    let rgb = RgbImage::from_raw(image.width(), image.height(), image.to_rgb8())
        .context("Pixel buffer does not match the image size")?;

    rgb.save(path)
        .with_context(|| format!("Failed to save image to {}", path.display()))?;

    log::info!("Image saved as {}", path.display());
    Ok(())
}

/// Path for frame `frame` of `frames`: the base path itself for a single
/// frame, otherwise `name_0007.ext`.
pub fn frame_path(base: &Path, frame: u32, frames: u32) -> PathBuf {
    if frames <= 1 {
        return base.to_path_buf();
    }

    let stem = base
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "frame".to_string());
    let name = match base.extension() {
        Some(ext) => format!("{}_{:04}.{}", stem, frame, ext.to_string_lossy()),
        None => format!("{}_{:04}", stem, frame),
    };
    base.with_file_name(name)
}
