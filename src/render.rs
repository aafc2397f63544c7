// Resizing the cropped artwork and writing the .appiconset PNGs.
// What you get on disk: AppIcon.png plus the ten macOS icon_*.png files.
use crate::config::Config;
use crate::crop::crop_safe_zone;
use crate::error::Error;
use crate::layers::{composite, load_rgba};
use crate::sizes;
use crate::types::IconSize;
use image::{ImageFormat, RgbaImage, imageops::{self, FilterType}};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// High-quality square resample (Lanczos3, deterministic).
pub fn resize(src: &RgbaImage, px: u32) -> RgbaImage {
    imageops::resize(src, px, px, FilterType::Lanczos3)
}

/// Resize `cropped` for one table entry and save it as PNG in `dir`, overwriting.
pub fn write_icon(cropped: &RgbaImage, size: &IconSize, dir: &Path) -> Result<PathBuf, Error> {
    let px = size.pixels();
    let started = Instant::now();
    let icon = resize(cropped, px);
    let path = dir.join(size.filename);
    icon.save_with_format(&path, ImageFormat::Png)
        .map_err(|source| Error::SaveIcon { path: path.clone(), source })?;
    log::debug!("{} written in {:?}", path.display(), started.elapsed());
    println!("Generated: {} ({px}x{px})", size.filename);
    Ok(path)
}

/// Full run: load layers, composite, crop, then write every icon in table order.
pub fn generate(config: &Config) -> Result<Vec<PathBuf>, Error> {
    config.validate()?;
    if !config.output_dir.is_dir() {
        return Err(Error::OutputDir(config.output_dir.clone()));
    }

    let fg = load_rgba(&config.foreground_path)?;
    let bg = load_rgba(&config.background_path)?;
    println!(
        "Foreground: {}x{}, Background: {}x{}",
        fg.width(), fg.height(), bg.width(), bg.height()
    );

    let flat = composite(&bg, &fg);
    let cropped = crop_safe_zone(&flat, config.crop_ratio);
    println!("Cropped to: {}x{}", cropped.width(), cropped.height());

    let mut written = Vec::new();
    for size in sizes::all() {
        written.push(write_icon(&cropped, &size, &config.output_dir)?);
    }

    log::info!("{} icons written to {}", written.len(), config.output_dir.display());
    println!("\nAll icons generated!");
    Ok(written)
}
