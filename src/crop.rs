// Safe-zone crop: trims the adaptive-icon padding so the artwork fills an iOS/macOS tile.
use crate::types::CropRect;
use image::{RgbaImage, imageops};

/// Rectangle left after trimming `floor(size * ratio)` pixels from every edge of a `size`-sided square.
pub fn safe_zone(size: u32, ratio: f64) -> CropRect {
    let crop_px = (size as f64 * ratio).floor() as u32;
    let side = size.saturating_sub(2 * crop_px);
    CropRect { x: crop_px, y: crop_px, width: side, height: side }
}

/// Crop the composite to its safe zone. The side length is taken from the width.
/// Always square: parts of the rectangle past the composite's edges stay transparent.
pub fn crop_safe_zone(composite: &RgbaImage, ratio: f64) -> RgbaImage {
    if composite.width() != composite.height() {
        log::warn!(
            "composite is {}x{}, not square; cropping by width, padding with transparency",
            composite.width(),
            composite.height()
        );
    }
    let rect = safe_zone(composite.width(), ratio);
    log::debug!("safe zone {rect:?}");

    let mut out = RgbaImage::new(rect.width, rect.height); // starts fully transparent
    imageops::replace(&mut out, composite, -(rect.x as i64), -(rect.y as i64));
    out
}
