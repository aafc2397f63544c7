// Loading the two adaptive-icon layers and flattening them into one RGBA image.
// Result: the background with the foreground pasted at (0,0), masked by the
// foreground's own alpha.
use crate::error::Error;
use image::{Rgba, RgbaImage};
use std::path::Path;

/// Open any decodable image and coerce it to 8-bit RGBA.
pub fn load_rgba(path: &Path) -> Result<RgbaImage, Error> {
    let img = image::open(path).map_err(|source| Error::LoadLayer { path: path.to_path_buf(), source })?;
    log::debug!("loaded {} ({:?}, {}x{})", path.display(), img.color(), img.width(), img.height());
    Ok(img.to_rgba8())
}

/// Paste `foreground` over a copy of `background` using the foreground alpha as mask.
/// The result always has the background's dimensions; overhanging foreground pixels are dropped.
pub fn composite(background: &RgbaImage, foreground: &RgbaImage) -> RgbaImage {
    if foreground.dimensions() != background.dimensions() {
        log::warn!(
            "layer sizes differ: background {:?}, foreground {:?}; pasting at the origin anyway",
            background.dimensions(),
            foreground.dimensions()
        );
    }

    let mut out = background.clone();
    let w = background.width().min(foreground.width());
    let h = background.height().min(foreground.height());

    for y in 0..h {
        for x in 0..w {
            let fg = *foreground.get_pixel(x, y);
            let a = fg[3];
            if a == 0 { continue; }              // fully transparent: keep background
            let dst = out.get_pixel_mut(x, y);
            if a == 255 {                        // fully opaque: replace outright
                *dst = fg;
                continue;
            }
            *dst = paste_masked(*dst, fg, a);
        }
    }
    out
}

// Per-channel mix of all four channels (alpha included): out = fg*a + bg*(1-a).
#[inline]
fn paste_masked(bg: Rgba<u8>, fg: Rgba<u8>, mask: u8) -> Rgba<u8> {
    let a = mask as u32;
    let inv = 255 - a;
    let mix = |f: u8, b: u8| ((f as u32 * a + b as u32 * inv + 127) / 255) as u8;
    Rgba([mix(fg[0], bg[0]), mix(fg[1], bg[1]), mix(fg[2], bg[2]), mix(fg[3], bg[3])])
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    fn solid(size: u32, px: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(size, size, Rgba(px))
    }

    #[test]
    fn composite_keeps_background_dimensions() {
        let out = composite(&solid(432, [10, 20, 30, 255]), &solid(432, [0, 0, 0, 128]));
        assert_eq!(out.dimensions(), (432, 432));
    }

    #[test]
    fn transparent_foreground_leaves_background_untouched() {
        let mut bg = solid(16, [0, 0, 0, 255]);
        for (x, y, p) in bg.enumerate_pixels_mut() {
            *p = Rgba([x as u8 * 10, y as u8 * 10, 77, 255]);
        }
        let fg = solid(16, [255, 0, 0, 0]);
        assert_eq!(composite(&bg, &fg), bg);
    }

    #[test]
    fn opaque_foreground_replaces_background() {
        let bg = solid(16, [1, 2, 3, 255]);
        let mut fg = solid(16, [0, 0, 0, 255]);
        for (x, y, p) in fg.enumerate_pixels_mut() {
            *p = Rgba([200, x as u8, y as u8, 255]);
        }
        assert_eq!(composite(&bg, &fg), fg);
    }

    #[test]
    fn half_alpha_blends_every_channel() {
        let out = composite(&solid(1, [0, 0, 0, 255]), &solid(1, [255, 255, 255, 128]));
        // 255*128/255 rounded, alpha mixes 128 with 255
        assert_eq!(*out.get_pixel(0, 0), Rgba([128, 128, 128, 191]));
    }

    #[test]
    fn smaller_foreground_only_covers_its_own_area() {
        let out = composite(&solid(8, [0, 0, 255, 255]), &solid(4, [255, 0, 0, 255]));
        assert_eq!(out.dimensions(), (8, 8));
        assert_eq!(*out.get_pixel(3, 3), Rgba([255, 0, 0, 255]));
        assert_eq!(*out.get_pixel(4, 4), Rgba([0, 0, 255, 255]));
    }

    #[test]
    fn load_rgba_converts_grayscale_to_four_channels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gray.png");
        GrayImage::from_pixel(5, 5, Luma([90])).save(&path).unwrap();

        let img = load_rgba(&path).unwrap();
        assert_eq!(img.dimensions(), (5, 5));
        assert_eq!(*img.get_pixel(2, 2), Rgba([90, 90, 90, 255]));
    }

    #[test]
    fn load_rgba_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("ic_launcher_foreground.png");
        match load_rgba(&missing) {
            Err(Error::LoadLayer { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected LoadLayer, got {other:?}"),
        }
    }
}
