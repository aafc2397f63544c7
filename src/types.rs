// Core types shared by the crop and render steps.

/// One output icon: `base` points at `scale`x density, saved as `filename`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconSize {
    pub base: u32,              // logical size in points (16, 32, ... 1024)
    pub scale: u32,             // 1 for @1x, 2 for @2x
    pub filename: &'static str, // written into the output directory as-is
}

impl IconSize {
    /// Edge length of the square PNG in pixels.
    pub const fn pixels(&self) -> u32 {
        self.base * self.scale
    }
}

/// Square-ish region cut out of the composite (top-left corner + extent).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}
