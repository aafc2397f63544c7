// The output size policy: which PNGs land in the .appiconset and how big they are.
use crate::types::IconSize;

/// Single-size iOS marketing icon (Xcode 14+ derives the rest from it).
pub const APP_ICON: IconSize = IconSize { base: 1024, scale: 1, filename: "AppIcon.png" };

/// macOS iconset entries, @1x followed by @2x for every base size.
pub const MAC_SIZES: [IconSize; 10] = [
    IconSize { base: 16, scale: 1, filename: "icon_16x16.png" },
    IconSize { base: 16, scale: 2, filename: "icon_16x16@2x.png" },
    IconSize { base: 32, scale: 1, filename: "icon_32x32.png" },
    IconSize { base: 32, scale: 2, filename: "icon_32x32@2x.png" },
    IconSize { base: 128, scale: 1, filename: "icon_128x128.png" },
    IconSize { base: 128, scale: 2, filename: "icon_128x128@2x.png" },
    IconSize { base: 256, scale: 1, filename: "icon_256x256.png" },
    IconSize { base: 256, scale: 2, filename: "icon_256x256@2x.png" },
    IconSize { base: 512, scale: 1, filename: "icon_512x512.png" },
    IconSize { base: 512, scale: 2, filename: "icon_512x512@2x.png" },
];

/// Every icon in write order: AppIcon first, then the macOS set.
pub fn all() -> impl Iterator<Item = IconSize> {
    std::iter::once(APP_ICON).chain(MAC_SIZES)
}
