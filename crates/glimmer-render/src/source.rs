//! Frame sources — suppliers of the rendered screen content the glow
//! filter reads from.

use glimmer_common::Rgba;
use image::RgbaImage;

/// A readable frame of source screen pixels.
///
/// Implementations must be cheap to sample: the filter reads each source
/// pixel up to 441 times per neighboring output fragment. Coordinates are
/// in source pixels and always in range (bounds handling happens in the
/// filter's color-lookup rule, not here).
pub trait FrameSource: Sync {
    /// Source dimensions in pixels.
    fn dimensions(&self) -> (u32, u32);

    /// The color at an in-range source pixel.
    fn sample(&self, x: u32, y: u32) -> Rgba;
}

/// A frame backed by a decoded RGBA image.
pub struct ImageSource<'a> {
    image: &'a RgbaImage,
}

impl<'a> ImageSource<'a> {
    pub fn new(image: &'a RgbaImage) -> Self {
        Self { image }
    }
}

impl FrameSource for ImageSource<'_> {
    fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    fn sample(&self, x: u32, y: u32) -> Rgba {
        let p = self.image.get_pixel(x, y).0;
        Rgba::from_bytes(p[0], p[1], p[2], p[3])
    }
}

/// A frame of one uniform color, mainly for tests and benchmarks.
pub struct SolidSource {
    pub color: Rgba,
    pub width: u32,
    pub height: u32,
}

impl FrameSource for SolidSource {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn sample(&self, _x: u32, _y: u32) -> Rgba {
        self.color
    }
}
