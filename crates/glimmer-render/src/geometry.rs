//! Screen geometry — the mapping between output fragments and the source
//! screen's texture coordinates.
//!
//! The source screen (e.g. 240x320) is upscaled by `scale` and placed at
//! `origin` inside the output target; everything outside that area is
//! backdrop. Texture coordinates are normalized over the visible screen
//! area, so `[0,1)` per axis is on-screen.

use glimmer_config::schema::DisplayConfig;

/// Read-only per-frame geometry supplied by the host pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenGeometry {
    width: u32,
    height: u32,
    scale: f32,
    origin: [f32; 2],
    output: (u32, u32),
}

impl ScreenGeometry {
    /// Geometry with the screen at the output origin and an output target
    /// exactly covering the upscaled screen.
    pub fn new(width: u32, height: u32, scale: f32) -> Self {
        let output = (
            (width as f32 * scale).ceil() as u32,
            (height as f32 * scale).ceil() as u32,
        );
        Self {
            width,
            height,
            scale,
            origin: [0.0, 0.0],
            output,
        }
    }

    /// Geometry with the upscaled screen centered (letterboxed) in an
    /// output target of the given size.
    pub fn centered(width: u32, height: u32, scale: f32, out_width: u32, out_height: u32) -> Self {
        let screen = [width as f32 * scale, height as f32 * scale];
        let origin = [
            ((out_width as f32 - screen[0]) / 2.0).max(0.0),
            ((out_height as f32 - screen[1]) / 2.0).max(0.0),
        ];
        Self {
            width,
            height,
            scale,
            origin,
            output: (out_width, out_height),
        }
    }

    pub fn from_config(display: &DisplayConfig) -> Self {
        Self::new(display.width, display.height, display.scale)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Screen area origin within the output target, in output pixels.
    pub fn origin(&self) -> [f32; 2] {
        self.origin
    }

    /// Output target dimensions in pixels.
    pub fn output_size(&self) -> (u32, u32) {
        self.output
    }

    /// Size of the visible screen area in output pixels.
    pub fn screen_size_px(&self) -> [f32; 2] {
        [
            self.width as f32 * self.scale,
            self.height as f32 * self.scale,
        ]
    }

    /// Size of one source texel in normalized texture coordinates,
    /// derived from the scale factor and the screen size in output pixels.
    pub fn texel_size(&self) -> [f32; 2] {
        let screen = self.screen_size_px();
        [self.scale / screen[0], self.scale / screen[1]]
    }

    /// Map an output fragment position (pixel centers at half-integers)
    /// to normalized screen texture coordinates.
    pub fn tex_coord(&self, frag_x: f32, frag_y: f32) -> [f32; 2] {
        let screen = self.screen_size_px();
        [
            (frag_x - self.origin[0]) / screen[0],
            (frag_y - self.origin[1]) / screen[1],
        ]
    }

    /// Whether a texture coordinate lies within the visible screen region.
    ///
    /// Half-open on the upper edge so exactly-1.0 coordinates are outside.
    pub fn in_screen(&self, tc: [f32; 2]) -> bool {
        tc[0] >= 0.0 && tc[0] < 1.0 && tc[1] >= 0.0 && tc[1] < 1.0
    }

    /// The source texel addressed by an in-screen texture coordinate.
    pub fn texel_index(&self, tc: [f32; 2]) -> (u32, u32) {
        let x = ((tc[0] * self.width as f32).floor() as i64).clamp(0, self.width as i64 - 1);
        let y = ((tc[1] * self.height as f32).floor() as i64).clamp(0, self.height as i64 - 1);
        (x as u32, y as u32)
    }
}

// =============================================================================
// Tests
// =============================================================================
