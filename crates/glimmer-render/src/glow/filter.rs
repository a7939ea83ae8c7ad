//! CPU implementation of the glow filter.
//!
//! `shade` is the per-fragment entry point — pure with respect to the
//! frame content, geometry, and background color, so fragments can be
//! computed in any order or in parallel.

use glimmer_common::Rgba;
use image::RgbaImage;
use rayon::prelude::*;

use crate::geometry::ScreenGeometry;
use crate::source::FrameSource;

use super::kernel::{is_excluded, offset_weight, BLUR_NORMALIZATION, KERNEL_RADIUS};
use super::types::GlowSettings;

/// Software glow filter over a borrowed frame source.
pub struct GlowFilter<'a, S: FrameSource> {
    source: &'a S,
    geometry: ScreenGeometry,
    background: Rgba,
    settings: GlowSettings,
}

impl<'a, S: FrameSource> GlowFilter<'a, S> {
    pub fn new(
        source: &'a S,
        geometry: ScreenGeometry,
        background: Rgba,
        settings: GlowSettings,
    ) -> Self {
        Self {
            source,
            geometry,
            background,
            settings,
        }
    }

    /// Color-lookup rule: the sampled screen color for in-screen
    /// coordinates, the backdrop color otherwise, always opaque.
    pub fn resolve(&self, tc: [f32; 2]) -> Rgba {
        if self.geometry.in_screen(tc) {
            let (x, y) = self.geometry.texel_index(tc);
            self.source.sample(x, y).opaque()
        } else {
            self.background.opaque()
        }
    }

    /// Shade one output fragment (position in output pixels, centers at
    /// half-integers).
    ///
    /// Sums the 21x21 neighborhood of squared, distance-weighted samples,
    /// normalizes, and adds the sharp center sample unweighted. Excluded
    /// palette colors contribute nothing to the blur term.
    pub fn shade(&self, frag_x: f32, frag_y: f32) -> Rgba {
        let tc = self.geometry.tex_coord(frag_x, frag_y);
        if !self.settings.enabled {
            return self.resolve(tc);
        }

        let texel = self.geometry.texel_size();
        let mut acc = Rgba::TRANSPARENT;
        for dy in -KERNEL_RADIUS..=KERNEL_RADIUS {
            for dx in -KERNEL_RADIUS..=KERNEL_RADIUS {
                let sample_tc = [
                    tc[0] + dx as f32 * texel[0],
                    tc[1] + dy as f32 * texel[1],
                ];
                let color = self.resolve(sample_tc);
                if !is_excluded(color) {
                    acc += color.squared() * offset_weight(dx, dy);
                }
            }
        }

        acc / BLUR_NORMALIZATION + self.resolve(tc)
    }

    /// Render the full output target, parallelized across rows.
    pub fn render(&self) -> RgbaImage {
        let (width, height) = self.geometry.output_size();
        let row_bytes = width as usize * 4;
        let mut pixels = vec![0u8; row_bytes * height as usize];

        pixels
            .par_chunks_exact_mut(row_bytes)
            .enumerate()
            .for_each(|(y, row)| {
                for x in 0..width {
                    let color = self.shade(x as f32 + 0.5, y as f32 + 0.5);
                    let offset = x as usize * 4;
                    row[offset..offset + 4].copy_from_slice(&color.to_bytes());
                }
            });

        RgbaImage::from_raw(width, height, pixels).expect("pixel buffer matches output dimensions")
    }
}

// =============================================================================
// Tests
// =============================================================================
