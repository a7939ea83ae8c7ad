//! Glow pipeline types.

use glimmer_common::Rgba;

use crate::geometry::ScreenGeometry;

/// Per-frame uniforms for the glow shader.
///
/// Layout: 12 x f32 = 48 bytes, 16-byte aligned (wgpu requirement).
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GlowUniforms {
    /// Screen area origin within the output target, in output pixels.
    pub screen_origin: [f32; 2],
    /// Screen area size in output pixels.
    pub screen_size: [f32; 2],
    /// Backdrop fill color (rgb; w unused).
    pub background: [f32; 4],
    /// Upscale factor from source pixels to output pixels.
    pub scale: f32,
    /// Padding to reach 48 bytes (16-byte alignment).
    pub _padding: [f32; 3],
}

impl GlowUniforms {
    pub fn new(geometry: &ScreenGeometry, background: Rgba) -> Self {
        Self {
            screen_origin: geometry.origin(),
            screen_size: geometry.screen_size_px(),
            background: [background.r, background.g, background.b, 1.0],
            scale: geometry.scale(),
            _padding: [0.0; 3],
        }
    }
}

/// Glow configuration derived from app config at pipeline creation.
#[derive(Debug, Clone, Copy)]
pub struct GlowSettings {
    /// Whether the glow pass runs at all.
    pub enabled: bool,
}

impl Default for GlowSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl GlowSettings {
    /// Create glow settings from the application config.
    pub fn from_config(config: &glimmer_config::schema::GlimmerConfig) -> Self {
        Self {
            enabled: config.effects.enabled && config.effects.glow.enabled,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
