//! Display geometry configuration.

use serde::{Deserialize, Serialize};

/// Source screen geometry and backdrop settings.
///
/// `width`/`height` describe the game's logical screen in source pixels;
/// `scale` is the integer-ish upscale factor applied by the display
/// pipeline. The backdrop `background` color fills everything outside the
/// visible screen area and is what out-of-screen samples resolve to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Source screen width in pixels (valid range: 1-4096).
    pub width: u32,
    /// Source screen height in pixels (valid range: 1-4096).
    pub height: u32,
    /// Upscale factor from source pixels to output pixels (valid range: 1.0-16.0).
    pub scale: f32,
    /// Backdrop fill color as hex string.
    pub background: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 240,
            height: 320,
            scale: 2.0,
            background: "#000000".into(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
