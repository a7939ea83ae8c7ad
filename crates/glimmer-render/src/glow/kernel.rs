//! Glow kernel constants and weighting.

use glimmer_common::Rgba;

/// Neighborhood half-width in source texels (21x21 = 441 samples).
pub const KERNEL_RADIUS: i32 = 10;

/// Offsets within this distance contribute at full strength; beyond it the
/// weight falls off as `FALLOFF_RADIUS / distance`.
pub const FALLOFF_RADIUS: f32 = 2.0;

/// Empirical divisor applied to the accumulated blur term. Hand-tuned for
/// visual parity, not derived from the sample count.
pub const BLUR_NORMALIZATION: f32 = 90.0;

/// Surface tones that never emit glow: bright white, skin, pale sky-blue.
pub const EXCLUDED_PALETTE: [Rgba; 3] = [
    Rgba::new(238.0 / 255.0, 238.0 / 255.0, 238.0 / 255.0, 1.0),
    Rgba::new(237.0 / 255.0, 199.0 / 255.0, 176.0 / 255.0, 1.0),
    Rgba::new(169.0 / 255.0, 193.0 / 255.0, 255.0 / 255.0, 1.0),
];

/// Contribution weight for a kernel offset, from the Euclidean length of
/// the unscaled integer offset.
pub fn offset_weight(dx: i32, dy: i32) -> f32 {
    let distance = ((dx * dx + dy * dy) as f32).sqrt();
    FALLOFF_RADIUS / FALLOFF_RADIUS.max(distance)
}

/// Whether a sample color is one of the non-emissive palette entries.
///
/// Comparison is exact: sampled 8-bit channels convert to the same f32
/// values as the palette constants, so no tolerance is needed.
pub fn is_excluded(color: Rgba) -> bool {
    EXCLUDED_PALETTE.contains(&color)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_is_full_within_falloff_radius() {
        assert!((offset_weight(0, 0) - 1.0).abs() < f32::EPSILON);
        assert!((offset_weight(1, 0) - 1.0).abs() < f32::EPSILON);
        assert!((offset_weight(1, 1) - 1.0).abs() < f32::EPSILON);
        assert!((offset_weight(2, 0) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn weight_attenuates_beyond_falloff_radius() {
        let w = offset_weight(3, 0);
        assert!((w - 2.0 / 3.0).abs() < 1e-6);
        let w = offset_weight(0, 10);
        assert!((w - 0.2).abs() < 1e-6);
    }

    #[test]
    fn weight_is_monotonically_nonincreasing_with_distance() {
        let mut weights: Vec<(f32, f32)> = Vec::new();
        for dy in -KERNEL_RADIUS..=KERNEL_RADIUS {
            for dx in -KERNEL_RADIUS..=KERNEL_RADIUS {
                let d = ((dx * dx + dy * dy) as f32).sqrt();
                weights.push((d, offset_weight(dx, dy)));
            }
        }
        weights.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());
        for pair in weights.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
    }

    #[test]
    fn weight_is_symmetric_under_rotation() {
        for dy in 0..=KERNEL_RADIUS {
            for dx in 0..=KERNEL_RADIUS {
                let w = offset_weight(dx, dy);
                assert_eq!(w, offset_weight(-dx, -dy));
                assert_eq!(w, offset_weight(dy, -dx));
            }
        }
    }

    #[test]
    fn palette_colors_are_excluded() {
        for color in EXCLUDED_PALETTE {
            assert!(is_excluded(color));
        }
        assert!(is_excluded(Rgba::from_bytes(238, 238, 238, 255)));
        assert!(is_excluded(Rgba::from_bytes(237, 199, 176, 255)));
        assert!(is_excluded(Rgba::from_bytes(169, 193, 255, 255)));
    }

    #[test]
    fn near_palette_colors_are_not_excluded() {
        assert!(!is_excluded(Rgba::from_bytes(238, 238, 237, 255)));
        assert!(!is_excluded(Rgba::from_bytes(0, 0, 0, 255)));
        // Exclusion requires alpha 1.0 — the lookup rule forces it
        assert!(!is_excluded(Rgba::new(
            238.0 / 255.0,
            238.0 / 255.0,
            238.0 / 255.0,
            0.5
        )));
    }
}
