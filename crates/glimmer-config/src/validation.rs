//! Full configuration validation.
//!
//! Validates numeric ranges and color formats, collecting every violation
//! into a single `ConfigError` so users see all problems at once.

use crate::schema::GlimmerConfig;
use glimmer_common::{Color, ConfigError};

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &GlimmerConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_display(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_display(errors: &mut Vec<String>, config: &GlimmerConfig) {
    let display = &config.display;
    validate_range(errors, "display.width", display.width, 1, 4096);
    validate_range(errors, "display.height", display.height, 1, 4096);
    validate_range_f32(errors, "display.scale", display.scale, 1.0, 16.0);
    validate_color(errors, "display.background", &display.background);
}

/// Push an error if `value` is outside `[min, max]` (integer).
fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is outside `[min, max]` (float).
fn validate_range_f32(errors: &mut Vec<String>, name: &str, value: f32, min: f32, max: f32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is not a parseable hex color.
fn validate_color(errors: &mut Vec<String>, name: &str, value: &str) {
    if Color::from_hex(value).is_none() {
        errors.push(format!("{name} = {value:?} is not a valid hex color"));
    }
}

// =============================================================================
// Tests
// =============================================================================
