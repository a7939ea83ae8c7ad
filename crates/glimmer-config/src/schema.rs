//! Configuration schema types for Glimmer.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with defaults matching the reference display
//! (a 240x320 portrait screen upscaled 2x on a black backdrop).

mod display;
mod effects;
mod logging;

pub use display::*;
pub use effects::*;
pub use logging::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Glimmer.
///
/// All options have sensible defaults matching current behavior.
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct GlimmerConfig {
    pub display: DisplayConfig,
    pub effects: EffectsSchemaConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_correct_display() {
        let config = GlimmerConfig::default();
        assert_eq!(config.display.width, 240);
        assert_eq!(config.display.height, 320);
        assert!((config.display.scale - 2.0).abs() < f32::EPSILON);
        assert_eq!(config.display.background, "#000000");
    }

    #[test]
    fn default_config_has_correct_effects() {
        let config = GlimmerConfig::default();
        assert!(config.effects.enabled);
        assert!(config.effects.glow.enabled);
    }

    #[test]
    fn default_config_has_correct_logging() {
        let config = GlimmerConfig::default();
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn partial_toml_deserializes_with_defaults() {
        let toml_str = r##"
[display]
scale = 3.0
background = "#101018"
"##;
        let config: GlimmerConfig = toml::from_str(toml_str).unwrap();
        // Overridden values
        assert!((config.display.scale - 3.0).abs() < f32::EPSILON);
        assert_eq!(config.display.background, "#101018");
        // Defaults preserved
        assert_eq!(config.display.width, 240);
        assert_eq!(config.display.height, 320);
        assert!(config.effects.glow.enabled);
    }

    #[test]
    fn empty_toml_gives_all_defaults() {
        let config: GlimmerConfig = toml::from_str("").unwrap();
        let default = GlimmerConfig::default();
        assert_eq!(config.display.width, default.display.width);
        assert_eq!(config.display.background, default.display.background);
        assert_eq!(config.effects.enabled, default.effects.enabled);
        assert_eq!(config.logging.level, default.logging.level);
    }

    #[test]
    fn config_serialization_roundtrip() {
        let config = GlimmerConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GlimmerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.display.width, config.display.width);
        assert_eq!(deserialized.display.background, config.display.background);
        assert_eq!(deserialized.logging.level, config.logging.level);
    }

    #[test]
    fn toml_serialization_roundtrip() {
        let config = GlimmerConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let deserialized: GlimmerConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(deserialized.display.height, config.display.height);
        assert_eq!(deserialized.effects.glow.enabled, config.effects.glow.enabled);
    }

    #[test]
    fn effects_master_toggle_in_toml() {
        let toml_str = r#"
[effects]
enabled = false
"#;
        let config: GlimmerConfig = toml::from_str(toml_str).unwrap();
        assert!(!config.effects.enabled);
        // Sub-configs still have their defaults
        assert!(config.effects.glow.enabled);
    }
}
