//! Post-processing effects configuration types.
//!
//! The glow effect can be toggled individually or disabled entirely with
//! `enabled = false` on the master section.

use serde::{Deserialize, Serialize};

/// Glow (bloom) effect settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlowConfig {
    pub enabled: bool,
}

impl Default for GlowConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Master effects configuration.
///
/// Set `enabled = false` to disable all post-processing regardless of
/// individual settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsSchemaConfig {
    /// Master toggle — disables all effects when false.
    pub enabled: bool,
    pub glow: GlowConfig,
}

impl Default for EffectsSchemaConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            glow: GlowConfig::default(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effects_config_defaults() {
        let config = EffectsSchemaConfig::default();
        assert!(config.enabled);
        assert!(config.glow.enabled);
    }

    #[test]
    fn glow_config_partial_toml() {
        let toml_str = r#"
enabled = false
"#;
        let config: GlowConfig = toml::from_str(toml_str).unwrap();
        assert!(!config.enabled);
    }

    #[test]
    fn effects_master_toggle_in_toml() {
        let toml_str = r#"
enabled = false
"#;
        let config: EffectsSchemaConfig = toml::from_str(toml_str).unwrap();
        assert!(!config.enabled);
        // Sub-config still has its default
        assert!(config.glow.enabled);
    }

    #[test]
    fn effects_serialization_roundtrip() {
        let config = EffectsSchemaConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: EffectsSchemaConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.enabled, config.enabled);
        assert_eq!(deserialized.glow.enabled, config.glow.enabled);
    }
}
