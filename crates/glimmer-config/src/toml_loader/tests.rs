//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_parse_error() {
    let result = load_from_path(Path::new("/tmp/nonexistent_glimmer_config.toml"));
    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(matches!(err, glimmer_common::ConfigError::ParseError(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[display]
width = 160
height = 144
background = "#0f380f"
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.display.width, 160);
    assert_eq!(config.display.height, 144);
    assert_eq!(config.display.background, "#0f380f");
    // Defaults preserved
    assert!((config.display.scale - 2.0).abs() < f32::EPSILON);
    assert!(config.effects.glow.enabled);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(matches!(err, glimmer_common::ConfigError::ParseError(_)));
}

#[test]
fn load_config_with_invalid_values_returns_parsed_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[display]
scale = 100.0
"#,
    )
    .unwrap();

    // Validation only warns here — the parsed config is returned as-is
    let config = load_from_path(&path).unwrap();
    assert!((config.display.scale - 100.0).abs() < f32::EPSILON);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("glimmer").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.display.width, 240);
    assert_eq!(config.display.background, "#000000");
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::GlimmerConfig;

    let content = default_config_toml();
    let config: GlimmerConfig = toml::from_str(&content).unwrap();
    assert_eq!(config.display.height, 320);
    assert!(config.effects.enabled);
}

#[test]
fn default_config_path_is_reasonable() {
    // This may not work in all CI environments, but should work locally
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("glimmer"));
        assert!(path_str.ends_with("config.toml"));
    }
}
