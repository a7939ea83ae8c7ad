//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Glimmer Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[display]
# width = 240            # source screen width in pixels (1-4096)
# height = 320           # source screen height in pixels (1-4096)
# scale = 2.0            # upscale factor (1.0-16.0)
# background = "#000000" # backdrop fill color

[effects]
# enabled = true         # master toggle for all post-processing

[effects.glow]
# enabled = true

[logging]
# level = "INFO"         # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
