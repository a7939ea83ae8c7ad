use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum GlimmerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("image error: {0}")]
    Image(String),

    #[error("render error: {0}")]
    Render(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("display.scale out of range".into());
        assert_eq!(
            err.to_string(),
            "config validation error: display.scale out of range"
        );
    }

    #[test]
    fn glimmer_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: GlimmerError = config_err.into();
        assert!(matches!(err, GlimmerError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn glimmer_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: GlimmerError = io_err.into();
        assert!(matches!(err, GlimmerError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn glimmer_error_other_variants() {
        let err = GlimmerError::Image("unsupported format".into());
        assert_eq!(err.to_string(), "image error: unsupported format");

        let err = GlimmerError::Render("gpu not found".into());
        assert_eq!(err.to_string(), "render error: gpu not found");

        let err = GlimmerError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
