pub mod errors;
pub mod types;

pub use errors::{ConfigError, GlimmerError};
pub use types::{Color, Rgba};

pub type Result<T> = std::result::Result<T, GlimmerError>;
