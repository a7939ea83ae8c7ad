mod color;

pub use color::{Color, Rgba};
