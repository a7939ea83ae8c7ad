pub mod geometry;
pub mod glow;
pub mod gpu;
pub mod headless;
pub mod source;

pub use geometry::ScreenGeometry;
pub use glow::{GlowFilter, GlowPipeline, GlowSettings, GlowUniforms};
pub use gpu::{GpuContext, RenderError};
pub use source::{FrameSource, ImageSource, SolidSource};
