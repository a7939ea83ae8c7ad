//! Glow (bloom) post-processing.
//!
//! A single-pass 21x21 gather: each output fragment sums its neighborhood
//! of source samples, distance-weighted and palette-filtered, then adds the
//! sharp source pixel back on top so the image stays crisp under the halo.
//!
//! Two implementations share the same constants and semantics:
//! [`GlowFilter`] shades fragments on the CPU (rayon across rows) and
//! [`GlowPipeline`] runs the identical algorithm as a WGSL fragment shader.
//! Disabled when `effects.glow.enabled = false`.

mod filter;
mod kernel;
mod pipeline;
mod types;

pub use filter::*;
pub use kernel::*;
pub use pipeline::*;
pub use types::*;
