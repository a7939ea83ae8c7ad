//! One-shot offscreen rendering of the glow pass.
//!
//! Drives the GPU pipeline without a window: upload the frame, record the
//! pass, submit, and read the output target back into an image. The host
//! display pipeline would instead keep the pipeline alive and composite
//! `output_view()` every frame.

use glimmer_common::Rgba;
use image::RgbaImage;
use tracing::debug;

use crate::geometry::ScreenGeometry;
use crate::glow::{GlowPipeline, GlowSettings, GlowUniforms};
use crate::gpu::{read_texture_rgba8, GpuContext, RenderError};

/// Render one glow-processed frame on the GPU.
pub fn render_glow(
    frame: &RgbaImage,
    geometry: &ScreenGeometry,
    background: Rgba,
    settings: GlowSettings,
) -> Result<RgbaImage, RenderError> {
    let (out_width, out_height) = geometry.output_size();

    let ctx = pollster::block_on(GpuContext::new())?;
    let source_view = ctx.upload_frame(frame);

    let pipeline = GlowPipeline::new(&ctx.device, &source_view, out_width, out_height, settings);
    pipeline.update_uniforms(&ctx.queue, &GlowUniforms::new(geometry, background));

    let mut encoder = ctx
        .device
        .create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("glow encoder"),
        });
    pipeline.render(&mut encoder);
    ctx.queue.submit(std::iter::once(encoder.finish()));

    debug!("glow pass submitted ({out_width}x{out_height})");

    let pixels = read_texture_rgba8(&ctx.device, &ctx.queue, &pipeline.texture, out_width, out_height)?;
    RgbaImage::from_raw(out_width, out_height, pixels)
        .ok_or_else(|| RenderError::ReadbackError("output buffer size mismatch".into()))
}
