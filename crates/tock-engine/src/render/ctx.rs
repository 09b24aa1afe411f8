use crate::coords::Canvas;

/// What a renderer needs to record draws for the current frame.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    /// Logical canvas the draw coordinates are expressed in.
    pub canvas: Canvas,
}

impl<'a> RenderCtx<'a> {
    #[inline]
    pub fn new(
        device: &'a wgpu::Device,
        queue: &'a wgpu::Queue,
        surface_format: wgpu::TextureFormat,
        canvas: Canvas,
    ) -> Self {
        Self {
            device,
            queue,
            surface_format,
            canvas,
        }
    }
}

/// Target for drawing (encoder + color view).
///
/// The view has already been cleared for this frame; renderers load it.
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
}

impl<'a> RenderTarget<'a> {
    #[inline]
    pub fn new(encoder: &'a mut wgpu::CommandEncoder, color_view: &'a wgpu::TextureView) -> Self {
        Self { encoder, color_view }
    }
}
