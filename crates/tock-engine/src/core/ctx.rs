use anyhow::Result;
use winit::window::Window;

use crate::coords::Canvas;
use crate::device::{Gpu, SurfaceErrorAction};
use crate::paint::Color;
use crate::render::{RenderCtx, RenderTarget};
use crate::time::FrameTime;

use super::app::AppControl;

/// Per-frame context passed to `core::App::on_frame`.
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window: &'a Window,
    pub gpu: &'a mut Gpu<'w>,
    pub time: FrameTime,
    /// Logical canvas all draw coordinates are expressed in.
    pub canvas: Canvas,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Clears the surface to `clear`, calls `draw` with a ready [`RenderCtx`]
    /// and [`RenderTarget`], then presents the frame.
    ///
    /// Surface loss and timeouts skip the frame (`Ok(Continue)`); running out
    /// of memory is an error.
    pub fn present<F>(&mut self, clear: Color, draw: F) -> Result<AppControl>
    where
        F: FnOnce(&RenderCtx<'_>, &mut RenderTarget<'_>),
    {
        let mut frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                let reason = err.to_string();
                return match self.gpu.handle_surface_error(err) {
                    SurfaceErrorAction::Fatal => Err(anyhow::anyhow!("surface error: {reason}")),
                    SurfaceErrorAction::Reconfigured | SurfaceErrorAction::SkipFrame => {
                        Ok(AppControl::Continue)
                    }
                };
            }
        };

        // Clear pass; dropped before the encoder is handed to renderers.
        {
            let _rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("tock clear"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &frame.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear.to_wgpu()),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });
        }

        let rctx = RenderCtx::new(
            self.gpu.device(),
            self.gpu.queue(),
            self.gpu.surface_format(),
            self.canvas,
        );

        // RenderTarget borrows frame.encoder; dropped before submit() takes frame.
        {
            let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
            draw(&rctx, &mut target);
        }

        self.window.pre_present_notify();
        self.gpu.submit(frame);

        Ok(AppControl::Continue)
    }
}
