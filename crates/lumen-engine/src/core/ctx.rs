use std::time::Duration;

use winit::window::Window;

use crate::coords::Viewport;
use crate::device::{Gpu, SurfaceErrorAction};
use crate::draw::DrawList;
use crate::paint::Color;
use crate::render::{FrameRenderer, FrameStats, RenderCtx, RenderTarget};
use crate::track::TrackedRect;

use super::app::AppControl;

/// What [`App::on_frame`](super::App::on_frame) gets to work with.
///
/// `'a` spans the callback; `'w` is the window borrow inside `Gpu<'w>`.
pub struct FrameCtx<'a, 'w> {
    pub window: &'a Window,
    pub gpu: &'a mut Gpu<'w>,
    pub renderer: &'a mut FrameRenderer,
    /// This frame's draw list; empty on entry.
    pub draw: &'a mut DrawList,
    /// Rectangle of the tracked window this frame.
    pub target: TrackedRect,
    /// Frames since the overlay opened, starting at 0.
    pub frame_index: u64,
    /// Time since the overlay started.
    pub elapsed: Duration,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.draw.viewport()
    }

    /// Clears the surface to `clear`, renders the draw list, and presents.
    ///
    /// The draw list is empty afterwards even when the frame could not be
    /// acquired.
    pub fn render(&mut self, clear: Color) -> AppControl {
        let mut frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                log::debug!("failed to acquire frame: {err:?}");
                let action = self.gpu.handle_surface_error(err);
                return abandon_frame(self.draw, action);
            }
        };

        // Clear pass; dropped before the renderer opens its own pass.
        {
            let _rpass = frame.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("lumen clear"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &frame.view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: clear.r as f64,
                            g: clear.g as f64,
                            b: clear.b as f64,
                            a: clear.a as f64,
                        }),
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

        let rctx = RenderCtx::new(self.gpu.device(), self.gpu.queue(), self.gpu.surface_format());

        let stats: FrameStats = {
            let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
            self.renderer.render(&rctx, &mut target, self.draw)
        };

        if self.frame_index % 600 == 0 {
            log::debug!(
                "frame {}: {} vertices, {} draw calls",
                self.frame_index,
                stats.vertices,
                stats.draw_calls
            );
        }

        self.window.pre_present_notify();
        self.gpu.submit(frame);

        AppControl::Continue
    }
}

/// Drops a frame whose surface texture could not be acquired.
///
/// Submitted geometry is discarded so it cannot leak into the next frame.
fn abandon_frame(draw: &mut DrawList, action: SurfaceErrorAction) -> AppControl {
    draw.clear();
    match action {
        SurfaceErrorAction::Fatal => AppControl::Exit,
        SurfaceErrorAction::Reconfigured | SurfaceErrorAction::SkipFrame => AppControl::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Rect, Vec2};

    fn pending() -> DrawList {
        let mut list = DrawList::new(Viewport::new(64.0, 64.0));
        list.filled_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::white());
        list.line(Vec2::new(0.0, 0.0), Vec2::new(5.0, 5.0), Color::white());
        list
    }

    #[test]
    fn lost_frame_discards_geometry_and_continues() {
        for action in [SurfaceErrorAction::Reconfigured, SurfaceErrorAction::SkipFrame] {
            let mut list = pending();
            assert_eq!(abandon_frame(&mut list, action), AppControl::Continue);
            assert!(list.is_empty());
            assert!(list.commands().is_empty());
        }
    }

    #[test]
    fn fatal_surface_error_exits() {
        let mut list = pending();
        assert_eq!(abandon_frame(&mut list, SurfaceErrorAction::Fatal), AppControl::Exit);
        assert!(list.is_empty());
    }
}
