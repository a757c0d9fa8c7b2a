use wgpu::util::DeviceExt;

use crate::draw::{DrawList, Vertex, draw_ranges};
use crate::render::{RenderCtx, RenderTarget};

use super::pipeline::OverlayPipeline;

/// Work issued for one frame.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct FrameStats {
    pub vertices: usize,
    pub draw_calls: usize,
}

/// Drains a [`DrawList`] onto the GPU once per frame.
///
/// Lifecycle:
/// - [`new`](Self::new) builds the fixed pipeline state once
/// - [`render`](Self::render) uploads the frame's vertices as one buffer and
///   issues one draw per recorded command, in submission order
/// - dropping the renderer releases the pipelines and the last vertex buffer
///
/// Failures are absorbed: a frame that cannot be uploaded is skipped rather
/// than drawn partially. The draw list is cleared on every path.
pub struct FrameRenderer {
    pipeline: OverlayPipeline,

    /// Previous frame's upload. Released before the next one is created.
    vertex_buffer: Option<wgpu::Buffer>,
}

impl FrameRenderer {
    pub fn new(ctx: &RenderCtx<'_>) -> Self {
        Self {
            pipeline: OverlayPipeline::new(ctx.device, ctx.surface_format),
            vertex_buffer: None,
        }
    }

    /// Renders and clears `list`.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        list: &mut DrawList,
    ) -> FrameStats {
        let stats = self.encode(ctx, target, list);
        list.clear();

        log::trace!("frame: {} vertices, {} draw calls", stats.vertices, stats.draw_calls);
        stats
    }

    fn encode(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        list: &DrawList,
    ) -> FrameStats {
        if list.is_empty() {
            return FrameStats::default();
        }

        if self.pipeline.format() != ctx.surface_format {
            self.pipeline = OverlayPipeline::new(ctx.device, ctx.surface_format);
        }

        // No pooling: the old buffer goes before the new one exists.
        self.vertex_buffer = None;

        let vertices = list.vertices();
        let Some(buffer) = upload_vertices(ctx.device, vertices) else {
            return FrameStats::default();
        };

        let mut stats = FrameStats { vertices: vertices.len(), draw_calls: 0 };

        {
            let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("lumen overlay pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: target.color_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            rpass.set_vertex_buffer(0, buffer.slice(..));

            for (topology, range) in draw_ranges(list.commands()) {
                rpass.set_pipeline(self.pipeline.for_topology(topology));
                rpass.draw(range, 0..1);
                stats.draw_calls += 1;
            }
        }

        self.vertex_buffer = Some(buffer);
        stats
    }
}

/// Creates a vertex buffer holding `vertices`, or `None` when the device cannot hold it.
fn upload_vertices(device: &wgpu::Device, vertices: &[Vertex]) -> Option<wgpu::Buffer> {
    let bytes: &[u8] = bytemuck::cast_slice(vertices);
    let max = device.limits().max_buffer_size;

    if u32::try_from(vertices.len()).is_err() || bytes.len() as u64 > max {
        log::warn!(
            "dropping overlay frame: {} vertices ({} bytes) exceed device limits ({max} bytes)",
            vertices.len(),
            bytes.len(),
        );
        return None;
    }

    Some(device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("lumen overlay vbo"),
        contents: bytes,
        usage: wgpu::BufferUsages::VERTEX,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Rect, Vec2, Viewport};
    use crate::paint::Color;

    const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;
    const SIZE: u32 = 64;

    /// Device on wgpu's no-op backend: full validation, no real GPU.
    fn noop_device(limits: wgpu::Limits) -> (wgpu::Device, wgpu::Queue) {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::NOOP,
            backend_options: wgpu::BackendOptions {
                noop: wgpu::NoopBackendOptions { enable: true },
                ..Default::default()
            },
            ..Default::default()
        });
        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            force_fallback_adapter: false,
            compatible_surface: None,
        }))
        .expect("noop adapter");
        pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor {
            label: Some("lumen test device"),
            required_limits: limits,
            ..Default::default()
        }))
        .expect("noop device")
    }

    fn mixed_frame() -> DrawList {
        let mut list = DrawList::new(Viewport::new(SIZE as f32, SIZE as f32));
        list.filled_rect(Rect::new(4.0, 4.0, 20.0, 12.0), Color::new(0.2, 0.4, 0.8, 0.9));
        list.circle(Vec2::new(32.0, 32.0), 10.0, 16, Color::white());
        list.polyline(
            &[Vec2::new(0.0, 60.0), Vec2::new(30.0, 40.0), Vec2::new(60.0, 60.0)],
            Color::rgb(1.0, 0.0, 0.0),
        );
        list.triangle_strip(
            &[
                Vec2::new(40.0, 0.0),
                Vec2::new(60.0, 0.0),
                Vec2::new(40.0, 20.0),
                Vec2::new(60.0, 20.0),
            ],
            Color::rgb(0.0, 1.0, 0.0),
        );
        list
    }

    struct Harness {
        device: wgpu::Device,
        queue: wgpu::Queue,
        view: wgpu::TextureView,
        renderer: FrameRenderer,
    }

    impl Harness {
        fn new(limits: wgpu::Limits) -> Self {
            let (device, queue) = noop_device(limits);
            let texture = device.create_texture(&wgpu::TextureDescriptor {
                label: Some("lumen test target"),
                size: wgpu::Extent3d {
                    width: SIZE,
                    height: SIZE,
                    depth_or_array_layers: 1,
                },
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: FORMAT,
                usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
                view_formats: &[],
            });
            let view = texture.create_view(&Default::default());
            let renderer = FrameRenderer::new(&RenderCtx::new(&device, &queue, FORMAT));
            Self { device, queue, view, renderer }
        }

        fn frame(&mut self, list: &mut DrawList) -> FrameStats {
            let mut encoder = self.device.create_command_encoder(&Default::default());
            let ctx = RenderCtx::new(&self.device, &self.queue, FORMAT);
            let stats = {
                let mut target = RenderTarget::new(&mut encoder, &self.view);
                self.renderer.render(&ctx, &mut target, list)
            };
            self.queue.submit([encoder.finish()]);
            stats
        }
    }

    #[test]
    fn one_draw_per_command_then_list_is_drained() {
        let mut h = Harness::new(wgpu::Limits::default());
        let mut list = mixed_frame();
        let commands = list.commands().len();
        let vertices = list.vertices().len();
        assert_eq!(commands, 4);

        let stats = h.frame(&mut list);
        assert_eq!(stats, FrameStats { vertices, draw_calls: commands });
        assert!(list.is_empty());
        assert!(list.commands().is_empty());
    }

    #[test]
    fn next_frame_starts_empty() {
        let mut h = Harness::new(wgpu::Limits::default());
        let mut list = mixed_frame();
        h.frame(&mut list);

        assert_eq!(h.frame(&mut list), FrameStats::default());
    }

    #[test]
    fn oversized_frame_is_abandoned_and_cleared() {
        let limits = wgpu::Limits {
            max_buffer_size: 256,
            ..wgpu::Limits::default()
        };
        let mut h = Harness::new(limits);
        let mut list = mixed_frame();
        assert!(std::mem::size_of_val(list.vertices()) > 256);

        assert_eq!(h.frame(&mut list), FrameStats::default());
        assert!(list.is_empty());

        // A frame that fits still renders on the same renderer.
        list.filled_rect(Rect::new(0.0, 0.0, 8.0, 8.0), Color::white());
        assert_eq!(h.frame(&mut list), FrameStats { vertices: 6, draw_calls: 1 });
    }
}
