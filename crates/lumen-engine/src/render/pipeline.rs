//! Fixed pipeline state shared by every draw command.

use crate::draw::{Topology, Vertex};

/// Straight-alpha blending: `src * a + dst * (1 - a)`.
///
/// Alpha accumulates the same way so the composited overlay keeps a sensible
/// coverage value for the window manager.
pub(super) fn alpha_blend() -> wgpu::BlendState {
    wgpu::BlendState {
        color: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::SrcAlpha,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
        alpha: wgpu::BlendComponent {
            src_factor: wgpu::BlendFactor::One,
            dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
            operation: wgpu::BlendOperation::Add,
        },
    }
}

/// One shader pair, one vertex layout, one blend state, no culling.
///
/// wgpu bakes the primitive topology into the pipeline object, so the set
/// holds one pipeline per [`Topology`]; choosing among them is the
/// equivalent of switching the input assembler topology per draw.
pub(super) struct OverlayPipeline {
    format: wgpu::TextureFormat,
    pipelines: [wgpu::RenderPipeline; 4],
}

impl OverlayPipeline {
    pub(super) fn new(device: &wgpu::Device, format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("lumen overlay shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/overlay.wgsl").into()),
        });

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("lumen overlay pipeline layout"),
            bind_group_layouts: &[],
            immediate_size: 0,
        });

        let pipelines = Topology::ALL.map(|topology| {
            create_pipeline(device, &shader, &layout, format, topology)
        });

        log::debug!("overlay pipelines created for {format:?}");

        Self { format, pipelines }
    }

    #[inline]
    pub(super) fn format(&self) -> wgpu::TextureFormat {
        self.format
    }

    #[inline]
    pub(super) fn for_topology(&self, topology: Topology) -> &wgpu::RenderPipeline {
        &self.pipelines[topology.index()]
    }
}

fn create_pipeline(
    device: &wgpu::Device,
    shader: &wgpu::ShaderModule,
    layout: &wgpu::PipelineLayout,
    format: wgpu::TextureFormat,
    topology: Topology,
) -> wgpu::RenderPipeline {
    let label = format!("lumen overlay pipeline ({topology:?})");

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(&label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            compilation_options: Default::default(),
            buffers: &[Vertex::layout()],
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(alpha_blend()),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        primitive: wgpu::PrimitiveState {
            topology: topology.to_wgpu(),
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    })
}
