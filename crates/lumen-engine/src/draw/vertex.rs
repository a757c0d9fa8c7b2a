use bytemuck::{Pod, Zeroable};

/// A single emitted vertex, ready for upload.
///
///  offset  0  position [f32; 3]   loc 0  (NDC, z always 0)
///  offset 12  color    [f32; 4]   loc 1  (straight alpha, global alpha applied)
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x4  // color
    ];

    #[inline]
    pub const fn new(ndc: [f32; 2], color: [f32; 4]) -> Self {
        Self { position: [ndc[0], ndc[1], 0.0], color }
    }

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 28);
        assert_eq!(Vertex::layout().array_stride, 28);
    }
}
