use core::ops::Range;

/// Primitive topology of a draw command.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Topology {
    Lines,
    Triangles,
    TriangleStrip,
    LineStrip,
}

impl Topology {
    pub const ALL: [Topology; 4] = [
        Topology::Lines,
        Topology::Triangles,
        Topology::TriangleStrip,
        Topology::LineStrip,
    ];

    #[inline]
    pub fn is_line(self) -> bool {
        matches!(self, Topology::Lines | Topology::LineStrip)
    }

    #[inline]
    pub fn to_wgpu(self) -> wgpu::PrimitiveTopology {
        match self {
            Topology::Lines => wgpu::PrimitiveTopology::LineList,
            Topology::Triangles => wgpu::PrimitiveTopology::TriangleList,
            Topology::TriangleStrip => wgpu::PrimitiveTopology::TriangleStrip,
            Topology::LineStrip => wgpu::PrimitiveTopology::LineStrip,
        }
    }

    /// Position of this topology in [`Topology::ALL`].
    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Topology::Lines => 0,
            Topology::Triangles => 1,
            Topology::TriangleStrip => 2,
            Topology::LineStrip => 3,
        }
    }
}

/// One contiguous span of the frame's vertex buffer.
///
/// `anti_alias` is carried for future line smoothing; the renderer ignores it.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DrawCmd {
    pub topology: Topology,
    pub start: usize,
    pub count: usize,
    pub anti_alias: bool,
}

impl DrawCmd {
    /// Vertex range for a `draw` call, or `None` if it does not fit `u32`.
    #[inline]
    pub fn vertex_range(&self) -> Option<Range<u32>> {
        let start = u32::try_from(self.start).ok()?;
        let end = u32::try_from(self.start.checked_add(self.count)?).ok()?;
        Some(start..end)
    }
}

/// Draw calls for a command list, one per command in submission order.
pub fn draw_ranges(commands: &[DrawCmd]) -> impl Iterator<Item = (Topology, Range<u32>)> + '_ {
    commands
        .iter()
        .filter_map(|cmd| cmd.vertex_range().map(|range| (cmd.topology, range)))
}
