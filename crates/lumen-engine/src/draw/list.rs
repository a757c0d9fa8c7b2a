use crate::coords::{Vec2, Viewport};
use crate::paint::Color;

use super::{DrawCmd, Topology, Vertex};

/// One frame's worth of pending geometry plus the settings applied at emission.
///
/// Shape calls (see `draw::shapes`) tessellate in pixels, then [`submit`]
/// normalizes every point against the *current* viewport and scales alpha by
/// the *current* global alpha. Settings changed later never touch vertices
/// already in the buffer.
///
/// Performance characteristics:
/// - `submit()` is O(n) in the submitted vertex count
/// - `clear()` keeps allocated capacity, so a warmed list does not allocate
///
/// [`submit`]: DrawList::submit
#[derive(Debug)]
pub struct DrawList {
    vertices: Vec<Vertex>,
    commands: Vec<DrawCmd>,

    viewport: Viewport,
    global_alpha: f32,
    anti_alias: bool,
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl DrawList {
    #[inline]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            vertices: Vec::new(),
            commands: Vec::new(),
            viewport,
            global_alpha: 1.0,
            anti_alias: true,
        }
    }

    /// Updates the viewport used for subsequent emissions.
    ///
    /// Call between frames; a mid-frame change normalizes later shapes
    /// differently from earlier ones.
    #[inline]
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Sets the alpha multiplier for subsequent submissions, clamped to `[0, 1]`.
    ///
    /// NaN is treated as `0`.
    #[inline]
    pub fn set_global_alpha(&mut self, alpha: f32) {
        self.global_alpha = if alpha.is_nan() { 0.0 } else { alpha.clamp(0.0, 1.0) };
    }

    #[inline]
    pub fn global_alpha(&self) -> f32 {
        self.global_alpha
    }

    /// Sets the anti-alias hint recorded on subsequent line commands.
    #[inline]
    pub fn enable_anti_aliasing(&mut self, enable: bool) {
        self.anti_alias = enable;
    }

    #[inline]
    pub fn anti_aliasing(&self) -> bool {
        self.anti_alias
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[inline]
    pub fn commands(&self) -> &[DrawCmd] {
        &self.commands
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.commands.is_empty()
    }

    /// Drops all pending geometry. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.commands.clear();
    }

    /// Appends per-vertex colored points as one draw command.
    ///
    /// An empty submission records nothing. Line topologies record the
    /// current anti-alias hint; triangle topologies always record `false`.
    pub fn submit<I>(&mut self, topology: Topology, points: I)
    where
        I: IntoIterator<Item = (Vec2, Color)>,
    {
        let start = self.vertices.len();
        let viewport = self.viewport;
        let alpha = self.global_alpha;

        self.vertices.extend(points.into_iter().map(|(p, color)| {
            Vertex::new(viewport.to_ndc(p), color.with_alpha_scale(alpha).to_array())
        }));

        let count = self.vertices.len() - start;
        if count == 0 {
            return;
        }

        self.commands.push(DrawCmd {
            topology,
            start,
            count,
            anti_alias: self.anti_alias && topology.is_line(),
        });
    }

    /// Appends points sharing one color as one draw command.
    #[inline]
    pub fn submit_solid(&mut self, topology: Topology, points: &[Vec2], color: Color) {
        self.submit(topology, points.iter().map(|&p| (p, color)));
    }
}
