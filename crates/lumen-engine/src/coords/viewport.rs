use super::Vec2;

/// Viewport size in pixels.
///
/// This is the coordinate basis for mapping pixel positions to normalized
/// device coordinates. It is mutated whenever the tracked window resizes.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Maps a pixel position to normalized device coordinates.
    ///
    /// `x` maps `[0, width]` to `[-1, 1]`, `y` maps `[0, height]` to `[1, -1]`,
    /// so the top-left pixel lands on the top-left NDC corner.
    ///
    /// Zero or negative dimensions are treated as `1.0`.
    #[inline]
    pub fn to_ndc(self, p: Vec2) -> [f32; 2] {
        let w = self.width.max(1.0);
        let h = self.height.max(1.0);
        [(p.x / w) * 2.0 - 1.0, 1.0 - (p.y / h) * 2.0]
    }
}
