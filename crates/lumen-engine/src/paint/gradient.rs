use super::Color;

/// Direction of a two-color rectangle gradient.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum GradientAxis {
    /// `from` on the left edge, `to` on the right edge.
    #[default]
    Horizontal,
    /// `from` on the top edge, `to` on the bottom edge.
    Vertical,
}

/// Two-stop linear gradient spanning a rectangle along one axis.
///
/// Interpolation between the stops is left to the rasterizer's per-vertex
/// color interpolation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LinearGradient {
    pub from: Color,
    pub to: Color,
    pub axis: GradientAxis,
}

impl LinearGradient {
    #[inline]
    pub const fn new(from: Color, to: Color, axis: GradientAxis) -> Self {
        Self { from, to, axis }
    }

    #[inline]
    pub const fn horizontal(from: Color, to: Color) -> Self {
        Self::new(from, to, GradientAxis::Horizontal)
    }

    #[inline]
    pub const fn vertical(from: Color, to: Color) -> Self {
        Self::new(from, to, GradientAxis::Vertical)
    }

    /// Colors for the rect corners in clockwise order from top-left.
    pub fn corner_colors(&self) -> [Color; 4] {
        let (a, b) = (self.from, self.to);
        match self.axis {
            GradientAxis::Horizontal => [a, b, b, a],
            GradientAxis::Vertical => [a, a, b, b],
        }
    }
}
