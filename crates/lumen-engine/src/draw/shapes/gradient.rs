use crate::coords::{Rect, Vec2};
use crate::draw::{DrawList, Topology};
use crate::paint::{Color, LinearGradient};

use super::rect::rect_triangles;

/// Rect triangles with each corner colored by the gradient's axis.
pub fn gradient_rect_vertices(rect: Rect, gradient: &LinearGradient) -> [(Vec2, Color); 6] {
    let [c_tl, c_tr, c_br, c_bl] = gradient.corner_colors();
    let [p0, p1, p2, p3, p4, p5] = rect_triangles(rect);
    [
        (p0, c_tl),
        (p1, c_tr),
        (p2, c_br),
        (p3, c_tl),
        (p4, c_br),
        (p5, c_bl),
    ]
}

impl DrawList {
    /// Records a rectangle filled with a two-color gradient.
    #[inline]
    pub fn gradient_rect(&mut self, rect: Rect, gradient: &LinearGradient) {
        self.submit(Topology::Triangles, gradient_rect_vertices(rect, gradient));
    }
}
