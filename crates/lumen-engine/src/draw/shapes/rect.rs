use crate::coords::{Rect, Vec2};
use crate::draw::{DrawList, Topology};
use crate::paint::Color;

/// Two triangles covering `rect`: `(tl, tr, br)` and `(tl, br, bl)`.
///
/// They share only the `tl`–`br` diagonal.
#[inline]
pub fn rect_triangles(rect: Rect) -> [Vec2; 6] {
    let [tl, tr, br, bl] = rect.corners();
    [tl, tr, br, tl, br, bl]
}

impl DrawList {
    /// Records a rectangle outline as one line command per edge.
    pub fn rect(&mut self, rect: Rect, color: Color) {
        let [tl, tr, br, bl] = rect.corners();
        self.line(tl, tr, color);
        self.line(tr, br, color);
        self.line(br, bl, color);
        self.line(bl, tl, color);
    }

    /// Records a rectangle outline as one thick line per edge.
    pub fn rect_thick(&mut self, rect: Rect, thickness: f32, color: Color) {
        let [tl, tr, br, bl] = rect.corners();
        self.thick_line(tl, tr, thickness, color);
        self.thick_line(tr, br, thickness, color);
        self.thick_line(br, bl, thickness, color);
        self.thick_line(bl, tl, thickness, color);
    }

    /// Records a solid rectangle (6 vertices).
    #[inline]
    pub fn filled_rect(&mut self, rect: Rect, color: Color) {
        self.submit_solid(Topology::Triangles, &rect_triangles(rect), color);
    }
}
