use crate::coords::Vec2;
use crate::draw::{DrawList, Topology};
use crate::paint::Color;

/// Lines shorter than this have no usable direction.
pub const DEGENERATE_LENGTH: f32 = 0.001;

/// Two triangles covering a line of the given thickness.
///
/// Endpoints are pushed half the thickness to either side along the line's
/// perpendicular. Returns `None` when the endpoints coincide.
pub fn thick_line_quad(a: Vec2, b: Vec2, thickness: f32) -> Option<[Vec2; 6]> {
    let dir = b - a;
    let len = dir.length();
    if len < DEGENERATE_LENGTH || !len.is_finite() {
        return None;
    }

    let offset = dir.perp() / len * (thickness * 0.5);
    let (a0, a1) = (a - offset, a + offset);
    let (b0, b1) = (b - offset, b + offset);

    Some([a0, a1, b1, a0, b1, b0])
}

impl DrawList {
    /// Records a one-pixel line.
    #[inline]
    pub fn line(&mut self, a: Vec2, b: Vec2, color: Color) {
        self.submit_solid(Topology::Lines, &[a, b], color);
    }

    /// Records a line of `thickness` pixels as a quad. Coincident endpoints draw nothing.
    pub fn thick_line(&mut self, a: Vec2, b: Vec2, thickness: f32, color: Color) {
        if let Some(quad) = thick_line_quad(a, b, thickness) {
            self.submit_solid(Topology::Triangles, &quad, color);
        }
    }

    /// Records an open polyline as a single line strip. Fewer than two points draw nothing.
    pub fn polyline(&mut self, points: &[Vec2], color: Color) {
        if points.len() < 2 {
            return;
        }
        self.submit_solid(Topology::LineStrip, points, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Viewport;

    #[test]
    fn horizontal_quad_spans_thickness() {
        let q = thick_line_quad(Vec2::new(0.0, 10.0), Vec2::new(20.0, 10.0), 4.0).unwrap();
        let ys: Vec<f32> = q.iter().map(|p| p.y).collect();
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 8.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 12.0);
        assert!(q.iter().all(|p| p.x == 0.0 || p.x == 20.0));
    }

    #[test]
    fn quad_corners_are_half_thickness_from_axis() {
        let a = Vec2::new(3.0, 4.0);
        let b = Vec2::new(30.0, 40.0);
        let q = thick_line_quad(a, b, 6.0).unwrap();
        for corner in [q[0], q[1]] {
            assert!(((corner - a).length() - 3.0).abs() < 1e-4);
        }
        for corner in [q[2], q[5]] {
            assert!(((corner - b).length() - 3.0).abs() < 1e-4);
        }
    }

    #[test]
    fn coincident_endpoints_emit_nothing() {
        let p = Vec2::new(5.0, 5.0);
        assert!(thick_line_quad(p, p, 3.0).is_none());

        let mut list = DrawList::new(Viewport::new(100.0, 100.0));
        list.thick_line(p, p + Vec2::new(0.0005, 0.0), 3.0, Color::white());
        assert!(list.vertices().is_empty());
        assert!(list.commands().is_empty());
    }

    #[test]
    fn thick_line_is_one_triangle_command() {
        let mut list = DrawList::new(Viewport::new(100.0, 100.0));
        list.thick_line(Vec2::new(0.0, 0.0), Vec2::new(50.0, 0.0), 2.0, Color::white());
        assert_eq!(list.vertices().len(), 6);
        assert_eq!(list.commands()[0].topology, Topology::Triangles);
        assert!(!list.commands()[0].anti_alias);
    }

    #[test]
    fn line_and_polyline() {
        let mut list = DrawList::new(Viewport::new(100.0, 100.0));
        list.line(Vec2::zero(), Vec2::new(1.0, 1.0), Color::white());
        list.polyline(&[Vec2::zero(), Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0)], Color::white());
        list.polyline(&[Vec2::zero()], Color::white());

        let cmds = list.commands();
        assert_eq!(cmds.len(), 2);
        assert_eq!((cmds[0].topology, cmds[0].count), (Topology::Lines, 2));
        assert_eq!((cmds[1].topology, cmds[1].count), (Topology::LineStrip, 3));
    }
}
