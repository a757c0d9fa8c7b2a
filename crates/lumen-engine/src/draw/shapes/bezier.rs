use crate::coords::Vec2;
use crate::draw::{DrawList, Topology};
use crate::paint::Color;

use super::open_edges;

pub const MIN_SEGMENTS: u32 = 4;
pub const MAX_SEGMENTS: u32 = 64;

/// Cubic Bezier curve in pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CubicBezier {
    pub p0: Vec2,
    pub p1: Vec2,
    pub p2: Vec2,
    pub p3: Vec2,
}

impl CubicBezier {
    #[inline]
    pub const fn new(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Bernstein form at `t`.
    #[inline]
    pub fn eval(&self, t: f32) -> Vec2 {
        let mt = 1.0 - t;
        let (mt2, t2) = (mt * mt, t * t);
        self.p0 * (mt2 * mt)
            + self.p1 * (3.0 * mt2 * t)
            + self.p2 * (3.0 * mt * t2)
            + self.p3 * (t2 * t)
    }

    /// `p0` followed by the curve at `t = i / segments` for `i` in `1..=segments`.
    ///
    /// `segments` is clamped to `[4, 64]`.
    pub fn flatten(&self, segments: u32) -> Vec<Vec2> {
        let n = segments.clamp(MIN_SEGMENTS, MAX_SEGMENTS);
        core::iter::once(self.p0)
            .chain((1..=n).map(|i| self.eval(i as f32 / n as f32)))
            .collect()
    }
}

impl DrawList {
    /// Records a cubic Bezier as line segments: two vertices per segment.
    pub fn bezier(&mut self, curve: &CubicBezier, segments: u32, color: Color) {
        let path = curve.flatten(segments);
        self.submit_solid(Topology::Lines, &open_edges(&path), color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Viewport;

    fn s_curve() -> CubicBezier {
        CubicBezier::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(50.0, 0.0),
            Vec2::new(50.0, 100.0),
            Vec2::new(100.0, 100.0),
        )
    }

    #[test]
    fn endpoints_are_interpolated() {
        let c = s_curve();
        assert_eq!(c.eval(0.0), c.p0);
        assert_eq!(c.eval(1.0), c.p3);
        let pts = c.flatten(16);
        assert_eq!(pts.len(), 17);
        assert_eq!(pts[0], c.p0);
        assert_eq!(*pts.last().unwrap(), c.p3);
    }

    #[test]
    fn collinear_controls_stay_on_line() {
        // Points on y = 2x + 1, deliberately unevenly spaced.
        let on_line = |x: f32| Vec2::new(x, 2.0 * x + 1.0);
        let c = CubicBezier::new(on_line(0.0), on_line(7.0), on_line(2.0), on_line(30.0));
        for segments in [1, 4, 9, 33, 64, 500] {
            for p in c.flatten(segments) {
                let err = (p.y - (2.0 * p.x + 1.0)).abs();
                assert!(err < 1e-3 * (1.0 + p.y.abs()), "{segments}: {p:?}");
            }
        }
    }

    #[test]
    fn segments_are_clamped() {
        let c = s_curve();
        assert_eq!(c.flatten(1).len(), 5);
        assert_eq!(c.flatten(1000).len(), 65);
    }

    #[test]
    fn bezier_emits_two_vertices_per_segment() {
        let mut l = DrawList::new(Viewport::new(100.0, 100.0));
        l.bezier(&s_curve(), 10, Color::white());
        assert_eq!(l.vertices().len(), 20);
        assert_eq!(l.commands()[0].topology, Topology::Lines);
        // Consecutive segments share their joint.
        assert_eq!(l.vertices()[1], l.vertices()[2]);
    }
}
