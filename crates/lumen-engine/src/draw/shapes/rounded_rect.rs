use core::f32::consts::{FRAC_PI_2, PI};

use crate::coords::{Rect, Vec2};
use crate::draw::{DrawList, Topology};
use crate::paint::Color;

use super::fan;

pub const MIN_CORNER_SEGMENTS: usize = 4;
pub const MAX_CORNER_SEGMENTS: usize = 32;

/// Radius clamped to `[0, min(w, h) / 2]`.
#[inline]
pub fn effective_radius(rect: Rect, radius: f32) -> f32 {
    let max = rect.size.x.min(rect.size.y) * 0.5;
    radius.min(max).max(0.0)
}

/// Arc segments per corner: `radius * 0.5 + 8`, clamped to `[4, 32]`.
#[inline]
pub fn corner_segments(radius: f32) -> usize {
    let n = (radius * 0.5 + 8.0) as usize;
    n.clamp(MIN_CORNER_SEGMENTS, MAX_CORNER_SEGMENTS)
}

/// Closed outline of a rounded rectangle, clockwise on screen.
///
/// Four quarter arcs (top-right, bottom-right, bottom-left, top-left), each
/// with `segments + 1` points. A zero radius collapses every arc onto its
/// corner, which still yields a plain rectangle when fanned. Rects dragged
/// out with a negative width or height are normalized first.
pub fn rounded_rect_points(rect: Rect, radius: f32) -> Vec<Vec2> {
    let rect = rect.normalized();
    let r = effective_radius(rect, radius);
    let segments = corner_segments(r);
    let step = FRAC_PI_2 / segments as f32;

    let min = rect.min();
    let max = rect.max();
    // (arc center, start angle); angles grow clockwise on screen since +Y is down.
    let corners = [
        (Vec2::new(max.x - r, min.y + r), -FRAC_PI_2),
        (Vec2::new(max.x - r, max.y - r), 0.0),
        (Vec2::new(min.x + r, max.y - r), FRAC_PI_2),
        (Vec2::new(min.x + r, min.y + r), PI),
    ];

    let mut points = Vec::with_capacity(4 * (segments + 1));
    for (center, start) in corners {
        points.extend(
            (0..=segments).map(|i| center + Vec2::from_angle(start + i as f32 * step) * r),
        );
    }
    points
}

impl DrawList {
    /// Records a filled rounded rectangle, fanned from the rect center.
    pub fn filled_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        let ring = rounded_rect_points(rect, radius);
        self.submit_solid(Topology::Triangles, &fan(rect.center(), &ring), color);
    }

    /// Alias of [`filled_rounded_rect`](Self::filled_rounded_rect); panels are always filled.
    #[inline]
    pub fn rounded_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        self.filled_rounded_rect(rect, radius, color);
    }

    /// Records a rounded rectangle border as one closed line strip.
    pub fn rounded_rect_outline(&mut self, rect: Rect, radius: f32, color: Color) {
        let mut ring = rounded_rect_points(rect, radius);
        if let Some(&first) = ring.first() {
            ring.push(first);
        }
        self.submit_solid(Topology::LineStrip, &ring, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Viewport;

    fn list() -> DrawList {
        DrawList::new(Viewport::new(400.0, 400.0))
    }

    #[test]
    fn radius_clamps_to_half_short_side() {
        let rect = Rect::new(0.0, 0.0, 100.0, 40.0);
        assert_eq!(effective_radius(rect, 50.0), 20.0);
        assert_eq!(effective_radius(rect, 5.0), 5.0);
        assert_eq!(effective_radius(rect, -3.0), 0.0);
    }

    #[test]
    fn segment_count_formula() {
        assert_eq!(corner_segments(0.0), 8);
        assert_eq!(corner_segments(10.0), 13);
        assert_eq!(corner_segments(100.0), 32);
    }

    #[test]
    fn points_stay_inside_rect() {
        let rect = Rect::new(10.0, 10.0, 80.0, 60.0);
        for p in rounded_rect_points(rect, 12.0) {
            assert!(p.x >= 10.0 - 1e-3 && p.x <= 90.0 + 1e-3, "{p:?}");
            assert!(p.y >= 10.0 - 1e-3 && p.y <= 70.0 + 1e-3, "{p:?}");
        }
    }

    #[test]
    fn arcs_join_along_straight_edges() {
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
        let pts = rounded_rect_points(rect, 10.0);
        let per_arc = corner_segments(10.0) + 1;
        // Top-right arc ends on the right edge; bottom-right arc starts there too.
        let tr_end = pts[per_arc - 1];
        let br_start = pts[per_arc];
        assert!((tr_end.x - 100.0).abs() < 1e-3);
        assert!((br_start.x - 100.0).abs() < 1e-3);
        // Top-left arc ends on the top edge, where the top-right arc began.
        assert!(pts.last().unwrap().y.abs() < 1e-3);
        assert!(pts[0].y.abs() < 1e-3);
    }

    #[test]
    fn negative_size_keeps_rounded_corners() {
        let dragged = Rect::new(90.0, 70.0, -80.0, -60.0);
        let pts = rounded_rect_points(dragged, 12.0);
        assert_eq!(pts, rounded_rect_points(Rect::new(10.0, 10.0, 80.0, 60.0), 12.0));
        assert_eq!(pts.len(), 4 * (corner_segments(12.0) + 1));
    }

    #[test]
    fn zero_radius_degenerates_to_corners() {
        let rect = Rect::new(0.0, 0.0, 20.0, 10.0);
        let pts = rounded_rect_points(rect, 0.0);
        let corners = rect.corners();
        assert_eq!(pts.len(), 4 * 9);
        for p in pts {
            assert!(corners.iter().any(|c| (*c - p).length() < 1e-4), "{p:?}");
        }
    }

    #[test]
    fn filled_vertex_count() {
        let mut l = list();
        l.filled_rounded_rect(Rect::new(0.0, 0.0, 200.0, 100.0), 16.0, Color::white());
        let segments = corner_segments(16.0);
        assert_eq!(l.vertices().len(), 3 * 4 * (segments + 1));
        assert_eq!(l.commands().len(), 1);
        assert_eq!(l.commands()[0].topology, Topology::Triangles);
    }

    #[test]
    fn alias_matches_filled() {
        let rect = Rect::new(5.0, 5.0, 50.0, 30.0);
        let mut a = list();
        a.rounded_rect(rect, 6.0, Color::white());
        let mut b = list();
        b.filled_rounded_rect(rect, 6.0, Color::white());
        assert_eq!(a.vertices(), b.vertices());
    }

    #[test]
    fn outline_is_closed_strip() {
        let mut l = list();
        l.rounded_rect_outline(Rect::new(0.0, 0.0, 100.0, 100.0), 8.0, Color::white());
        let v = l.vertices();
        assert_eq!(v.len(), 4 * (corner_segments(8.0) + 1) + 1);
        assert_eq!(v[0], v[v.len() - 1]);
        assert_eq!(l.commands()[0].topology, Topology::LineStrip);
    }
}
