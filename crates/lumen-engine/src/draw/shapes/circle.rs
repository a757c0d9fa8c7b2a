use core::f32::consts::TAU;

use crate::coords::Vec2;
use crate::draw::{DrawList, Topology};
use crate::paint::Color;

use super::{closed_edges, fan};

pub const MIN_SEGMENTS: u32 = 8;
pub const MAX_SEGMENTS: u32 = 128;

#[inline]
pub fn clamp_segments(segments: u32) -> u32 {
    segments.clamp(MIN_SEGMENTS, MAX_SEGMENTS)
}

/// Points evenly spaced around the circumference, starting at +X.
///
/// `segments` is clamped to `[8, 128]`; one point per segment.
pub fn circle_points(center: Vec2, radius: f32, segments: u32) -> Vec<Vec2> {
    let n = clamp_segments(segments);
    let step = TAU / n as f32;
    (0..n)
        .map(|i| center + Vec2::from_angle(i as f32 * step) * radius)
        .collect()
}

impl DrawList {
    /// Records a circle outline: two vertices per segment.
    pub fn circle(&mut self, center: Vec2, radius: f32, segments: u32, color: Color) {
        let ring = circle_points(center, radius, segments);
        self.submit_solid(Topology::Lines, &closed_edges(&ring), color);
    }

    /// Records a filled circle as a fan from the center: three vertices per segment.
    pub fn filled_circle(&mut self, center: Vec2, radius: f32, segments: u32, color: Color) {
        let ring = circle_points(center, radius, segments);
        self.submit_solid(Topology::Triangles, &fan(center, &ring), color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Viewport;

    fn list() -> DrawList {
        DrawList::new(Viewport::new(200.0, 200.0))
    }

    fn stroked_count(segments: u32) -> usize {
        let mut l = list();
        l.circle(Vec2::new(100.0, 100.0), 50.0, segments, Color::white());
        l.vertices().len()
    }

    fn filled_count(segments: u32) -> usize {
        let mut l = list();
        l.filled_circle(Vec2::new(100.0, 100.0), 50.0, segments, Color::white());
        l.vertices().len()
    }

    /// Largest gap between the ideal circle and the polygon, measured at edge midpoints.
    fn max_radial_deviation(radius: f32, segments: u32) -> f32 {
        let ring = circle_points(Vec2::zero(), radius, segments);
        let n = ring.len();
        (0..n)
            .map(|i| radius - ((ring[i] + ring[(i + 1) % n]) * 0.5).length())
            .fold(0.0, f32::max)
    }

    #[test]
    fn vertex_count_per_segment() {
        for s in [8, 9, 16, 64, 128] {
            assert_eq!(stroked_count(s), 2 * s as usize);
            assert_eq!(filled_count(s), 3 * s as usize);
        }
    }

    #[test]
    fn segments_are_clamped() {
        assert_eq!(stroked_count(200), stroked_count(128));
        assert_eq!(stroked_count(2), stroked_count(8));
        assert_eq!(filled_count(200), filled_count(128));
        assert_eq!(filled_count(0), filled_count(8));
    }

    #[test]
    fn deviation_shrinks_with_segments() {
        let mut prev = f32::MAX;
        for s in [8, 16, 32, 64, 128] {
            let d = max_radial_deviation(100.0, s);
            assert!(d < prev, "segments {s}: {d} >= {prev}");
            prev = d;
        }
    }

    #[test]
    fn points_lie_on_circle() {
        let c = Vec2::new(10.0, -4.0);
        for p in circle_points(c, 7.0, 32) {
            assert!(((p - c).length() - 7.0).abs() < 1e-4);
        }
    }

    #[test]
    fn topologies() {
        let mut l = list();
        l.circle(Vec2::zero(), 1.0, 8, Color::white());
        l.filled_circle(Vec2::zero(), 1.0, 8, Color::white());
        assert_eq!(l.commands()[0].topology, Topology::Lines);
        assert!(l.commands()[0].anti_alias);
        assert_eq!(l.commands()[1].topology, Topology::Triangles);
        assert!(!l.commands()[1].anti_alias);
    }

    #[test]
    fn filled_fan_starts_at_center() {
        let mut l = list();
        l.filled_circle(Vec2::new(100.0, 100.0), 20.0, 8, Color::white());
        for tri in l.vertices().chunks(3) {
            assert_eq!(tri[0].position, [0.0, 0.0, 0.0]);
        }
    }
}
