use crate::coords::Vec2;
use crate::draw::{DrawList, Topology};
use crate::paint::Color;

use super::{closed_edges, fan};

/// Arithmetic mean of the points, or `None` for an empty slice.
pub fn centroid(points: &[Vec2]) -> Option<Vec2> {
    if points.is_empty() {
        return None;
    }
    let sum = points.iter().fold(Vec2::zero(), |acc, &p| acc + p);
    Some(sum / points.len() as f32)
}

/// Triangle list fanning a polygon from its centroid. `None` below three points.
pub fn polygon_fan(points: &[Vec2]) -> Option<Vec<Vec2>> {
    if points.len() < 3 {
        return None;
    }
    centroid(points).map(|c| fan(c, points))
}

impl DrawList {
    /// Records a closed polygon outline, one segment per edge. Needs at least three points.
    pub fn polygon(&mut self, points: &[Vec2], color: Color) {
        if points.len() < 3 {
            return;
        }
        self.submit_solid(Topology::Lines, &closed_edges(points), color);
    }

    /// Records a polygon filled as a fan from its centroid. Needs at least three points.
    ///
    /// Exact for convex and star-shaped (around the centroid) polygons.
    pub fn filled_polygon(&mut self, points: &[Vec2], color: Color) {
        if let Some(tris) = polygon_fan(points) {
            self.submit_solid(Topology::Triangles, &tris, color);
        }
    }

    /// Records a triangle outline as one line command per edge.
    pub fn triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Color) {
        self.line(a, b, color);
        self.line(b, c, color);
        self.line(c, a, color);
    }

    /// Records a solid triangle (3 vertices).
    #[inline]
    pub fn filled_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Color) {
        self.submit_solid(Topology::Triangles, &[a, b, c], color);
    }

    /// Records caller-ordered points as one triangle strip. Needs at least three points.
    pub fn triangle_strip(&mut self, points: &[Vec2], color: Color) {
        if points.len() < 3 {
            return;
        }
        self.submit_solid(Topology::TriangleStrip, points, color);
    }
}
