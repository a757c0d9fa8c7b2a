//! Shape tessellation.
//!
//! Each file holds the pure point generators for one shape family plus the
//! matching `DrawList` methods. Generators work in pixels and never touch the
//! list or the GPU, so they can be tested by exact output.

pub mod bezier;
pub mod circle;
pub mod gradient;
pub mod line;
pub mod polygon;
pub mod rect;
pub mod rounded_rect;

use crate::coords::Vec2;

/// Triangle list fanning `ring` around `center`, closing back to the first point.
///
/// Emits three points per ring point.
pub fn fan(center: Vec2, ring: &[Vec2]) -> Vec<Vec2> {
    let n = ring.len();
    let mut out = Vec::with_capacity(n * 3);
    for i in 0..n {
        out.extend_from_slice(&[center, ring[i], ring[(i + 1) % n]]);
    }
    out
}

/// Line list tracing a closed loop through `ring`, last point wrapping to the first.
pub fn closed_edges(ring: &[Vec2]) -> Vec<Vec2> {
    let n = ring.len();
    let mut out = Vec::with_capacity(n * 2);
    for i in 0..n {
        out.extend_from_slice(&[ring[i], ring[(i + 1) % n]]);
    }
    out
}

/// Line list connecting consecutive points of an open path.
pub fn open_edges(path: &[Vec2]) -> Vec<Vec2> {
    path.windows(2).flat_map(|w| [w[0], w[1]]).collect()
}
