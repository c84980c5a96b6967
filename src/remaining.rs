//! Trimming the route line to the part still ahead.
//!
//! Matches the position to the nearest route *vertex*, not the nearest point
//! on a segment. With sparse vertices the trim point can visibly jump.

use crate::geo::{Coordinate, planar_distance_sq};

/// Index of the geometry vertex closest to `position`. Ties go to the earliest.
pub fn nearest_vertex_index(geometry: &[Coordinate], position: &Coordinate) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (i, vertex) in geometry.iter().enumerate() {
        let d = planar_distance_sq(vertex, position);
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((i, d)),
        }
    }

    best.map(|(i, _)| i)
}

/// The suffix of `geometry` starting at the vertex nearest to `position`.
pub fn compute_remaining<'a>(geometry: &'a [Coordinate], position: &Coordinate) -> &'a [Coordinate] {
    match nearest_vertex_index(geometry, position) {
        Some(i) => &geometry[i..],
        None => &[],
    }
}
