#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::{
    primitives::{Point, Segment},
    triangle::Triangle,
};

/// A triangle the cavity search can test against an inserted point.
pub trait Circumscribed {
    /// The three edges of the triangle.
    fn segments(&self) -> &[Segment; 3];

    /// Check if `point` is strictly inside the circumcircle.
    fn in_circumcircle(&self, point: Point) -> bool;
}

impl Circumscribed for Triangle {
    fn segments(&self) -> &[Segment; 3] {
        Triangle::segments(self)
    }

    fn in_circumcircle(&self, point: Point) -> bool {
        Triangle::in_circumcircle(self, point)
    }
}

/// Returns the indices, in ascending order, of every triangle whose
/// circumcircle strictly contains `point`.
#[cfg(not(feature = "rayon"))]
pub fn find_bad_triangles<T: Circumscribed + Sync>(triangles: &[T], point: Point) -> Vec<usize> {
    find_bad_triangles_sequential(triangles, point)
}

/// Returns the indices, in ascending order, of every triangle whose
/// circumcircle strictly contains `point`.
#[cfg(feature = "rayon")]
pub fn find_bad_triangles<T: Circumscribed + Sync>(triangles: &[T], point: Point) -> Vec<usize> {
    triangles
        .par_iter()
        .enumerate()
        .filter(|(_, t)| t.in_circumcircle(point))
        .map(|(i, _)| i)
        .collect()
}

#[cfg_attr(feature = "rayon", allow(dead_code))]
fn find_bad_triangles_sequential<T: Circumscribed>(triangles: &[T], point: Point) -> Vec<usize> {
    triangles
        .iter()
        .enumerate()
        .filter(|(_, t)| t.in_circumcircle(point))
        .map(|(i, _)| i)
        .collect()
}

/// Find the boundary polygon of a cavity: every edge of a bad triangle that no
/// other bad triangle shares. Edges are returned once each, in the order they
/// are met.
pub fn extract_boundary<T: Circumscribed>(bad_triangles: &[&T]) -> Vec<Segment> {
    let mut boundary = Vec::new();

    for (i, triangle) in bad_triangles.iter().enumerate() {
        for segment in triangle.segments() {
            let is_shared = bad_triangles
                .iter()
                .enumerate()
                .any(|(j, other)| i != j && other.segments().contains(segment));

            if !is_shared {
                boundary.push(*segment);
            }
        }
    }

    boundary
}

// =============================================================================
