//! Delaunay triangulation of 2D points with the incremental Bowyer-Watson algorithm.

mod cavity;
mod circumcenter;
mod error;
mod primitives;
mod super_triangle;
mod triangle;
mod triangulation;

pub use cavity::{extract_boundary, find_bad_triangles, Circumscribed};
pub use circumcenter::{circumcenter, circumcircle, circumradius};
pub use error::{Degeneracy, TriangulationError};
pub use primitives::{
    convex_hull, distance, midpoint, perpendicular_slope, polygon_area, slope, Circle, Point,
    Segment, SlopeType,
};
pub use triangle::Triangle;
pub use triangulation::{DelaunayTriangulation, TriangulationConfig, Triangulator, COORDINATE_LIMIT};

/// Compute the Delaunay triangulation of `points` with the default [`TriangulationConfig`].
pub fn triangulate(points: &[Point]) -> Result<DelaunayTriangulation, TriangulationError> {
    Triangulator::default().triangulate(points)
}
