use thiserror::Error;

use crate::Point;

/// Reasons three points fail to define a circumcircle.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum Degeneracy {
    #[error("points {0} and {1} coincide")]
    CoincidentPoints(Point, Point),

    #[error("points {0}, {1} and {2} are collinear")]
    Collinear(Point, Point, Point),

    #[error("perpendicular bisectors of {0}, {1} and {2} do not intersect")]
    ParallelBisectors(Point, Point, Point),

    #[error("all {0} input points are collinear")]
    CollinearInput(usize),
}

/// Errors produced by a triangulation run. All of them abort the run; no
/// partial triangulation is ever returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TriangulationError {
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(#[from] Degeneracy),

    #[error("at least 3 points are required, found {found}")]
    InsufficientInput { found: usize },

    #[error("duplicate input point {point}")]
    DuplicatePoint { point: Point },

    #[error("input point {index} has a non-finite coordinate: {point}")]
    NonFiniteCoordinate { index: usize, point: Point },

    #[error("input point {index} is outside the supported range of +/-{limit:e}: {point}")]
    CoordinateOutOfRange {
        index: usize,
        point: Point,
        limit: f64,
    },

    #[error("triangles cover an area of {covered}, the convex hull of the input has {expected}")]
    IncompleteTriangulation { covered: f64, expected: f64 },
}
