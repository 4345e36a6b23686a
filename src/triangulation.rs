use itertools::Itertools;
use tracing::{debug, trace, warn};

use crate::{
    cavity::{extract_boundary, find_bad_triangles, Circumscribed},
    error::{Degeneracy, TriangulationError},
    primitives::{convex_hull, lexicographic, polygon_area, Point, Segment},
    super_triangle::{OuterTriangle, SuperTriangle},
    triangle::Triangle,
};

/// Largest absolute coordinate accepted as input. The incircle test takes
/// products of four coordinate differences, which must stay finite.
pub const COORDINATE_LIMIT: f64 = 1e75;

/// Settings for a triangulation run.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TriangulationConfig {
    /// Fail with [`TriangulationError::InsufficientInput`] on fewer than 3
    /// points instead of returning an empty triangulation.
    pub reject_insufficient_input: bool,
}

impl TriangulationConfig {
    pub fn with_reject_insufficient_input(mut self, reject: bool) -> Self {
        self.reject_insufficient_input = reject;
        self
    }
}

// =============================================================================

/// Axis aligned bounds of a point set.
#[derive(Debug, Clone, Copy, PartialEq)]
struct BoundingBox {
    min: Point,
    max: Point,
}

impl BoundingBox {
    fn from_points(points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        Some(rest.iter().fold(
            Self {
                min: *first,
                max: *first,
            },
            |bb, p| Self {
                min: bb.min.min(*p),
                max: bb.max.max(*p),
            },
        ))
    }

    /// Build a triangle that strictly encloses these bounds.
    fn super_triangle(&self) -> SuperTriangle {
        SuperTriangle::new((self.min + self.max) / 2.0)
    }
}

// =============================================================================

/// A triangle of the triangulation in progress. Triangles touching a corner
/// of the super-triangle have no finite circumcircle and are tested in the
/// limit instead.
#[derive(Debug, Clone, Copy)]
enum Cell {
    Inner(Triangle),
    Outer(OuterTriangle),
}

impl Circumscribed for Cell {
    fn segments(&self) -> &[Segment; 3] {
        match self {
            Cell::Inner(t) => t.segments(),
            Cell::Outer(t) => t.segments(),
        }
    }

    fn in_circumcircle(&self, point: Point) -> bool {
        match self {
            Cell::Inner(t) => t.in_circumcircle(point),
            Cell::Outer(t) => t.in_circumcircle(point),
        }
    }
}

// =============================================================================

#[derive(Debug)]
struct TriangulationProcess {
    super_triangle: SuperTriangle,
    cells: Vec<Cell>,
    bad_cells: Vec<usize>,
    boundary: Vec<Segment>,
}

impl TriangulationProcess {
    fn new(super_triangle: SuperTriangle) -> Self {
        Self {
            super_triangle,
            cells: vec![Cell::Outer(super_triangle.seed())],
            bad_cells: Default::default(),
            boundary: Default::default(),
        }
    }

    fn add_points<T: Iterator<Item = Point>>(&mut self, from: T) -> Result<(), Degeneracy> {
        for p in from {
            self.add_point(p)?;
        }
        Ok(())
    }

    fn add_point(&mut self, point: Point) -> Result<(), Degeneracy> {
        self.bad_cells = find_bad_triangles(&self.cells, point);

        self.find_boundary_polygon();

        // build the fan first so a failure leaves the triangle set untouched
        let new_cells = self
            .boundary
            .iter()
            .map(|segment| self.create_cell(segment, point))
            .collect::<Result<Vec<_>, _>>()?;

        trace!(
            %point,
            bad = self.bad_cells.len(),
            boundary = self.boundary.len(),
            "inserting point"
        );

        self.remove_bad_cells();
        self.cells.extend(new_cells);

        Ok(())
    }

    fn create_cell(&self, segment: &Segment, point: Point) -> Result<Cell, Degeneracy> {
        if SuperTriangle::is_corner(segment.a) || SuperTriangle::is_corner(segment.b) {
            return Ok(Cell::Outer(self.super_triangle.outer(segment.a, segment.b, point)));
        }
        Triangle::from_segment(segment, point).map(Cell::Inner)
    }

    fn find_boundary_polygon(&mut self) {
        let bad: Vec<&Cell> = self.bad_cells.iter().map(|&i| &self.cells[i]).collect();

        self.boundary = extract_boundary(&bad);
    }

    /// Rebuild the triangle set from the triangles that are not bad.
    fn remove_bad_cells(&mut self) {
        let mut bad = self.bad_cells.iter().copied().peekable();

        self.cells = std::mem::take(&mut self.cells)
            .into_iter()
            .enumerate()
            .filter(|(i, _)| bad.next_if_eq(i).is_none())
            .map(|(_, t)| t)
            .collect();
    }

    /// Drop every triangle touching a corner of the super-triangle.
    fn finish(self) -> Vec<Triangle> {
        self.cells
            .into_iter()
            .filter_map(|cell| match cell {
                Cell::Inner(t) => Some(t.into_counter_clockwise()),
                Cell::Outer(_) => None,
            })
            .collect()
    }
}

// =============================================================================

/// Compute the Delaunay triangulation of a list of points.
#[derive(Debug, Clone, Default)]
pub struct Triangulator {
    config: TriangulationConfig,
}

impl Triangulator {
    pub fn new(config: TriangulationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TriangulationConfig {
        &self.config
    }

    /// Triangulate `points`, inserting them in the given order.
    ///
    /// Fewer than 3 points yield an empty triangulation, unless the config asks
    /// for them to be rejected. Points must be distinct, finite and within
    /// [`COORDINATE_LIMIT`].
    pub fn triangulate(
        &self,
        points: &[Point],
    ) -> Result<DelaunayTriangulation, TriangulationError> {
        validate_points(points)?;

        let Some(bounds) = BoundingBox::from_points(points).filter(|_| points.len() >= 3) else {
            if self.config.reject_insufficient_input {
                warn!(found = points.len(), "rejecting triangulation input");
                return Err(TriangulationError::InsufficientInput {
                    found: points.len(),
                });
            }
            debug!(points = points.len(), "too few points, nothing to triangulate");
            return Ok(DelaunayTriangulation {
                points: points.to_vec(),
                triangles: Vec::new(),
            });
        };

        debug!(points = points.len(), ?bounds, "starting triangulation");

        let mut process = TriangulationProcess::new(bounds.super_triangle());

        process.add_points(points.iter().copied())?;

        let triangles = process.finish();

        let hull = convex_hull(points);
        if hull.len() < 3 {
            warn!(points = points.len(), "all input points are collinear");
            return Err(Degeneracy::CollinearInput(points.len()).into());
        }
        check_coverage(&hull, &triangles)?;

        debug!(
            points = points.len(),
            triangles = triangles.len(),
            "triangulation finished"
        );

        Ok(DelaunayTriangulation {
            points: points.to_vec(),
            triangles,
        })
    }
}

fn validate_points(points: &[Point]) -> Result<(), TriangulationError> {
    if let Some((index, &point)) = points.iter().enumerate().find(|(_, p)| !p.is_finite()) {
        return Err(TriangulationError::NonFiniteCoordinate { index, point });
    }

    if let Some((index, &point)) = points
        .iter()
        .enumerate()
        .find(|(_, p)| p.abs().max_element() > COORDINATE_LIMIT)
    {
        return Err(TriangulationError::CoordinateOutOfRange {
            index,
            point,
            limit: COORDINATE_LIMIT,
        });
    }

    if let Some((&point, _)) = points
        .iter()
        .sorted_by(|a, b| lexicographic(a, b))
        .tuple_windows()
        .find(|(a, b)| a == b)
    {
        return Err(TriangulationError::DuplicatePoint { point });
    }

    Ok(())
}

/// Check that `triangles` tile the convex polygon `hull`, by comparing areas.
fn check_coverage(hull: &[Point], triangles: &[Triangle]) -> Result<(), TriangulationError> {
    let expected = polygon_area(hull);
    let covered: f64 = triangles.iter().map(Triangle::signed_area).sum();

    if (covered - expected).abs() > expected * 1e-9 {
        warn!(covered, expected, "triangles do not cover the convex hull");
        return Err(TriangulationError::IncompleteTriangulation { covered, expected });
    }
    Ok(())
}

// =============================================================================

/// The result of a triangulation run: the input points and the triangles over them.
#[derive(Debug, Clone)]
pub struct DelaunayTriangulation {
    points: Vec<Point>,
    triangles: Vec<Triangle>,
}

impl DelaunayTriangulation {
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Triangles, each wound counter-clockwise.
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn into_triangles(self) -> Vec<Triangle> {
        self.triangles
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Returns every edge of the triangulation once, sorted lexicographically.
    pub fn edges(&self) -> Vec<Segment> {
        self.triangles
            .iter()
            .flat_map(|t| t.segments().iter().map(Segment::canonical))
            .sorted_by(Segment::cmp_canonical)
            .dedup()
            .collect()
    }
}

// =============================================================================
