use std::cmp::Ordering;

use glam::DVec2;
use itertools::Itertools;

/// A 2D point. Equality is exact coordinate equality.
pub type Point = DVec2;

/// Euclidean distance between two points.
pub fn distance(p1: Point, p2: Point) -> f64 {
    p1.distance(p2)
}

pub fn midpoint(p1: Point, p2: Point) -> Point {
    (p1 + p2) / 2.0
}

/// Slope `dy / dx` of the line through two points. Infinite (or NaN) for a
/// vertical pair; callers classify first with [`SlopeType`].
pub fn slope(p1: Point, p2: Point) -> f64 {
    (p2.y - p1.y) / (p2.x - p1.x)
}

/// Slope of a line perpendicular to one with slope `m`. Undefined for `m == 0`.
pub fn perpendicular_slope(m: f64) -> f64 {
    -1.0 / m
}

/// Lexicographic (x, then y) ordering of points. `-0.0` and `0.0` compare equal.
pub(crate) fn lexicographic(p1: &Point, p2: &Point) -> Ordering {
    (p1.x + 0.0)
        .total_cmp(&(p2.x + 0.0))
        .then_with(|| (p1.y + 0.0).total_cmp(&(p2.y + 0.0)))
}

/// Signed doubled area of the triangle `a, b, c`. Positive when counter-clockwise.
pub(crate) fn orientation(a: Point, b: Point, c: Point) -> f64 {
    (b - a).perp_dot(c - a)
}

/// Returns the corners of the convex hull of `points`, counter-clockwise from
/// the lexicographically smallest one. Points lying on a hull edge are left
/// out, so a collinear set yields at most its two extreme points.
pub fn convex_hull(points: &[Point]) -> Vec<Point> {
    let sorted: Vec<Point> = points
        .iter()
        .copied()
        .sorted_by(lexicographic)
        .dedup()
        .collect();
    if sorted.len() < 3 {
        return sorted;
    }

    // monotone chain, lower half then upper half
    let mut hull: Vec<Point> = Vec::with_capacity(sorted.len() + 1);
    for pass in [sorted.clone(), sorted.into_iter().rev().collect()] {
        let start = hull.len();
        for p in pass {
            while hull.len() >= start + 2
                && orientation(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0
            {
                hull.pop();
            }
            hull.push(p);
        }
        hull.pop();
    }
    hull
}

/// Signed area of a simple polygon, positive when wound counter-clockwise.
pub fn polygon_area(polygon: &[Point]) -> f64 {
    let Some((&first, rest)) = polygon.split_first() else {
        return 0.0;
    };
    rest.iter()
        .tuple_windows()
        .map(|(&b, &c)| orientation(first, b, c))
        .sum::<f64>()
        / 2.0
}

// =============================================================================

/// Classification of a segment's slope, used to pick a circumcenter branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlopeType {
    Normal,
    /// Horizontal segment.
    Zero,
    /// Vertical segment (this includes zero-length segments).
    Infinite,
}

/// An undirected edge between two points.
#[derive(Debug, Clone, Copy)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    pub fn midpoint(&self) -> Point {
        midpoint(self.a, self.b)
    }

    pub fn slope(&self) -> f64 {
        slope(self.a, self.b)
    }

    pub fn length(&self) -> f64 {
        distance(self.a, self.b)
    }

    pub fn slope_type(&self) -> SlopeType {
        let delta = self.b - self.a;
        if delta.x == 0.0 {
            SlopeType::Infinite
        } else if delta.y == 0.0 {
            SlopeType::Zero
        } else {
            SlopeType::Normal
        }
    }

    /// Check if `point` is one of the endpoints of this [`Segment`].
    pub fn has_endpoint(&self, point: Point) -> bool {
        self.a == point || self.b == point
    }

    /// Returns this [`Segment`] with its endpoints in lexicographic order.
    pub fn canonical(&self) -> Self {
        match lexicographic(&self.a, &self.b) {
            Ordering::Greater => Self::new(self.b, self.a),
            _ => *self,
        }
    }

    pub(crate) fn cmp_canonical(&self, other: &Self) -> Ordering {
        let (lhs, rhs) = (self.canonical(), other.canonical());
        lexicographic(&lhs.a, &rhs.a).then_with(|| lexicographic(&lhs.b, &rhs.b))
    }
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }
}

// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Strict containment: a point exactly on the circle is not contained.
    pub fn contains(&self, point: Point) -> bool {
        distance(self.center, point) < self.radius
    }
}

// =============================================================================
