use std::ops::{Add, Mul, Sub};

use crate::{
    cavity::Circumscribed,
    primitives::{Point, Segment},
};

/// Directions from the center of the input bounds towards the three corners,
/// in clockwise order.
const DIRECTIONS: [Point; 3] = [
    Point::new(-2.0, -1.0),
    Point::new(0.0, 2.0),
    Point::new(2.0, -1.0),
];

/// Stand-ins for the corners inside segments and vertex lists. Input points
/// are finite, so none of them can compare equal to a corner.
const CORNERS: [Point; 3] = [
    Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
    Point::new(0.0, f64::INFINITY),
    Point::new(f64::INFINITY, f64::NEG_INFINITY),
];

/// A triangle enclosing every input point, with its corners pushed out to
/// infinity along fixed directions from the center of the input bounds.
///
/// Corner `k` sits at `center + R * DIRECTIONS[k]`. Predicates on triangles
/// touching a corner are polynomials in `R` and are evaluated in the limit
/// `R -> inf`, so no finite input is ever too close to the hull for its
/// triangles to survive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SuperTriangle {
    center: Point,
}

impl SuperTriangle {
    pub(crate) fn new(center: Point) -> Self {
        Self { center }
    }

    #[cfg(test)]
    pub(crate) fn corners(&self) -> [Point; 3] {
        CORNERS
    }

    pub(crate) fn is_corner(point: Point) -> bool {
        !point.is_finite()
    }

    /// The seed triangle, over the three corners.
    pub(crate) fn seed(&self) -> OuterTriangle {
        self.outer(CORNERS[0], CORNERS[1], CORNERS[2])
    }

    /// Create a triangle over `p`, `q` and `r`, any of which may be a corner.
    pub(crate) fn outer(&self, p: Point, q: Point, r: Point) -> OuterTriangle {
        let lifted = [p, q, r].map(|v| self.lift(v));

        let [(x1, y1), (x2, y2), (x3, y3)] = lifted
            .map(|(base, dir)| (Poly::linear(base.x, dir.x), Poly::linear(base.y, dir.y)));
        let winding = ((x2 - x1) * (y3 - y1) - (y2 - y1) * (x3 - x1)).sign_at_infinity();

        OuterTriangle {
            segments: [Segment::new(p, q), Segment::new(q, r), Segment::new(r, p)],
            lifted,
            winding,
        }
    }

    /// Split a vertex into its finite part and its direction to infinity.
    fn lift(&self, point: Point) -> (Point, Point) {
        match CORNERS.iter().position(|&c| c == point) {
            Some(k) => (self.center, DIRECTIONS[k]),
            None => (point, Point::ZERO),
        }
    }
}

// =============================================================================

/// A triangle with at least one corner of the [`SuperTriangle`] among its
/// vertices.
#[derive(Debug, Clone, Copy)]
pub(crate) struct OuterTriangle {
    segments: [Segment; 3],
    lifted: [(Point, Point); 3],
    winding: f64,
}

impl OuterTriangle {
    #[cfg(test)]
    pub(crate) fn vertices(&self) -> [Point; 3] {
        self.segments.map(|s| s.a)
    }
}

impl Circumscribed for OuterTriangle {
    fn segments(&self) -> &[Segment; 3] {
        &self.segments
    }

    fn in_circumcircle(&self, point: Point) -> bool {
        let [(x1, y1, w1), (x2, y2, w2), (x3, y3, w3)] = self.lifted.map(|(base, dir)| {
            let x = Poly::linear(base.x - point.x, dir.x);
            let y = Poly::linear(base.y - point.y, dir.y);
            (x, y, x * x + y * y)
        });

        let det =
            x1 * (y2 * w3 - y3 * w2) - y1 * (x2 * w3 - x3 * w2) + w1 * (x2 * y3 - x3 * y2);

        det.sign_at_infinity() * self.winding > 0.0
    }
}

// =============================================================================

/// Polynomial in `R` up to degree 4, lowest coefficient first. Products are
/// truncated past degree 4, which the incircle determinant never reaches.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Poly([f64; 5]);

impl Poly {
    fn linear(constant: f64, slope: f64) -> Self {
        Poly([constant, slope, 0.0, 0.0, 0.0])
    }

    /// Sign of the polynomial for large enough `R`: the sign of its highest
    /// non-zero coefficient.
    fn sign_at_infinity(&self) -> f64 {
        self.0
            .iter()
            .rev()
            .find(|c| **c != 0.0)
            .map_or(0.0, |c| c.signum())
    }
}

impl Add for Poly {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Poly(std::array::from_fn(|i| self.0[i] + rhs.0[i]))
    }
}

impl Sub for Poly {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Poly(std::array::from_fn(|i| self.0[i] - rhs.0[i]))
    }
}

impl Mul for Poly {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut out = [0.0; 5];
        for (i, a) in self.0.iter().enumerate() {
            for (j, b) in rhs.0.iter().enumerate().take(5 - i) {
                out[i + j] += a * b;
            }
        }
        Poly(out)
    }
}

// =============================================================================
