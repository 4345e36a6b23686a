use crate::{
    error::Degeneracy,
    primitives::{distance, orientation, perpendicular_slope, Circle, Point, Segment, SlopeType},
};

/// A perpendicular bisector of a segment.
#[derive(Debug, Clone, Copy)]
enum Bisector {
    /// `y = m * x + b`
    Line { m: f64, b: f64 },
    /// `y = c`, the bisector of a vertical segment.
    Horizontal(f64),
    /// `x = c`, the bisector of a horizontal segment.
    Vertical(f64),
}

impl Bisector {
    fn of(segment: &Segment) -> Self {
        let mid = segment.midpoint();
        match segment.slope_type() {
            SlopeType::Infinite => Bisector::Horizontal(mid.y),
            SlopeType::Zero => Bisector::Vertical(mid.x),
            SlopeType::Normal => {
                let m = perpendicular_slope(segment.slope());
                Bisector::Line {
                    m,
                    b: mid.y - m * mid.x,
                }
            }
        }
    }
}

/// Returns the center of the circle through three points.
///
/// The perpendicular bisectors of `p1 - p2` and `p2 - p3` are intersected,
/// branching on the slope class of each segment so that no division by a zero
/// slope ever happens. Coincident or collinear points have no circumcircle and
/// are reported as a [`Degeneracy`].
pub fn circumcenter(p1: Point, p2: Point, p3: Point) -> Result<Point, Degeneracy> {
    for (a, b) in [(p1, p2), (p2, p3), (p3, p1)] {
        if a == b {
            return Err(Degeneracy::CoincidentPoints(a, b));
        }
    }

    if orientation(p1, p2, p3) == 0.0 {
        return Err(Degeneracy::Collinear(p1, p2, p3));
    }

    let first = Bisector::of(&Segment::new(p1, p2));
    let second = Bisector::of(&Segment::new(p2, p3));

    intersect(first, second).ok_or(Degeneracy::ParallelBisectors(p1, p2, p3))
}

/// Returns the point where two bisectors cross, or `None` when they are
/// parallel or the crossing is too far away to represent.
fn intersect(first: Bisector, second: Bisector) -> Option<Point> {
    let center = match (first, second) {
        (Bisector::Line { m: m1, b: b1 }, Bisector::Line { m: m2, b: b2 }) => {
            if m1 == m2 {
                return None;
            }
            // m1 x + b1 = m2 x + b2
            let x = (b2 - b1) / (m1 - m2);
            Point::new(x, m2 * x + b2)
        }
        (Bisector::Horizontal(y), Bisector::Vertical(x))
        | (Bisector::Vertical(x), Bisector::Horizontal(y)) => Point::new(x, y),
        (Bisector::Horizontal(y), Bisector::Line { m, b })
        | (Bisector::Line { m, b }, Bisector::Horizontal(y)) => Point::new((y - b) / m, y),
        (Bisector::Vertical(x), Bisector::Line { m, b })
        | (Bisector::Line { m, b }, Bisector::Vertical(x)) => Point::new(x, m * x + b),
        (Bisector::Horizontal(_), Bisector::Horizontal(_))
        | (Bisector::Vertical(_), Bisector::Vertical(_)) => return None,
    };

    center.is_finite().then_some(center)
}

pub fn circumradius(center: Point, p1: Point) -> f64 {
    distance(center, p1)
}

/// Returns the circle passing through all three points.
pub fn circumcircle(p1: Point, p2: Point, p3: Point) -> Result<Circle, Degeneracy> {
    let center = circumcenter(p1, p2, p3)?;
    Ok(Circle::new(center, circumradius(center, p1)))
}

// =============================================================================

#[cfg(test)]
mod test {
    use glam::{dvec2, DVec2};
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use rand_distr::StandardNormal;

    use super::*;

    fn reference_center(a: Point, b: Point, c: Point) -> Point {
        let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
        let (a2, b2, c2) = (a.length_squared(), b.length_squared(), c.length_squared());
        dvec2(
            (a2 * (b.y - c.y) + b2 * (c.y - a.y) + c2 * (a.y - b.y)) / d,
            (a2 * (c.x - b.x) + b2 * (a.x - c.x) + c2 * (b.x - a.x)) / d,
        )
    }

    fn assert_equidistant(p1: Point, p2: Point, p3: Point) {
        let circle = circumcircle(p1, p2, p3).unwrap();

        for p in [p1, p2, p3] {
            let err = (distance(circle.center, p) - circle.radius).abs();
            assert!(err < 1e-9, "{p} is {err} off the circle {circle:?}");
        }

        let expected = reference_center(p1, p2, p3);
        assert!(
            circle.center.abs_diff_eq(expected, 1e-9),
            "center {} vs {}",
            circle.center,
            expected
        );
    }

    #[test]
    fn test_every_slope_branch() {
        let cases = [
            // normal / normal
            [dvec2(0.0, 0.0), dvec2(1.0, 2.0), dvec2(3.0, 1.0)],
            // infinite / zero
            [dvec2(0.0, 0.0), dvec2(0.0, 2.0), dvec2(2.0, 2.0)],
            // zero / infinite
            [dvec2(0.0, 0.0), dvec2(2.0, 0.0), dvec2(2.0, 2.0)],
            // infinite / normal
            [dvec2(0.0, 0.0), dvec2(0.0, 2.0), dvec2(3.0, 5.0)],
            // zero / normal
            [dvec2(0.0, 0.0), dvec2(2.0, 0.0), dvec2(3.0, 3.0)],
            // normal / infinite
            [dvec2(0.0, 0.0), dvec2(2.0, 1.0), dvec2(2.0, 3.0)],
            // normal / zero
            [dvec2(0.0, 0.0), dvec2(1.0, 2.0), dvec2(3.0, 2.0)],
        ];

        for [p1, p2, p3] in cases {
            assert_equidistant(p1, p2, p3);
        }
    }

    #[test]
    fn test_right_triangle_center_is_hypotenuse_midpoint() {
        let center = circumcenter(dvec2(0.0, 0.0), dvec2(2.0, 0.0), dvec2(2.0, 2.0)).unwrap();
        assert_eq!(center, dvec2(1.0, 1.0));

        let center = circumcenter(dvec2(0.0, 0.0), dvec2(0.0, 4.0), dvec2(6.0, 4.0)).unwrap();
        assert_eq!(center, dvec2(3.0, 2.0));
    }

    #[test]
    fn test_random_circles() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let center = dvec2(rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0));
            let radius: f64 = rng.gen_range(1.0..100.0);

            let [p1, p2, p3] = [0, 1, 2].map(|_| {
                let mut dir = dvec2(rng.sample(StandardNormal), rng.sample(StandardNormal));
                if dir.length() == 0.0 {
                    dir = DVec2::X;
                }
                center + dir.normalize() * radius
            });

            let circle = circumcircle(p1, p2, p3).unwrap();
            assert!(circle.center.abs_diff_eq(center, 1e-4));
            assert!((circle.radius - radius).abs() < 1e-4);
        }
    }

    #[test]
    fn test_degenerate_inputs() {
        let a = dvec2(1.0, 1.0);

        assert_eq!(
            circumcenter(a, a, dvec2(2.0, 3.0)),
            Err(Degeneracy::CoincidentPoints(a, a))
        );
        assert!(matches!(
            circumcenter(a, dvec2(2.0, 3.0), a),
            Err(Degeneracy::CoincidentPoints(..))
        ));

        // horizontal, vertical and sloped lines
        for [p1, p2, p3] in [
            [dvec2(0.0, 0.0), dvec2(1.0, 0.0), dvec2(2.0, 0.0)],
            [dvec2(0.0, 0.0), dvec2(0.0, 1.0), dvec2(0.0, 5.0)],
            [dvec2(0.0, 0.0), dvec2(1.0, 3.0), dvec2(2.0, 6.0)],
        ] {
            assert_eq!(
                circumcenter(p1, p2, p3),
                Err(Degeneracy::Collinear(p1, p2, p3))
            );
        }
    }

    #[test]
    fn test_bisector_intersections() {
        // the crossing of two sloped bisectors
        let crossing = intersect(
            Bisector::Line { m: 1.0, b: 0.0 },
            Bisector::Line { m: -1.0, b: 2.0 },
        );
        assert_eq!(crossing, Some(dvec2(1.0, 1.0)));
        assert_eq!(
            intersect(Bisector::Line { m: 2.0, b: 0.0 }, Bisector::Horizontal(4.0)),
            Some(dvec2(2.0, 4.0))
        );
        assert_eq!(
            intersect(Bisector::Vertical(3.0), Bisector::Line { m: 2.0, b: 1.0 }),
            Some(dvec2(3.0, 7.0))
        );

        // parallel bisectors never meet
        for (first, second) in [
            (
                Bisector::Line { m: 0.5, b: 0.0 },
                Bisector::Line { m: 0.5, b: 3.0 },
            ),
            (Bisector::Horizontal(1.0), Bisector::Horizontal(2.0)),
            (Bisector::Vertical(1.0), Bisector::Vertical(1.0)),
        ] {
            assert_eq!(intersect(first, second), None, "{first:?} {second:?}");
        }

        // nearly parallel, the crossing overflows
        let far = intersect(
            Bisector::Line { m: 1e-300, b: 1e10 },
            Bisector::Line { m: -1e-300, b: -1e10 },
        );
        assert_eq!(far, None);
    }

    #[test]
    fn test_unrepresentable_center() {
        // bisectors so close to parallel that the center overflows
        let (p1, p2, p3) = (dvec2(0.0, 0.0), dvec2(1e300, 1e-300), dvec2(2e300, 0.0));
        assert!(matches!(
            circumcenter(p1, p2, p3),
            Err(Degeneracy::ParallelBisectors(..))
        ));
    }
}
