use crate::{
    circumcenter::circumcircle,
    error::Degeneracy,
    primitives::{lexicographic, orientation, Circle, Point, Segment},
};

/// A triangle, represented as 3x 2D points, its edges and its circumcircle.
#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    vertices: [Point; 3],
    segments: [Segment; 3],
    circumcircle: Circle,
}

impl Triangle {
    /// Create a [`Triangle`] over `p`, `q` and `r`, computing its circumcircle.
    pub fn new(p: Point, q: Point, r: Point) -> Result<Self, Degeneracy> {
        Ok(Self {
            vertices: [p, q, r],
            segments: [Segment::new(p, q), Segment::new(q, r), Segment::new(r, p)],
            circumcircle: circumcircle(p, q, r)?,
        })
    }

    /// Create a [`Triangle`] joining both ends of `segment` to `point`.
    pub fn from_segment(segment: &Segment, point: Point) -> Result<Self, Degeneracy> {
        Self::new(segment.a, segment.b, point)
    }

    pub fn vertices(&self) -> [Point; 3] {
        self.vertices
    }

    /// The edges `p - q`, `q - r` and `r - p`.
    pub fn segments(&self) -> &[Segment; 3] {
        &self.segments
    }

    pub fn circumcircle(&self) -> &Circle {
        &self.circumcircle
    }

    /// Check if a point is strictly inside the circumcircle of this [`Triangle`].
    pub fn in_circumcircle(&self, point: Point) -> bool {
        self.circumcircle.contains(point)
    }

    pub fn has_vertex(&self, point: Point) -> bool {
        self.vertices.contains(&point)
    }

    /// Check if any vertex of this [`Triangle`] is one of `points`.
    pub fn shares_vertex_with(&self, points: &[Point]) -> bool {
        points.iter().any(|&p| self.has_vertex(p))
    }

    pub fn has_segment(&self, segment: &Segment) -> bool {
        self.segments.contains(segment)
    }

    /// Returns the signed area of this [`Triangle`], positive when wound counter-clockwise.
    pub fn signed_area(&self) -> f64 {
        let [p, q, r] = self.vertices;
        orientation(p, q, r) / 2.0
    }

    /// Returns this [`Triangle`] with counter-clockwise winding. The
    /// circumcircle is kept as is.
    pub fn into_counter_clockwise(self) -> Self {
        if self.signed_area() >= 0.0 {
            return self;
        }
        let [p, q, r] = self.vertices;
        Self {
            vertices: [p, r, q],
            segments: [Segment::new(p, r), Segment::new(r, q), Segment::new(q, p)],
            circumcircle: self.circumcircle,
        }
    }

    fn sorted_vertices(&self) -> [Point; 3] {
        let mut sorted = self.vertices;
        sorted.sort_by(lexicographic);
        sorted
    }
}

/// Two triangles are equal when they have the same vertices, in any order.
impl PartialEq for Triangle {
    fn eq(&self, other: &Self) -> bool {
        self.sorted_vertices() == other.sorted_vertices()
    }
}

// =============================================================================

#[cfg(test)]
mod test {
    use glam::dvec2;

    use super::*;

    #[test]
    fn test_construction() {
        let p = dvec2(0.0, 0.0);
        let q = dvec2(4.0, 0.0);
        let r = dvec2(0.0, 3.0);
        let t = Triangle::new(p, q, r).unwrap();

        assert_eq!(t.vertices(), [p, q, r]);
        assert_eq!(
            t.segments(),
            &[Segment::new(p, q), Segment::new(q, r), Segment::new(r, p)]
        );
        assert_eq!(t.circumcircle().center, dvec2(2.0, 1.5));
        assert_eq!(t.circumcircle().radius, 2.5);
        assert_eq!(t.signed_area(), 6.0);

        let from_segment = Triangle::from_segment(&Segment::new(q, r), p).unwrap();
        assert_eq!(from_segment, t);
        assert!(from_segment.has_segment(&Segment::new(p, q)));
    }

    #[test]
    fn test_in_circumcircle() {
        let t = Triangle::new(dvec2(0.0, 0.0), dvec2(2.0, 0.0), dvec2(2.0, 2.0)).unwrap();

        assert!(t.in_circumcircle(dvec2(1.0, 1.0)));
        assert!(t.in_circumcircle(dvec2(0.5, 1.5)));
        // co-circular corner of the square is on the circle, not inside it
        assert!(!t.in_circumcircle(dvec2(0.0, 2.0)));
        assert!(!t.in_circumcircle(dvec2(3.0, 3.0)));
    }

    #[test]
    fn test_degenerate_triangle_is_rejected() {
        let p = dvec2(0.0, 0.0);
        assert!(Triangle::new(p, dvec2(1.0, 1.0), dvec2(2.0, 2.0)).is_err());
        assert!(Triangle::new(p, p, dvec2(2.0, 2.0)).is_err());
    }

    #[test]
    fn test_winding() {
        let cw = Triangle::new(dvec2(0.0, 0.0), dvec2(0.0, 1.0), dvec2(1.0, 0.0)).unwrap();
        assert!(cw.signed_area() < 0.0);

        let ccw = cw.into_counter_clockwise();
        assert!(ccw.signed_area() > 0.0);
        assert_eq!(ccw, cw);
        assert_eq!(ccw.circumcircle(), cw.circumcircle());
        assert_eq!(ccw.vertices()[0], cw.vertices()[0]);
    }

    #[test]
    fn test_shared_vertices() {
        let t = Triangle::new(dvec2(0.0, 0.0), dvec2(1.0, 0.0), dvec2(0.0, 1.0)).unwrap();

        assert!(t.has_vertex(dvec2(1.0, 0.0)));
        assert!(!t.has_vertex(dvec2(1.0, 1.0)));
        assert!(t.shares_vertex_with(&[dvec2(5.0, 5.0), dvec2(0.0, 1.0)]));
        assert!(!t.shares_vertex_with(&[dvec2(5.0, 5.0)]));
    }
}
