//! 2D triangle type.

use super::Point2;
use num_traits::Float;

/// A triangle defined by three ordered vertices.
///
/// The vertex order matters: the sign of [`Triangle2::signed_area`]
/// encodes the winding, which both point containment and concave-vertex
/// detection rely on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle2<F> {
    pub a: Point2<F>,
    pub b: Point2<F>,
    pub c: Point2<F>,
}

impl<F: Float> Triangle2<F> {
    /// Creates a new triangle.
    #[inline]
    pub fn new(a: Point2<F>, b: Point2<F>, c: Point2<F>) -> Self {
        Self { a, b, c }
    }

    /// Returns the signed area of the triangle.
    ///
    /// Positive for counter-clockwise winding (y axis up), negative for
    /// clockwise, zero when the vertices are collinear.
    #[inline]
    pub fn signed_area(self) -> F {
        let two = F::one() + F::one();
        sign(self.a, self.b, self.c) / two
    }

    /// Tests whether `p` lies inside the triangle, boundary included.
    ///
    /// Computes the signed sub-areas of (p, a, b), (p, b, c) and
    /// (p, c, a); the point is inside exactly when the non-zero signs do
    /// not mix. A zero sub-area means p sits on an edge or vertex, which
    /// counts as inside.
    pub fn contains_point(self, p: Point2<F>) -> bool {
        let d1 = sign(p, self.a, self.b);
        let d2 = sign(p, self.b, self.c);
        let d3 = sign(p, self.c, self.a);

        let has_neg = d1 < F::zero() || d2 < F::zero() || d3 < F::zero();
        let has_pos = d1 > F::zero() || d2 > F::zero() || d3 > F::zero();

        !(has_neg && has_pos)
    }
}

/// Twice the signed area of the triangle (p1, p2, p3).
#[inline]
fn sign<F: Float>(p1: Point2<F>, p2: Point2<F>, p3: Point2<F>) -> F {
    (p1.x - p3.x) * (p2.y - p3.y) - (p2.x - p3.x) * (p1.y - p3.y)
}
