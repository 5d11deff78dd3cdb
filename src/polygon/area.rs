//! Polygonal areas and their boundary queries.

use crate::error::RouteError;
use crate::primitives::{Point2, Segment2, Triangle2};
use num_traits::Float;

/// A simple polygon given as an ordered boundary point list.
///
/// At least three points are required; [`Area::new`] rejects anything
/// shorter. The boundary must not self-intersect and is expected in
/// counter-clockwise order (y axis up): concave-vertex detection and fan
/// triangulation both read winding from the point order, and neither
/// reorders the input.
#[derive(Debug, Clone, PartialEq)]
pub struct Area<F> {
    points: Vec<Point2<F>>,
}

impl<F: Float> Area<F> {
    /// Creates an area from an ordered boundary point list.
    ///
    /// Fails with [`RouteError::TooFewPoints`] when fewer than three
    /// points are supplied; no partial area is ever built.
    pub fn new(points: Vec<Point2<F>>) -> Result<Self, RouteError> {
        if points.len() < 3 {
            return Err(RouteError::TooFewPoints(points.len()));
        }
        Ok(Self { points })
    }

    /// Returns the boundary points in their defining order.
    #[inline]
    pub fn points(&self) -> &[Point2<F>] {
        &self.points
    }

    /// Decomposes the area into triangles by fanning out from vertex 0.
    ///
    /// Produces exactly `n - 2` triangles, all sharing vertex 0. The fan
    /// only covers the polygon correctly when it is convex or star-shaped
    /// as seen from vertex 0; for other concave shapes, callers supply a
    /// manual triangle set instead (see
    /// [`PathFinder::set_area_triangles`](crate::PathFinder::set_area_triangles)).
    pub fn triangulate(&self) -> Vec<Triangle2<F>> {
        let anchor = self.points[0];
        (2..self.points.len())
            .map(|i| Triangle2::new(anchor, self.points[i - 1], self.points[i]))
            .collect()
    }

    /// Returns the boundary edges in point order, wrapping last to first.
    pub fn boundary_edges(&self) -> Vec<Segment2<F>> {
        let n = self.points.len();
        (0..n)
            .map(|i| Segment2::new(self.points[i], self.points[(i + 1) % n]))
            .collect()
    }

    /// Returns the concave (reflex) boundary vertices in point order.
    ///
    /// A vertex is reflex when the triangle formed by it, its next
    /// neighbour and its previous neighbour winds clockwise, i.e. has
    /// negative signed area. These are the only vertices a shortest route
    /// ever pivots on.
    pub fn concave_vertices(&self) -> Vec<Point2<F>> {
        let n = self.points.len();
        let mut reflex = Vec::new();
        for i in 0..n {
            let current = self.points[i];
            let next = self.points[(i + 1) % n];
            let previous = self.points[(i + n - 1) % n];
            if Triangle2::new(current, next, previous).signed_area() < F::zero() {
                reflex.push(current);
            }
        }
        reflex
    }

    /// Returns the boundary point nearest to `p`.
    ///
    /// Scans the vertices for the closest one, then projects `p` onto
    /// that vertex's two adjacent edges and keeps the closer projection.
    /// The two-edge refinement matters: the globally nearest boundary
    /// point does not always lie on an edge of the globally nearest
    /// vertex pair.
    pub fn nearest_boundary_point(&self, p: Point2<F>) -> Point2<F> {
        let n = self.points.len();
        let mut closest = 0;
        let mut min_distance = F::infinity();
        for (i, vertex) in self.points.iter().enumerate() {
            let distance = vertex.distance(p);
            if distance < min_distance {
                min_distance = distance;
                closest = i;
            }
        }

        let previous = self.points[(closest + n - 1) % n];
        let next = self.points[(closest + 1) % n];
        let candidate1 = Segment2::new(previous, self.points[closest]).nearest_point(p);
        let candidate2 = Segment2::new(next, self.points[closest]).nearest_point(p);
        if p.distance_squared(candidate1) < p.distance_squared(candidate2) {
            candidate1
        } else {
            candidate2
        }
    }

    /// Returns the boundary point nearest to `from` in the direction of
    /// `towards`.
    ///
    /// Walks the boundary edges in order and projects `from` onto the
    /// first edge strictly crossed by the `from` to `towards` segment.
    /// Returns `None` when no edge is crossed, which callers treat as an
    /// invariant violation rather than inventing a point.
    pub fn nearest_boundary_point_towards(
        &self,
        from: Point2<F>,
        towards: Point2<F>,
    ) -> Option<Point2<F>> {
        let travel = Segment2::new(from, towards);
        self.boundary_edges()
            .into_iter()
            .find(|edge| travel.intersects(*edge))
            .map(|edge| edge.nearest_point(from))
    }

    /// Returns the boundary points rotated so that `start` comes first.
    ///
    /// With `reverse = false` the winding is preserved; with
    /// `reverse = true` the traversal direction flips while `start` stays
    /// in front. Fails with [`RouteError::NotABoundaryVertex`] when
    /// `start` is not one of the defining points.
    pub fn rotated_from(
        &self,
        start: Point2<F>,
        reverse: bool,
    ) -> Result<Vec<Point2<F>>, RouteError> {
        let index = self
            .points
            .iter()
            .position(|p| *p == start)
            .ok_or(RouteError::NotABoundaryVertex)?;

        let mut rotated = Vec::with_capacity(self.points.len());
        if reverse {
            rotated.extend(self.points[..=index].iter().rev());
            rotated.extend(self.points[index + 1..].iter().rev());
        } else {
            rotated.extend_from_slice(&self.points[index..]);
            rotated.extend_from_slice(&self.points[..index]);
        }
        Ok(rotated)
    }
}
