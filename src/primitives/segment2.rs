//! 2D line segment geometry.
//!
//! The segment predicates here drive visibility-graph edge admission, so
//! the crossing rule is strict: [`Segment2::intersects`] reports `true`
//! only for a genuine crossing in the interior of both segments. Segments
//! that share an endpoint, touch at a T-junction, run parallel, or overlap
//! collinearly are all non-intersecting. Route segments regularly pivot on
//! polygon vertices, so an endpoint contact must never read as "blocked";
//! [`Segment2::touches`] exists for callers that need to see those
//! contacts.
//!
//! # Example
//!
//! ```
//! use polyroute::Segment2;
//!
//! let wall = Segment2::from_coords(0.0, 0.0, 10.0, 0.0);
//! let crossing = Segment2::from_coords(5.0, -2.0, 5.0, 2.0);
//! let pivoting = Segment2::from_coords(10.0, 0.0, 14.0, 5.0);
//!
//! assert!(wall.intersects(crossing));
//! assert!(!wall.intersects(pivoting)); // shares (10, 0): touch, not cross
//! assert!(wall.touches(pivoting));
//! ```

use super::Point2;
use num_traits::Float;

/// Classification of a segment by its slope.
///
/// Axis-aligned segments get their own variants so that intersection and
/// projection code can branch before any gradient is computed; `Sloped`
/// therefore always carries a finite, non-zero gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Slope<F> {
    /// Both endpoints share the same y coordinate.
    Horizontal,
    /// Both endpoints share the same x coordinate.
    Vertical,
    /// General line `y = m * x + c`.
    Sloped {
        /// Gradient of the line.
        m: F,
        /// Offset where the line meets the y axis.
        c: F,
    },
}

/// A 2D line segment defined by two endpoints.
///
/// The segment is closed: both endpoints belong to it. A degenerate
/// segment with equal endpoints is allowed (zero length, classified as
/// horizontal) and never panics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2<F> {
    pub start: Point2<F>,
    pub end: Point2<F>,
}

impl<F: Float> Segment2<F> {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self { start, end }
    }

    /// Creates a segment from coordinate pairs.
    #[inline]
    pub fn from_coords(x1: F, y1: F, x2: F, y2: F) -> Self {
        Self {
            start: Point2::new(x1, y1),
            end: Point2::new(x2, y2),
        }
    }

    /// Returns the length of the segment.
    #[inline]
    pub fn length(self) -> F {
        self.start.distance(self.end)
    }

    /// Returns the midpoint of the segment.
    #[inline]
    pub fn midpoint(self) -> Point2<F> {
        self.start.midpoint(self.end)
    }

    /// Tests whether both endpoints share the same y coordinate.
    #[inline]
    pub fn is_horizontal(self) -> bool {
        self.start.y == self.end.y
    }

    /// Tests whether both endpoints share the same x coordinate.
    #[inline]
    pub fn is_vertical(self) -> bool {
        self.start.x == self.end.x
    }

    /// Classifies the segment's slope.
    ///
    /// A degenerate segment (equal endpoints) counts as horizontal, which
    /// keeps every downstream branch free of zero divisions.
    pub fn slope(self) -> Slope<F> {
        if self.is_horizontal() {
            Slope::Horizontal
        } else if self.is_vertical() {
            Slope::Vertical
        } else {
            let m = (self.end.y - self.start.y) / (self.end.x - self.start.x);
            let c = self.start.y - m * self.start.x;
            Slope::Sloped { m, c }
        }
    }

    /// Tests whether `p` lies within the segment's bounding box, inclusive
    /// on both axes.
    ///
    /// For a point already known to be on the segment's infinite line,
    /// this decides whether it lies on the segment itself.
    pub fn bounds_contain(self, p: Point2<F>) -> bool {
        let (min_x, max_x) = if self.start.x <= self.end.x {
            (self.start.x, self.end.x)
        } else {
            (self.end.x, self.start.x)
        };
        let (min_y, max_y) = if self.start.y <= self.end.y {
            (self.start.y, self.end.y)
        } else {
            (self.end.y, self.start.y)
        };
        p.x >= min_x && p.x <= max_x && p.y >= min_y && p.y <= max_y
    }

    /// Tests whether `p` lies on the segment.
    pub fn contains_point(self, p: Point2<F>) -> bool {
        if !self.bounds_contain(p) {
            return false;
        }
        match self.slope() {
            // The bounding box of an axis-aligned segment is flat on one
            // axis, so bounds containment already pins p to the line.
            Slope::Horizontal | Slope::Vertical => true,
            Slope::Sloped { m, c } => p.y == m * p.x + c,
        }
    }

    /// Returns the point on the segment nearest to `p`.
    ///
    /// Drops a perpendicular from `p` onto the segment's infinite line;
    /// when the foot falls outside the segment's bounding box, the nearer
    /// endpoint is returned instead. Axis-aligned segments are handled
    /// before any gradient is computed, so steep slopes never blow up a
    /// division.
    pub fn nearest_point(self, p: Point2<F>) -> Point2<F> {
        let foot = match self.slope() {
            Slope::Horizontal => Point2::new(p.x, self.start.y),
            Slope::Vertical => Point2::new(self.start.x, p.y),
            Slope::Sloped { m, c } => {
                // Normal line through p, then the two lines' crossing.
                let m_normal = -F::one() / m;
                let c_normal = p.y - m_normal * p.x;
                let x = (c_normal - c) / (m - m_normal);
                Point2::new(x, m_normal * x + c_normal)
            }
        };
        if self.bounds_contain(foot) {
            foot
        } else if p.distance_squared(self.end) < p.distance_squared(self.start) {
            self.end
        } else {
            self.start
        }
    }

    /// Tests whether two segments strictly cross.
    ///
    /// Parallel segments never intersect, including the collinear overlap
    /// case. Otherwise the crossing point of the two infinite lines must
    /// fall within both segments' bounding boxes and must not coincide
    /// with any of the four endpoints. Segments that merely share an
    /// endpoint are rejected outright; their line crossing is exactly that
    /// shared point.
    pub fn intersects(self, other: Self) -> bool {
        if self.shares_endpoint(other) {
            return false;
        }
        let crossing = match (self.slope(), other.slope()) {
            (Slope::Horizontal, Slope::Horizontal) | (Slope::Vertical, Slope::Vertical) => {
                return false;
            }
            (Slope::Horizontal, Slope::Vertical) => Point2::new(other.start.x, self.start.y),
            (Slope::Vertical, Slope::Horizontal) => Point2::new(self.start.x, other.start.y),
            (Slope::Horizontal, Slope::Sloped { m, c }) => {
                let y = self.start.y;
                Point2::new((y - c) / m, y)
            }
            (Slope::Sloped { m, c }, Slope::Horizontal) => {
                let y = other.start.y;
                Point2::new((y - c) / m, y)
            }
            (Slope::Vertical, Slope::Sloped { m, c }) => {
                let x = self.start.x;
                Point2::new(x, m * x + c)
            }
            (Slope::Sloped { m, c }, Slope::Vertical) => {
                let x = other.start.x;
                Point2::new(x, m * x + c)
            }
            (Slope::Sloped { m: m1, c: c1 }, Slope::Sloped { m: m2, c: c2 }) => {
                if m1 == m2 {
                    return false;
                }
                let x = (c2 - c1) / (m1 - m2);
                Point2::new(x, m1 * x + c1)
            }
        };
        self.bounds_contain(crossing)
            && other.bounds_contain(crossing)
            && !self.has_endpoint(crossing)
            && !other.has_endpoint(crossing)
    }

    /// Tests whether the segments touch: one segment's endpoint lies
    /// exactly on the other segment.
    ///
    /// Covers both shared endpoints and T-junctions. A strict crossing is
    /// not a touch; the two predicates are disjoint.
    pub fn touches(self, other: Self) -> bool {
        self.contains_point(other.start)
            || self.contains_point(other.end)
            || other.contains_point(self.start)
            || other.contains_point(self.end)
    }

    /// Returns `steps` interior points evenly spaced along the segment,
    /// excluding both endpoints.
    ///
    /// Used to approximate "does this chord stay inside the polygon" by
    /// sampling instead of exact clipping.
    pub fn split_into_points(self, steps: usize) -> Vec<Point2<F>> {
        let denominator = F::from(steps + 1).unwrap();
        (1..=steps)
            .map(|i| self.start.lerp(self.end, F::from(i).unwrap() / denominator))
            .collect()
    }

    #[inline]
    fn shares_endpoint(self, other: Self) -> bool {
        self.has_endpoint(other.start) || self.has_endpoint(other.end)
    }

    #[inline]
    fn has_endpoint(self, p: Point2<F>) -> bool {
        self.start == p || self.end == p
    }
}

impl<F: Float> From<(Point2<F>, Point2<F>)> for Segment2<F> {
    fn from((start, end): (Point2<F>, Point2<F>)) -> Self {
        Self::new(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_length() {
        let horizontal: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 10.0, 0.0);
        assert_eq!(horizontal.length(), 10.0);

        let sloped = Segment2::from_coords(1.0, 2.0, 5.0, 10.0);
        assert_eq!(sloped.length(), 80.0_f64.sqrt());

        let vertical = Segment2::from_coords(0.0, 5.0, 0.0, 0.0);
        assert_eq!(vertical.length(), 5.0);

        let degenerate = Segment2::from_coords(0.0, 5.0, 0.0, 5.0);
        assert_eq!(degenerate.length(), 0.0);

        // Direction never matters.
        let reversed = Segment2::new(sloped.end, sloped.start);
        assert_eq!(reversed.length(), sloped.length());
    }

    #[test]
    fn test_midpoint() {
        let s: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 10.0, 4.0);
        assert_eq!(s.midpoint(), Point2::new(5.0, 2.0));
    }

    #[test]
    fn test_slope_classification() {
        let h: Segment2<f64> = Segment2::from_coords(0.0, 3.0, 8.0, 3.0);
        assert!(h.is_horizontal());
        assert!(!h.is_vertical());
        assert_eq!(h.slope(), Slope::Horizontal);

        let v: Segment2<f64> = Segment2::from_coords(2.0, 0.0, 2.0, 9.0);
        assert!(v.is_vertical());
        assert_eq!(v.slope(), Slope::Vertical);

        let s: Segment2<f64> = Segment2::from_coords(1.0, 2.0, 5.0, 10.0);
        match s.slope() {
            Slope::Sloped { m, c } => {
                assert_eq!(m, 2.0);
                assert_eq!(c, 0.0);
            }
            other => panic!("expected sloped, got {other:?}"),
        }

        // Degenerate segments classify as horizontal, never divide.
        let degenerate: Segment2<f64> = Segment2::from_coords(4.0, 4.0, 4.0, 4.0);
        assert_eq!(degenerate.slope(), Slope::Horizontal);
    }

    #[test]
    fn test_bounds_contain() {
        let s: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 10.0, 0.0);
        assert!(s.bounds_contain(Point2::new(0.0, 0.0)));
        assert!(s.bounds_contain(Point2::new(5.0, 0.0)));
        assert!(s.bounds_contain(Point2::new(10.0, 0.0)));
        assert!(!s.bounds_contain(Point2::new(0.0, 1.0)));
        assert!(!s.bounds_contain(Point2::new(5.0, 1.0)));
        assert!(!s.bounds_contain(Point2::new(10.0, 1.0)));
        assert!(!s.bounds_contain(Point2::new(-0.1, 0.0)));
    }

    #[test]
    fn test_contains_point() {
        let sloped: Segment2<f64> = Segment2::from_coords(1.0, 2.0, 5.0, 10.0);
        assert!(sloped.contains_point(Point2::new(3.0, 6.0)));
        assert!(sloped.contains_point(Point2::new(1.0, 2.0)));
        // On the infinite line but beyond the segment.
        assert!(!sloped.contains_point(Point2::new(7.0, 14.0)));
        // Inside the bounding box but off the line.
        assert!(!sloped.contains_point(Point2::new(3.0, 5.0)));
    }

    #[test]
    fn test_nearest_point_horizontal() {
        let s: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 10.0, 0.0);
        // Foot of the perpendicular lands on the segment.
        assert_eq!(s.nearest_point(Point2::new(2.0, 5.0)), Point2::new(2.0, 0.0));
        // Foot falls past the end, nearer endpoint wins.
        assert_eq!(s.nearest_point(Point2::new(12.0, 5.0)), Point2::new(10.0, 0.0));
        assert_eq!(s.nearest_point(Point2::new(12.0, 0.0)), Point2::new(10.0, 0.0));
        // Already on the segment.
        assert_eq!(s.nearest_point(Point2::new(2.0, 0.0)), Point2::new(2.0, 0.0));
    }

    #[test]
    fn test_nearest_point_vertical() {
        let s: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 0.0, 10.0);
        assert_eq!(s.nearest_point(Point2::new(5.0, 2.0)), Point2::new(0.0, 2.0));
        assert_eq!(s.nearest_point(Point2::new(5.0, 12.0)), Point2::new(0.0, 10.0));
        assert_eq!(s.nearest_point(Point2::new(0.0, 12.0)), Point2::new(0.0, 10.0));
        assert_eq!(s.nearest_point(Point2::new(0.0, 2.0)), Point2::new(0.0, 2.0));
    }

    #[test]
    fn test_nearest_point_sloped() {
        let s: Segment2<f64> = Segment2::from_coords(1.0, 2.0, 5.0, 10.0);

        let foot = s.nearest_point(Point2::new(4.0, 4.0));
        assert_relative_eq!(foot.x, 2.4);
        assert_relative_eq!(foot.y, 4.8);

        // Beyond the far endpoint, off the line.
        assert_eq!(s.nearest_point(Point2::new(9.0, 14.0)), Point2::new(5.0, 10.0));
        // Beyond the far endpoint, exactly on the infinite line.
        assert_eq!(s.nearest_point(Point2::new(7.0, 14.0)), Point2::new(5.0, 10.0));
    }

    #[test]
    fn test_nearest_point_idempotent_on_segment() {
        let s: Segment2<f64> = Segment2::from_coords(1.0, 2.0, 5.0, 10.0);
        let on_segment = Point2::new(4.0, 8.0);
        assert_eq!(s.nearest_point(on_segment), on_segment);

        let h: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 10.0, 0.0);
        let on_horizontal = Point2::new(7.0, 0.0);
        assert_eq!(h.nearest_point(on_horizontal), on_horizontal);
    }

    #[test]
    fn test_nearest_point_degenerate() {
        let s: Segment2<f64> = Segment2::from_coords(3.0, 4.0, 3.0, 4.0);
        assert_eq!(s.nearest_point(Point2::new(10.0, 10.0)), Point2::new(3.0, 4.0));
    }

    #[test]
    fn test_intersects_crossings() {
        let base: Segment2<f64> = Segment2::from_coords(1.0, 1.0, 10.0, 1.0);

        // Sloped segment crossing the horizontal base.
        let crossing = Segment2::from_coords(4.0, -1.0, 6.0, 5.0);
        assert!(base.intersects(crossing));
        assert!(crossing.intersects(base));

        // Vertical segment crossing the base.
        let vertical = Segment2::from_coords(5.0, -2.0, 5.0, 2.0);
        assert!(base.intersects(vertical));
        assert!(vertical.intersects(base));

        // Two sloped segments crossing at (2, 2).
        let rising = Segment2::from_coords(0.0, 0.0, 4.0, 4.0);
        let falling = Segment2::from_coords(0.0, 4.0, 4.0, 0.0);
        assert!(rising.intersects(falling));
        assert!(falling.intersects(rising));

        // Vertical against sloped.
        let post = Segment2::from_coords(2.0, 0.0, 2.0, 4.0);
        assert!(post.intersects(rising));
        assert!(rising.intersects(post));
    }

    #[test]
    fn test_intersects_parallel_and_collinear() {
        let base: Segment2<f64> = Segment2::from_coords(1.0, 1.0, 10.0, 1.0);

        // Parallel horizontals.
        let parallel = Segment2::from_coords(1.0, 0.0, 10.0, 0.0);
        assert!(!base.intersects(parallel));
        assert!(!parallel.intersects(base));

        // Collinear, fully contained.
        let contained = Segment2::from_coords(4.0, 1.0, 6.0, 1.0);
        assert!(!base.intersects(contained));
        assert!(!contained.intersects(base));

        // Collinear, partial overlap.
        let overlapping = Segment2::from_coords(6.0, 1.0, 14.0, 1.0);
        assert!(!base.intersects(overlapping));
        assert!(!overlapping.intersects(base));

        // Collinear chain sharing one endpoint.
        let chained = Segment2::from_coords(10.0, 1.0, 14.0, 1.0);
        assert!(!base.intersects(chained));
        assert!(!chained.intersects(base));

        // Equal gradients, distinct lines.
        let lower = Segment2::from_coords(0.0, 0.0, 4.0, 4.0);
        let upper = Segment2::from_coords(0.0, 1.0, 4.0, 5.0);
        assert!(!lower.intersects(upper));
        assert!(!upper.intersects(lower));

        // Parallel verticals.
        let left: Segment2<f64> = Segment2::from_coords(2.0, 0.0, 2.0, 5.0);
        let right = Segment2::from_coords(3.0, 0.0, 3.0, 5.0);
        assert!(!left.intersects(right));
        assert!(!right.intersects(left));
    }

    #[test]
    fn test_intersects_touching_is_not_crossing() {
        let base: Segment2<f64> = Segment2::from_coords(1.0, 1.0, 10.0, 1.0);

        // Shared endpoint, sloped away.
        let pivot = Segment2::from_coords(10.0, 1.0, 14.0, 5.0);
        assert!(!base.intersects(pivot));
        assert!(!pivot.intersects(base));

        // T-junction: endpoint resting on the base's interior.
        let resting = Segment2::from_coords(5.0, 1.0, 5.0, 9.0);
        assert!(!base.intersects(resting));
        assert!(!resting.intersects(base));

        // Sloped segment whose line crosses the base but which stops short.
        let hovering = Segment2::from_coords(6.0, 5.0, 8.0, 10.0);
        assert!(!base.intersects(hovering));
        assert!(!hovering.intersects(base));
    }

    #[test]
    fn test_touches() {
        let base: Segment2<f64> = Segment2::from_coords(1.0, 1.0, 10.0, 1.0);

        let pivot = Segment2::from_coords(10.0, 1.0, 14.0, 5.0);
        assert!(base.touches(pivot));
        assert!(pivot.touches(base));

        let resting = Segment2::from_coords(5.0, 1.0, 5.0, 9.0);
        assert!(base.touches(resting));

        let apart = Segment2::from_coords(0.0, 5.0, 10.0, 5.0);
        assert!(!base.touches(apart));

        // A strict crossing is not a touch.
        let rising: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 4.0, 4.0);
        let falling = Segment2::from_coords(0.0, 4.0, 4.0, 0.0);
        assert!(rising.intersects(falling));
        assert!(!rising.touches(falling));
    }

    #[test]
    fn test_split_into_points() {
        let s: Segment2<f64> = Segment2::from_coords(0.0, 0.0, 10.0, 0.0);

        let samples = s.split_into_points(4);
        assert_eq!(samples.len(), 4);
        assert_eq!(samples[0], Point2::new(2.0, 0.0));
        assert_eq!(samples[1], Point2::new(4.0, 0.0));
        assert_eq!(samples[2], Point2::new(6.0, 0.0));
        assert_eq!(samples[3], Point2::new(8.0, 0.0));

        // Endpoints are always excluded.
        let single = s.split_into_points(1);
        assert_eq!(single, vec![Point2::new(5.0, 0.0)]);

        assert!(s.split_into_points(0).is_empty());
    }

    #[test]
    fn test_from_tuple() {
        let s: Segment2<f64> = (Point2::new(1.0, 2.0), Point2::new(3.0, 4.0)).into();
        assert_eq!(s.start, Point2::new(1.0, 2.0));
        assert_eq!(s.end, Point2::new(3.0, 4.0));
    }
}
