//! Shortest-route planning inside a polygonal area.
//!
//! # Example
//!
//! ```
//! use polyroute::{Area, PathFinder, Point2};
//!
//! // A rectangle with a notch poking into it at (250, 200).
//! let area = Area::new(vec![
//!     Point2::new(100.0, 100.0),
//!     Point2::new(200.0, 100.0),
//!     Point2::new(250.0, 200.0),
//!     Point2::new(300.0, 100.0),
//!     Point2::new(400.0, 100.0),
//!     Point2::new(400.0, 300.0),
//!     Point2::new(100.0, 300.0),
//! ])?;
//!
//! let mut finder = PathFinder::new(area);
//! finder.set_start_and_end(
//!     Some(Point2::new(150.0, 160.0)),
//!     Some(Point2::new(350.0, 160.0)),
//! );
//!
//! // The straight line is blocked by the notch, so the route pivots
//! // on its tip.
//! let route = finder.find_path()?;
//! assert_eq!(
//!     route,
//!     vec![
//!         Point2::new(150.0, 160.0),
//!         Point2::new(250.0, 200.0),
//!         Point2::new(350.0, 160.0),
//!     ]
//! );
//! # Ok::<(), polyroute::RouteError>(())
//! ```

use crate::error::RouteError;
use crate::graph::{astar, NodeId, VisibilityGraph};
use crate::polygon::Area;
use crate::primitives::{Point2, Segment2, Triangle2};
use num_traits::Float;

/// Number of evenly spaced probe points used to decide whether a
/// candidate route segment stays inside the area.
const VISIBILITY_SAMPLES: usize = 10;

/// Computes shortest collision-free routes through an [`Area`].
///
/// The finder derives a triangle cover and the boundary edge list from
/// the area at construction. Start and end points are set separately and
/// may lie outside the area: [`find_path`] snaps them onto the boundary
/// before routing.
///
/// A finder carries mutable query state (the current endpoints), so
/// sharing one instance across threads needs external synchronisation.
/// The visibility graph built during a query is local to that call and
/// nothing accumulates between calls.
///
/// [`find_path`]: PathFinder::find_path
#[derive(Debug, Clone)]
pub struct PathFinder<F> {
    area: Area<F>,
    triangles: Vec<Triangle2<F>>,
    edges: Vec<Segment2<F>>,
    start: Option<Point2<F>>,
    end: Option<Point2<F>>,
}

impl<F: Float> PathFinder<F> {
    /// Creates a finder for the given area.
    ///
    /// The area is fan-triangulated from its first vertex. When that
    /// decomposition misrepresents a concave area, supply a correct
    /// cover through [`set_area_triangles`](PathFinder::set_area_triangles).
    pub fn new(area: Area<F>) -> Self {
        let triangles = area.triangulate();
        let edges = area.boundary_edges();
        Self {
            area,
            triangles,
            edges,
            start: None,
            end: None,
        }
    }

    /// Replaces the triangle cover used for point-in-area tests.
    pub fn set_area_triangles(&mut self, triangles: Vec<Triangle2<F>>) {
        self.triangles = triangles;
    }

    /// Updates the route endpoints.
    ///
    /// Passing `None` leaves the corresponding value untouched, so either
    /// endpoint can be moved on its own.
    pub fn set_start_and_end(&mut self, start: Option<Point2<F>>, end: Option<Point2<F>>) {
        if let Some(p) = start {
            self.start = Some(p);
        }
        if let Some(p) = end {
            self.end = Some(p);
        }
    }

    /// Returns `true` when `p` lies inside the area or on its boundary.
    pub fn is_point_in_area(&self, p: Point2<F>) -> bool {
        self.triangles.iter().any(|t| t.contains_point(p))
    }

    /// Returns the routed area.
    pub fn area(&self) -> &Area<F> {
        &self.area
    }

    /// Returns the triangle cover in use.
    pub fn area_triangles(&self) -> &[Triangle2<F>] {
        &self.triangles
    }

    /// Returns the current start point, if set.
    pub fn start_point(&self) -> Option<Point2<F>> {
        self.start
    }

    /// Returns the current end point, if set.
    pub fn end_point(&self) -> Option<Point2<F>> {
        self.end
    }

    /// Computes the shortest route from the current start to the current
    /// end.
    ///
    /// Endpoints outside the area are first snapped onto the boundary in
    /// the direction of the opposite endpoint; the snapped points then
    /// delimit the returned route. When the straight connection stays
    /// inside the area the route is just the two endpoints. Otherwise a
    /// visibility graph over the area's reflex vertices is searched, and
    /// an empty vector is returned when no route exists.
    pub fn find_path(&self) -> Result<Vec<Point2<F>>, RouteError> {
        let start = self.start.ok_or(RouteError::StartNotSet)?;
        let end = self.end.ok_or(RouteError::EndNotSet)?;

        let start = self.snap_towards(start, end)?;
        let end = self.snap_towards(end, start)?;

        if self.segment_stays_inside(Segment2::new(start, end)) {
            return Ok(vec![start, end]);
        }

        let (mut graph, start_id, end_id) = self.build_visibility_graph(start, end);
        let route = astar(&mut graph, start_id, end_id);
        let waypoints = route.into_iter().map(|id| graph.point(id)).collect();
        Ok(self.simplify(waypoints))
    }

    /// Moves an exterior point onto the boundary in the direction of
    /// `towards`. Interior points pass through unchanged.
    fn snap_towards(&self, point: Point2<F>, towards: Point2<F>) -> Result<Point2<F>, RouteError> {
        if self.is_point_in_area(point) {
            return Ok(point);
        }
        self.area
            .nearest_boundary_point_towards(point, towards)
            .ok_or(RouteError::BoundaryNotCrossed)
    }

    /// Returns `true` when the segment strictly crosses a boundary edge.
    fn crosses_boundary(&self, segment: Segment2<F>) -> bool {
        self.edges.iter().any(|edge| segment.intersects(*edge))
    }

    /// Returns `true` when the segment crosses no boundary edge and every
    /// interior sample lies in the triangle cover.
    ///
    /// The sampling half of the test catches segments that leave the area
    /// without strictly crossing an edge, such as chords grazing a reflex
    /// corner exactly at its vertex.
    fn segment_stays_inside(&self, segment: Segment2<F>) -> bool {
        !self.crosses_boundary(segment)
            && segment
                .split_into_points(VISIBILITY_SAMPLES)
                .into_iter()
                .all(|p| self.is_point_in_area(p))
    }

    /// Builds the visibility graph over the area's reflex vertices plus
    /// the two route endpoints, connecting every pair whose straight
    /// connection stays inside the area.
    fn build_visibility_graph(
        &self,
        start: Point2<F>,
        end: Point2<F>,
    ) -> (VisibilityGraph<F>, NodeId, NodeId) {
        let mut waypoints = self.area.concave_vertices();
        waypoints.push(start);
        waypoints.push(end);

        let mut graph = VisibilityGraph::new();
        for waypoint in &waypoints {
            graph.add_node(*waypoint);
        }
        let end_id = graph.len() - 1;
        let start_id = end_id - 1;

        for a in 0..waypoints.len() {
            for b in (a + 1)..waypoints.len() {
                let segment = Segment2::new(waypoints[a], waypoints[b]);
                if self.segment_stays_inside(segment) {
                    graph.connect(a, b, segment.length());
                }
            }
        }
        (graph, start_id, end_id)
    }

    /// Greedily skips forward to the farthest waypoint whose straight
    /// connection stays inside the area, dropping the waypoints in
    /// between. The first and last waypoint are always kept.
    fn simplify(&self, route: Vec<Point2<F>>) -> Vec<Point2<F>> {
        if route.len() < 3 {
            return route;
        }
        let mut simplified = vec![route[0]];
        let mut i = 0;
        while i + 1 < route.len() {
            let mut next = i + 1;
            for j in ((i + 2)..route.len()).rev() {
                if self.segment_stays_inside(Segment2::new(route[i], route[j])) {
                    next = j;
                    break;
                }
            }
            simplified.push(route[next]);
            i = next;
        }
        simplified
    }
}
