//! polyroute - Shortest paths inside simple polygons
//!
//! Routes between two points confined to a polygonal area, detouring
//! around concave corners where the straight line is blocked and
//! snapping out-of-bounds endpoints onto the boundary first. Polygons
//! with holes are not supported.

pub mod error;
pub mod finder;
pub mod graph;
pub mod polygon;
pub mod primitives;

pub use error::RouteError;
pub use finder::PathFinder;
pub use graph::{astar, Node, NodeId, VisibilityGraph};
pub use polygon::Area;
pub use primitives::{Point2, Segment2, Slope, Triangle2};
