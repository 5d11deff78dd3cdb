//! Polygonal areas: boundary queries, fan triangulation and reflex
//! vertex detection.
//!
//! # Example
//!
//! ```
//! use polyroute::{Area, Point2};
//!
//! let square = Area::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(10.0, 0.0),
//!     Point2::new(10.0, 10.0),
//!     Point2::new(0.0, 10.0),
//! ])?;
//!
//! // Points outside the area project onto the nearest boundary edge.
//! let snapped = square.nearest_boundary_point(Point2::new(5.0, -3.0));
//! assert_eq!(snapped, Point2::new(5.0, 0.0));
//! # Ok::<(), polyroute::RouteError>(())
//! ```

mod area;

pub use area::Area;
