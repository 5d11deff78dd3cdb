//! Error types for polyroute operations.

use thiserror::Error;

/// Errors that can occur while building areas or finding paths.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    /// An area needs at least three boundary points.
    #[error("area requires at least 3 points, got {0}")]
    TooFewPoints(usize),

    /// `find_path` was called before a start point was set.
    #[error("start point is not set")]
    StartNotSet,

    /// `find_path` was called before an end point was set.
    #[error("end point is not set")]
    EndNotSet,

    /// A directional boundary query crossed no boundary edge.
    ///
    /// Snapping an exterior point expects the segment towards the
    /// destination to cross the boundary somewhere; when it does not,
    /// the result would be meaningless, so the query refuses instead.
    #[error("no boundary edge crossed between the point and its destination")]
    BoundaryNotCrossed,

    /// A rotation was requested around a point that is not a vertex
    /// of the area boundary.
    #[error("point is not a vertex of the area boundary")]
    NotABoundaryVertex,
}
