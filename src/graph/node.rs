//! Arena-backed visibility graph storage.

use crate::primitives::Point2;
use num_traits::Float;

/// Index of a node inside a [`VisibilityGraph`] arena.
pub type NodeId = usize;

/// A waypoint in a visibility graph.
///
/// Nodes refer to their neighbours by [`NodeId`] into the owning arena,
/// so the graph needs no interior mutability or reference counting. The
/// remaining fields are per-search bookkeeping, reset before every query.
#[derive(Debug, Clone)]
pub struct Node<F> {
    /// Position of this waypoint.
    pub point: Point2<F>,
    /// Adjacent waypoints paired with the cost of travelling to them.
    pub neighbours: Vec<(NodeId, F)>,
    pub(crate) distance_from_start: F,
    pub(crate) heuristic: F,
    pub(crate) total_cost: F,
    pub(crate) parent: Option<NodeId>,
}

impl<F: Float> Node<F> {
    fn new(point: Point2<F>) -> Self {
        Self {
            point,
            neighbours: Vec::new(),
            distance_from_start: F::infinity(),
            heuristic: F::zero(),
            total_cost: F::infinity(),
            parent: None,
        }
    }
}

/// A graph of waypoints joined by straight traversable segments.
///
/// Nodes live in a flat arena and edges are symmetric: [`connect`]
/// records the edge on both endpoints. The graph is rebuilt per route
/// query, so no removal operations are provided.
///
/// [`connect`]: VisibilityGraph::connect
#[derive(Debug, Clone)]
pub struct VisibilityGraph<F> {
    pub(crate) nodes: Vec<Node<F>>,
}

impl<F: Float> VisibilityGraph<F> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Adds a waypoint and returns its id.
    pub fn add_node(&mut self, point: Point2<F>) -> NodeId {
        self.nodes.push(Node::new(point));
        self.nodes.len() - 1
    }

    /// Connects two waypoints in both directions at the given cost.
    pub fn connect(&mut self, a: NodeId, b: NodeId, cost: F) {
        self.nodes[a].neighbours.push((b, cost));
        self.nodes[b].neighbours.push((a, cost));
    }

    /// Returns the position of a waypoint.
    #[inline]
    pub fn point(&self, id: NodeId) -> Point2<F> {
        self.nodes[id].point
    }

    /// Returns the neighbours of a waypoint with their traversal costs.
    #[inline]
    pub fn neighbours(&self, id: NodeId) -> &[(NodeId, F)] {
        &self.nodes[id].neighbours
    }

    /// Returns the number of waypoints.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` when the graph holds no waypoints.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Clears the per-search bookkeeping on every node.
    pub(crate) fn reset_search_state(&mut self) {
        for node in &mut self.nodes {
            node.distance_from_start = F::infinity();
            node.heuristic = F::zero();
            node.total_cost = F::infinity();
            node.parent = None;
        }
    }
}

impl<F: Float> Default for VisibilityGraph<F> {
    fn default() -> Self {
        Self::new()
    }
}
