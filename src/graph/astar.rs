//! Shortest-route search over a visibility graph.

use super::node::{NodeId, VisibilityGraph};
use num_traits::Float;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// An open-set entry for [`astar`].
/// Uses reverse ordering so BinaryHeap pops the lowest total cost first.
struct OpenEntry<F> {
    id: NodeId,
    total_cost: F,
}

impl<F: Float> PartialEq for OpenEntry<F> {
    fn eq(&self, other: &Self) -> bool {
        self.total_cost == other.total_cost
    }
}

impl<F: Float> Eq for OpenEntry<F> {}

impl<F: Float> PartialOrd for OpenEntry<F> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        other.total_cost.partial_cmp(&self.total_cost)
    }
}

impl<F: Float> Ord for OpenEntry<F> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.partial_cmp(other).unwrap_or(Ordering::Equal)
    }
}

/// Finds the cheapest route from `start` to `goal` and returns the node
/// ids along it, both endpoints included.
///
/// The search keeps full A* bookkeeping on each node but estimates the
/// remaining distance as zero, so nodes are expanded purely by distance
/// from the start and the first arrival at `goal` is optimal. Returns an
/// empty vector when `goal` cannot be reached, and `[start]` when the
/// two ids coincide. Previous search state on the graph is cleared on
/// entry, so the same graph can serve any number of queries.
pub fn astar<F: Float>(
    graph: &mut VisibilityGraph<F>,
    start: NodeId,
    goal: NodeId,
) -> Vec<NodeId> {
    if start >= graph.len() || goal >= graph.len() {
        return Vec::new();
    }

    graph.reset_search_state();
    graph.nodes[start].distance_from_start = F::zero();
    graph.nodes[start].total_cost = F::zero();

    let mut open = BinaryHeap::new();
    open.push(OpenEntry {
        id: start,
        total_cost: F::zero(),
    });
    let mut closed = vec![false; graph.len()];

    while let Some(entry) = open.pop() {
        let current = entry.id;
        if closed[current] {
            // Stale entry superseded by a cheaper relaxation.
            continue;
        }
        if current == goal {
            return reconstruct_route(graph, goal);
        }
        closed[current] = true;

        for i in 0..graph.nodes[current].neighbours.len() {
            let (neighbour, cost) = graph.nodes[current].neighbours[i];
            if closed[neighbour] {
                continue;
            }
            let tentative = graph.nodes[current].distance_from_start + cost;
            if tentative < graph.nodes[neighbour].distance_from_start {
                let node = &mut graph.nodes[neighbour];
                node.distance_from_start = tentative;
                node.total_cost = tentative + node.heuristic;
                node.parent = Some(current);
                open.push(OpenEntry {
                    id: neighbour,
                    total_cost: node.total_cost,
                });
            }
        }
    }

    Vec::new()
}

/// Walks the parent chain back from `goal` and returns it in start-first
/// order.
fn reconstruct_route<F: Float>(graph: &VisibilityGraph<F>, goal: NodeId) -> Vec<NodeId> {
    let mut route = vec![goal];
    let mut current = goal;
    while let Some(parent) = graph.nodes[current].parent {
        route.push(parent);
        current = parent;
    }
    route.reverse();
    route
}
