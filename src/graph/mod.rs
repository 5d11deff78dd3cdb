//! Visibility graphs and the shortest-route search that runs on them.
//!
//! # Example
//!
//! ```
//! use polyroute::{astar, Point2, VisibilityGraph};
//!
//! let mut graph = VisibilityGraph::new();
//! let a = graph.add_node(Point2::new(0.0, 0.0));
//! let b = graph.add_node(Point2::new(1.0, 0.0));
//! let c = graph.add_node(Point2::new(2.0, 0.0));
//! graph.connect(a, b, 1.0);
//! graph.connect(b, c, 1.0);
//! graph.connect(a, c, 5.0);
//!
//! // Two short hops beat the single expensive edge.
//! let route = astar(&mut graph, a, c);
//! assert_eq!(route, vec![a, b, c]);
//! ```

mod astar;
mod node;

pub use astar::astar;
pub use node::{Node, NodeId, VisibilityGraph};
