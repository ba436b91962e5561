//! Auto-layout for production routing diagrams
//!
//! Places workstation nodes on a grid of levels and lanes so a routing reads
//! as a left-to-right (or top-to-bottom) flow:
//!
//! - the level of a node is the longest path leading to it from a root
//! - the lane is its parallel track within that level, inherited from or
//!   averaged over its predecessors and bumped on collision
//! - nodes without any connection are stacked after the last level
//!
//! The layout works on flat node/edge lists, or on any graph implementing
//! petgraph's visitor traits.
//!
//! # Example
//!
//! ```
//! use routing_layout::{Edge, FlowDirection, Node, Point, RoutingLayout};
//!
//! let nodes = vec![Node::new("cut", ()), Node::new("weld", ()), Node::new("paint", ())];
//! let edges = vec![Edge::new("e1", "cut", "weld"), Edge::new("e2", "weld", "paint")];
//!
//! let layout = RoutingLayout::new(FlowDirection::Horizontal);
//! let nodes = layout.arrange(nodes, &edges);
//!
//! assert_eq!(nodes[2].position, Point::new(650.0, 50.0));
//! ```
//!
//! With a petgraph graph, levels and lanes are available before positioning:
//!
//! ```
//! use petgraph::graphmap::DiGraphMap;
//! use routing_layout::{Cell, LayoutEngine, RoutingLayout};
//!
//! let graph = DiGraphMap::<u32, ()>::from_edges([(1, 2), (1, 3), (2, 4), (3, 4)]);
//! let layout = RoutingLayout::default();
//!
//! let grid = layout.compute_grid(&graph);
//! assert_eq!(grid.cell(4), Some(Cell { level: 2, lane: 1 }));
//!
//! let positions = layout.layout(&graph);
//! assert_eq!(positions.len(), 4);
//! ```

mod diagram;
mod engine;
mod flow;
mod geometry;

pub mod layered;

// Re-export core types and traits
pub use diagram::{Edge, Node};
pub use engine::LayoutEngine;
pub use flow::FlowDirection;
pub use geometry::{Point, Vec2};

// Re-export petgraph visitor traits for graph abstraction
pub use petgraph::visit::{IntoNeighborsDirected, IntoNodeIdentifiers};

// Re-export layered layout types
pub use layered::{Cell, Grid, RoutingLayout};
