use crate::Point;
use std::collections::HashMap;
use std::hash::Hash;

/// A layout engine that can compute positions for graph nodes
///
/// This trait is generic over the graph type `G` so an engine can state which
/// petgraph capabilities it needs. The routing layout implements it for any
/// `G: IntoNodeIdentifiers + IntoNeighborsDirected`.
pub trait LayoutEngine<G> {
    /// The type used to identify nodes in the graph
    type NodeId: Copy + Ord + Hash;

    /// Compute node positions for the given graph
    ///
    /// Every node reported by the graph receives a position. Layout is total:
    /// degenerate inputs (cycles, self-loops) still produce a placement.
    fn layout(&self, graph: G) -> HashMap<Self::NodeId, Point>;
}
