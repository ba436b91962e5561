mod disconnected;
mod graph;
mod lanes;
mod levels;
mod positions;

use crate::{Edge, FlowDirection, LayoutEngine, Node, Point, Vec2};
use petgraph::graphmap::DiGraphMap;
use petgraph::visit::{IntoNeighborsDirected, IntoNodeIdentifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use tracing::debug;

use disconnected::place_disconnected;
use graph::RoutingGraph;
use lanes::assign_lanes;
use levels::assign_levels;
use positions::cell_position;

/// Configuration for the level/lane routing layout
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingLayout {
    /// Width and height of a grid cell
    ///
    /// `cell.x` is always the horizontal step and `cell.y` the vertical one,
    /// whatever the direction. A vertical flow therefore advances levels by
    /// `cell.y`, so with the default 300x150 cell a chain lands on
    /// `(50,50) (50,200) (50,350)`. Use a square cell for equal spacing
    /// along both axes:
    ///
    /// ```
    /// use routing_layout::{Edge, FlowDirection, Node, Point, RoutingLayout, Vec2};
    ///
    /// let layout = RoutingLayout {
    ///     cell: Vec2::new(300.0, 300.0),
    ///     ..RoutingLayout::new(FlowDirection::Vertical)
    /// };
    /// let nodes = vec![Node::new("cut", ()), Node::new("weld", ())];
    /// let edges = [Edge::new("e1", "cut", "weld")];
    ///
    /// let nodes = layout.arrange(nodes, &edges);
    /// assert_eq!(nodes[1].position, Point::new(50.0, 350.0));
    /// ```
    pub cell: Vec2,

    /// Offset of the whole grid from the origin, on both axes
    pub margin: f32,

    /// Whether levels advance along x or along y
    pub direction: FlowDirection,
}

impl Default for RoutingLayout {
    fn default() -> Self {
        Self {
            cell: Vec2::new(300.0, 150.0),
            margin: 50.0,
            direction: FlowDirection::Horizontal,
        }
    }
}

impl RoutingLayout {
    /// Create a routing layout with default spacing flowing in `direction`
    pub fn new(direction: FlowDirection) -> Self {
        Self {
            direction,
            ..Default::default()
        }
    }
}

/// Position of a node on the layout grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// Longest-path distance from a root
    pub level: usize,
    /// Parallel track within the level
    pub lane: usize,
}

/// Level and lane of every node, in the graph's node order
#[derive(Debug, Clone)]
pub struct Grid<N> {
    pub cells: Vec<(N, Cell)>,
}

impl<N> Grid<N>
where
    N: Copy + PartialEq,
{
    /// Cell of the given node, if it is part of the grid
    pub fn cell(&self, node: N) -> Option<Cell> {
        self.cells
            .iter()
            .find(|(n, _)| *n == node)
            .map(|&(_, cell)| cell)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Highest level in use, `None` for an empty grid
    pub fn max_level(&self) -> Option<usize> {
        self.cells.iter().map(|(_, cell)| cell.level).max()
    }

    /// Highest lane in use, `None` for an empty grid
    pub fn max_lane(&self) -> Option<usize> {
        self.cells.iter().map(|(_, cell)| cell.lane).max()
    }
}

impl RoutingLayout {
    /// Compute the level and lane of every node
    ///
    /// Runs the longest-path level pass, then the lane pass, then places the
    /// nodes neither pass reached. Node order, root order and successor
    /// order all come from the graph, so the result is deterministic for a
    /// given insertion order.
    pub fn compute_grid<G>(&self, graph: G) -> Grid<G::NodeId>
    where
        G: IntoNodeIdentifiers + IntoNeighborsDirected,
        G::NodeId: Copy + Ord + Hash + fmt::Debug,
    {
        let graph = RoutingGraph::from_graph(graph);
        let roots = graph.roots();

        let mut levels = assign_levels(&graph, &roots);
        let mut lanes = assign_lanes(&graph, &levels.levels, &roots);
        place_disconnected(&graph, &mut levels.levels, levels.max, &mut lanes);

        debug!(
            "Laid out {} nodes from {} roots: max level {}, max lane {:?}",
            graph.len(),
            roots.len(),
            levels.max,
            lanes.max()
        );

        let cells = graph
            .nodes
            .iter()
            .zip(levels.levels.iter().zip(&lanes.lanes))
            .map(|(&node, (&level, &lane))| (node, Cell { level, lane }))
            .collect();

        Grid { cells }
    }

    /// Pixel position of a single cell
    pub fn position(&self, cell: Cell) -> Point {
        cell_position(cell, self.cell, self.margin, self.direction)
    }

    /// Pixel positions for a computed grid
    pub fn compute_positions<N>(&self, grid: &Grid<N>) -> HashMap<N, Point>
    where
        N: Copy + Eq + Hash,
    {
        grid.cells
            .iter()
            .map(|&(node, cell)| (node, self.position(cell)))
            .collect()
    }

    /// Level and lane of flat node and edge lists, keyed by index in `nodes`
    ///
    /// Edges naming an unknown node are dropped.
    pub fn compute_node_grid<P>(&self, nodes: &[Node<P>], edges: &[Edge]) -> Grid<usize> {
        self.compute_grid(&index_graph(nodes, edges))
    }

    /// Lay out a diagram given as flat node and edge lists
    ///
    /// Returns the same nodes in the same order with their position
    /// replaced. Edges naming an unknown node are dropped.
    pub fn arrange<P>(&self, mut nodes: Vec<Node<P>>, edges: &[Edge]) -> Vec<Node<P>> {
        let grid = self.compute_node_grid(&nodes, edges);

        for (index, cell) in grid.cells {
            nodes[index].position = self.position(cell);
        }

        nodes
    }
}

/// Build a graph over node indices, keeping input order for nodes and edges
fn index_graph<P>(nodes: &[Node<P>], edges: &[Edge]) -> DiGraphMap<usize, ()> {
    let mut graph = DiGraphMap::with_capacity(nodes.len(), edges.len());
    let mut index = HashMap::with_capacity(nodes.len());

    for (i, node) in nodes.iter().enumerate() {
        graph.add_node(i);
        index.entry(node.id.as_str()).or_insert(i);
    }

    for edge in edges {
        match (index.get(edge.source.as_str()), index.get(edge.target.as_str())) {
            (Some(&source), Some(&target)) => {
                graph.add_edge(source, target, ());
            }
            _ => debug!(
                "Dropping edge {} ({} -> {}): unknown endpoint",
                edge.id, edge.source, edge.target
            ),
        }
    }

    graph
}

// Implement LayoutEngine for any graph with the required capabilities
impl<G> LayoutEngine<G> for RoutingLayout
where
    G: IntoNodeIdentifiers + IntoNeighborsDirected,
    G::NodeId: Copy + Ord + Hash + fmt::Debug,
{
    type NodeId = G::NodeId;

    fn layout(&self, graph: G) -> HashMap<Self::NodeId, Point> {
        let grid = self.compute_grid(graph);
        self.compute_positions(&grid)
    }
}
