use petgraph::visit::{IntoNeighborsDirected, IntoNodeIdentifiers};
use petgraph::Direction;
use std::collections::HashMap;
use std::hash::Hash;
use tracing::warn;

/// Adjacency of a single node, as indices into [`RoutingGraph`]
///
/// Both lists behave as insertion-ordered sets: the first link wins and
/// parallel edges collapse into one.
#[derive(Debug, Clone, Default)]
pub(crate) struct Record {
    pub predecessors: Vec<usize>,
    pub successors: Vec<usize>,
}

impl Record {
    /// A node with no edges at all
    pub fn is_isolated(&self) -> bool {
        self.predecessors.is_empty() && self.successors.is_empty()
    }
}

/// Arena of adjacency records, indexed by the position of each node in the
/// graph's identifier order
#[derive(Debug, Clone)]
pub(crate) struct RoutingGraph<N> {
    pub nodes: Vec<N>,
    records: Vec<Record>,
}

impl<N> RoutingGraph<N>
where
    N: Copy + Ord + Hash,
{
    /// Snapshot the adjacency of any graph implementing petgraph's visitor traits
    pub fn from_graph<G>(graph: G) -> Self
    where
        G: IntoNodeIdentifiers<NodeId = N> + IntoNeighborsDirected,
    {
        let nodes: Vec<N> = graph.node_identifiers().collect();
        let mut index = HashMap::with_capacity(nodes.len());
        for (i, &node) in nodes.iter().enumerate() {
            index.entry(node).or_insert(i);
        }

        let mut routing = Self {
            records: vec![Record::default(); nodes.len()],
            nodes,
        };

        for source in 0..routing.nodes.len() {
            let node = routing.nodes[source];
            for succ in graph.neighbors_directed(node, Direction::Outgoing) {
                if let Some(&target) = index.get(&succ) {
                    routing.link(source, target);
                }
            }
        }

        routing
    }
}

impl<N> RoutingGraph<N> {
    fn link(&mut self, source: usize, target: usize) {
        if !self.records[source].successors.contains(&target) {
            self.records[source].successors.push(target);
        }
        if !self.records[target].predecessors.contains(&source) {
            self.records[target].predecessors.push(source);
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn record(&self, node: usize) -> &Record {
        &self.records[node]
    }

    pub fn successors(&self, node: usize) -> &[usize] {
        &self.records[node].successors
    }

    pub fn predecessors(&self, node: usize) -> &[usize] {
        &self.records[node].predecessors
    }

    /// Starting points of both traversals, in input order
    ///
    /// Isolated nodes are never roots, they are placed after the traversals.
    /// When every connected node has a predecessor (a pure cycle) the first
    /// connected node is used so the traversals still make progress.
    pub fn roots(&self) -> Vec<usize> {
        let roots: Vec<usize> = (0..self.len())
            .filter(|&i| {
                let record = &self.records[i];
                record.predecessors.is_empty() && !record.successors.is_empty()
            })
            .collect();

        if !roots.is_empty() {
            return roots;
        }

        match (0..self.len()).find(|&i| !self.records[i].is_isolated()) {
            Some(first) => {
                warn!("No root found, graph is cyclic; starting from node #{first}");
                vec![first]
            }
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petgraph::graphmap::DiGraphMap;
    use test_log::test;

    #[test]
    fn records_follow_insertion_order() {
        let mut graph = DiGraphMap::<u32, ()>::new();
        graph.add_node(1);
        graph.add_node(2);
        graph.add_node(3);
        graph.add_edge(1, 3, ());
        graph.add_edge(1, 2, ());
        graph.add_edge(2, 3, ());

        let routing = RoutingGraph::from_graph(&graph);

        assert_eq!(routing.nodes, vec![1, 2, 3]);
        assert_eq!(routing.successors(0), &[2, 1]);
        assert_eq!(routing.predecessors(2), &[0, 1]);
        assert!(routing.predecessors(0).is_empty());
    }

    #[test]
    fn self_loop_is_both_predecessor_and_successor() {
        let mut graph = DiGraphMap::<u32, ()>::new();
        graph.add_edge(7, 7, ());

        let routing = RoutingGraph::from_graph(&graph);

        assert_eq!(routing.successors(0), &[0]);
        assert_eq!(routing.predecessors(0), &[0]);
    }

    #[test]
    fn isolated_nodes_are_not_roots() {
        let mut graph = DiGraphMap::<u32, ()>::new();
        graph.add_node(0);
        graph.add_edge(1, 2, ());
        graph.add_node(3);

        let routing = RoutingGraph::from_graph(&graph);

        assert!(routing.record(0).is_isolated());
        assert!(routing.record(3).is_isolated());
        assert_eq!(routing.roots(), vec![1]);
    }

    #[test]
    fn pure_cycle_falls_back_to_first_connected_node() {
        let mut graph = DiGraphMap::<u32, ()>::new();
        graph.add_node(9);
        graph.add_edge(1, 2, ());
        graph.add_edge(2, 1, ());

        let routing = RoutingGraph::from_graph(&graph);

        assert_eq!(routing.roots(), vec![1]);
    }

    #[test]
    fn no_roots_without_edges() {
        let mut graph = DiGraphMap::<u32, ()>::new();
        graph.add_node(0);
        graph.add_node(1);

        assert!(RoutingGraph::from_graph(&graph).roots().is_empty());
    }
}
