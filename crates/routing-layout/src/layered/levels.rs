use super::graph::RoutingGraph;
use std::collections::VecDeque;
use tracing::trace;

/// Result of the longest-path layering pass
#[derive(Debug, Clone)]
pub(crate) struct Levels {
    /// Level of every node, by arena index
    pub levels: Vec<usize>,
    /// Highest level reached by the traversal
    pub max: usize,
}

/// Assign each node the longest path length from a root
///
/// Breadth-first relaxation: a successor is queued once all of its other
/// predecessors have been expanded, so in an acyclic graph every node is
/// expanded only after its level is final. Levels only ever increase.
pub(crate) fn assign_levels<N>(graph: &RoutingGraph<N>, roots: &[usize]) -> Levels {
    let mut levels = vec![0; graph.len()];
    let mut expanded = vec![false; graph.len()];
    let mut queue: VecDeque<usize> = roots.iter().copied().collect();
    let mut max = 0;

    // A node may be queued more than once before its first expansion, and is
    // then expanded each time. Once expanded it is never queued again.
    while let Some(node) = queue.pop_front() {
        for &succ in graph.successors(node) {
            let candidate = levels[node] + 1;
            if candidate > levels[succ] {
                trace!("Level of #{succ} raised to {candidate} by #{node}");
                levels[succ] = candidate;
            }
            max = max.max(levels[succ]);

            let ready = graph
                .predecessors(succ)
                .iter()
                .all(|&pred| expanded[pred] || pred == node);
            if !expanded[succ] && ready {
                queue.push_back(succ);
            }
        }

        expanded[node] = true;
    }

    Levels { levels, max }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petgraph::graphmap::DiGraphMap;
    use test_log::test;

    fn levels_of(edges: &[(u32, u32)]) -> Levels {
        let graph = DiGraphMap::<u32, ()>::from_edges(edges.iter().copied());
        let routing = RoutingGraph::from_graph(&graph);
        assign_levels(&routing, &routing.roots())
    }

    #[test]
    fn chain() {
        let levels = levels_of(&[(0, 1), (1, 2)]);
        assert_eq!(levels.levels, vec![0, 1, 2]);
        assert_eq!(levels.max, 2);
    }

    #[test]
    fn longest_path_wins_over_shortcut() {
        // 0 -> 1 -> 2 -> 3 and a shortcut 0 -> 3, arena order is 0, 3, 1, 2
        let levels = levels_of(&[(0, 3), (0, 1), (1, 2), (2, 3)]);
        assert_eq!(levels.levels, vec![0, 3, 1, 2]);
        assert_eq!(levels.max, 3);
    }

    #[test]
    fn diamond_with_uneven_branches() {
        // 0 -> 1 -> 3, 0 -> 2 -> 4 -> 3
        let levels = levels_of(&[(0, 1), (0, 2), (1, 3), (2, 4), (4, 3)]);
        assert_eq!(levels.levels, vec![0, 1, 1, 3, 2]);
    }

    #[test]
    fn cycle_terminates() {
        let levels = levels_of(&[(0, 1), (1, 2), (2, 0)]);
        assert_eq!(levels.levels.len(), 3);
        assert_eq!(levels.levels[1], 1);
    }

    #[test]
    fn self_loop_node_waits_on_itself() {
        let levels = levels_of(&[(0, 1), (1, 1), (1, 2)]);
        assert_eq!(levels.levels, vec![0, 1, 0]);
        assert_eq!(levels.max, 1);
    }

    #[test]
    fn lone_self_loop_is_expanded_twice() {
        // Queued again by its own first expansion, raised once more by the second
        let levels = levels_of(&[(0, 0)]);
        assert_eq!(levels.levels, vec![2]);
        assert_eq!(levels.max, 2);
    }

    #[test]
    fn self_loop_on_fallback_root_pushes_successors() {
        // 0 -> 0, 0 -> 1: the second expansion of 0 raises 1 to 3
        let levels = levels_of(&[(0, 0), (0, 1)]);
        assert_eq!(levels.levels, vec![2, 3]);
        assert_eq!(levels.max, 3);
    }
}
