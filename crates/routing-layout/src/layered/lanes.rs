use super::graph::RoutingGraph;
use std::collections::{HashSet, VecDeque};
use tracing::trace;

/// Set of `(level, lane)` cells held by finalized nodes
#[derive(Debug, Clone, Default)]
pub(crate) struct Occupancy {
    cells: HashSet<(usize, usize)>,
}

impl Occupancy {
    /// Take the first free lane at `level`, starting from `lane` and moving up
    pub fn claim(&mut self, level: usize, mut lane: usize) -> usize {
        while self.cells.contains(&(level, lane)) {
            lane += 1;
        }
        self.cells.insert((level, lane));
        lane
    }
}

/// Lane state shared by the lane pass and disconnected placement
#[derive(Debug, Clone)]
pub(crate) struct Lanes {
    /// Lane of every node, by arena index
    pub lanes: Vec<usize>,
    pub finalized: Vec<bool>,
    pub occupied: Occupancy,
    /// One past the highest lane handed out so far
    pub count: usize,
}

impl Lanes {
    fn new(len: usize) -> Self {
        Self {
            lanes: vec![0; len],
            finalized: vec![false; len],
            occupied: Occupancy::default(),
            count: 0,
        }
    }

    /// Finalize `node` on the first free lane at or after `preferred`
    pub fn settle(&mut self, node: usize, level: usize, preferred: usize) -> usize {
        let lane = self.occupied.claim(level, preferred);
        if lane != preferred {
            trace!("Lane {preferred} taken on level {level}, #{node} moved to lane {lane}");
        }
        self.lanes[node] = lane;
        self.finalized[node] = true;
        self.count = self.count.max(lane + 1);
        lane
    }

    /// Highest lane handed out, if any
    pub fn max(&self) -> Option<usize> {
        self.count.checked_sub(1)
    }
}

/// Mean of the given lanes, rounding halves up
pub(crate) fn mean_lane(lanes: impl IntoIterator<Item = usize>) -> usize {
    let (sum, count) = lanes
        .into_iter()
        .fold((0, 0), |(sum, count), lane| (sum + lane, count + 1));
    if count == 0 {
        return 0;
    }
    (2 * sum + count) / (2 * count)
}

/// Spread nodes over parallel lanes within their level
///
/// Roots take consecutive lanes. A node with a single predecessor inherits
/// its lane, a merge node waits for all its predecessors and takes their
/// mean lane. Collisions move the node to the next free lane of its level.
pub(crate) fn assign_lanes<N>(graph: &RoutingGraph<N>, levels: &[usize], roots: &[usize]) -> Lanes {
    let mut lanes = Lanes::new(graph.len());
    let mut queue = VecDeque::with_capacity(graph.len());

    for (lane, &root) in roots.iter().enumerate() {
        lanes.settle(root, levels[root], lane);
        queue.push_back(root);
    }

    while let Some(node) = queue.pop_front() {
        for &succ in graph.successors(node) {
            if lanes.finalized[succ] {
                continue;
            }

            let preds = graph.predecessors(succ);
            let preferred = if preds.len() > 1 {
                if !preds.iter().all(|&pred| lanes.finalized[pred] || pred == node) {
                    continue;
                }
                mean_lane(preds.iter().map(|&pred| lanes.lanes[pred]))
            } else {
                lanes.lanes[node]
            };

            lanes.settle(succ, levels[succ], preferred);
            queue.push_back(succ);
        }
    }

    lanes
}
