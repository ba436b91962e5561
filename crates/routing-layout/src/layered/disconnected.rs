use super::graph::RoutingGraph;
use super::lanes::{mean_lane, Lanes};
use tracing::{debug, trace};

/// Place every node the lane pass left behind
///
/// Stranded nodes (connected but never reached, e.g. inside a cycle with no
/// path from a root) keep their level and settle near their placed
/// predecessors. Isolated nodes then get a column of their own after the
/// last level, one fresh lane each, in input order.
pub(crate) fn place_disconnected<N>(
    graph: &RoutingGraph<N>,
    levels: &mut [usize],
    max_level: usize,
    lanes: &mut Lanes,
) {
    let mut stranded = 0;
    for node in 0..graph.len() {
        if lanes.finalized[node] || graph.record(node).is_isolated() {
            continue;
        }

        let preferred = mean_lane(
            graph
                .predecessors(node)
                .iter()
                .filter(|&&pred| lanes.finalized[pred])
                .map(|&pred| lanes.lanes[pred]),
        );
        let lane = lanes.settle(node, levels[node], preferred);
        trace!("Stranded node #{node} placed at ({}, {lane})", levels[node]);
        stranded += 1;
    }

    let mut isolated = 0;
    for node in 0..graph.len() {
        if !graph.record(node).is_isolated() {
            continue;
        }

        levels[node] = max_level + 1;
        let lane = lanes.count;
        lanes.settle(node, levels[node], lane);
        isolated += 1;
    }

    if stranded + isolated > 0 {
        debug!("Placed {stranded} stranded and {isolated} isolated nodes");
    }
}
