use crate::errors::SearchError;
use crate::graph::{Graph, NodeId};
use super::GraphNodeMap;
use super::shortest_path::shortest_path;

use std::collections::VecDeque;
use log::debug;


/// Unweighted shortest path by hop count (breadth-first search)
/// https://en.wikipedia.org/wiki/Breadth-first_search
/// FIFO expansion order visits nodes by non-decreasing depth, so the first
/// route found to any node is a minimum-hop route
pub fn breadth_first_search<D, C>(graph: &Graph<D, C>, start: NodeId, goal: NodeId) -> Result<Vec<NodeId>, SearchError> {

    if !graph.contains(start) {
        return Err(SearchError::InvalidInput(format!("start node {start:?} is not in the graph")));
    }
    if !graph.contains(goal) {
        return Err(SearchError::InvalidInput(format!("goal node {goal:?} is not in the graph")));
    }

    // came-from map, the recorded cost is the hop depth from the start
    // for the start node, parent_index is set to usize::MAX to indicate it has no parent
    let mut came_from: GraphNodeMap<NodeId, u32> = GraphNodeMap::default();
    let start_index = came_from.insert_full(start, (usize::MAX, 0)).0;

    // FIFO frontier of map indices
    let mut frontier: VecDeque<usize> = VecDeque::new();
    frontier.push_back(start_index);

    while let Some(index) = frontier.pop_front() {

        let (&current, &(_, depth)) = came_from.get_index(index).unwrap();

        // Stop expanding once the goal comes off the frontier
        if current == goal {
            return shortest_path(&came_from, index);
        }

        for edge in &graph.node(current).unwrap().neighbors {
            // First discovery wins, a node is never re-enqueued
            if !came_from.contains_key(&edge.to) {
                let neighbor_index = came_from.insert_full(edge.to, (index, depth + 1)).0;
                frontier.push_back(neighbor_index);
            }
        }
    }

    debug!("goal {goal:?} is not reachable from {start:?}");
    Err(SearchError::NoPathFound)
}
