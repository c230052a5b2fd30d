use crate::collections::PriorityQueue;
use crate::errors::SearchError;
use crate::graph::{Graph, NodeId};
use super::GraphNodeMap;
use super::shortest_path::shortest_path_with_costs;

use std::{cmp::Reverse, fmt::Debug};
use num_traits::Zero;
use indexmap::map::Entry::{Occupied, Vacant};
use log::debug;


/// Weighted shortest path by cumulative edge cost (uniform-cost search)
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// The frontier is the max-heap PriorityQueue keyed by Reverse(cost), so the
/// cheapest cumulative cost is always popped first
pub fn uniform_cost_search<D, C>(graph: &Graph<D, C>, start: NodeId, goal: NodeId) -> Result<Vec<(NodeId, C)>, SearchError>
where
    C: Zero + Ord + Copy + Debug,
{

    if !graph.contains(start) {
        return Err(SearchError::InvalidInput(format!("start node {start:?} is not in the graph")));
    }
    if !graph.contains(goal) {
        return Err(SearchError::InvalidInput(format!("goal node {goal:?} is not in the graph")));
    }

    // came-from map with the best known cumulative cost for each node
    // for the start node, parent_index is set to usize::MAX to indicate it has no parent
    let mut came_from: GraphNodeMap<NodeId, C> = GraphNodeMap::default();
    let start_index = came_from.insert_full(start, (usize::MAX, C::zero())).0;

    // Frontier entries carry (map index, cumulative cost at enqueue time)
    let mut frontier: PriorityQueue<(usize, C), Reverse<C>> = PriorityQueue::new();
    frontier.add((start_index, C::zero()), Reverse(C::zero()));

    while let Some((index, cost)) = frontier.pop() {

        // fetch current best cost for node
        let (&current, &(_, best)) = came_from.get_index(index).unwrap();

        // A cheaper route to this node was recorded after this entry was
        // queued, the entry is stale
        if cost > best {
            continue;
        }

        if current == goal {
            return shortest_path_with_costs(&came_from, index);
        }

        for edge in &graph.node(current).unwrap().neighbors {

            // cost of the path so far plus the captured cost of entering the neighbor
            let new_cost = cost + edge.cost;

            let neighbor_index;
            match came_from.entry(edge.to) {
                Vacant(e) => {
                    // This is the first time we're seeing this neighbor
                    neighbor_index = e.index();
                    e.insert((index, new_cost));
                }
                Occupied(mut e) => {
                    if e.get().1 > new_cost {
                        // Strict improvement, reparent the neighbor
                        neighbor_index = e.index();
                        e.insert((index, new_cost));
                    } else {
                        // The existing route is at least as good, equal-cost
                        // routes keep the old parent
                        continue;
                    }
                }
            }

            // Queue with the fresh cumulative cost so the frontier pops in
            // true cost order
            frontier.add((neighbor_index, new_cost), Reverse(new_cost));
        }
    }

    debug!("goal {goal:?} is not reachable from {start:?}");
    Err(SearchError::NoPathFound)
}
