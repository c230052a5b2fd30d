use crate::errors::SearchError;
use super::GraphNodeMap;

/// Construct the shortest path from the goal node back to the start node
/// Returns the ordered path as a vector of nodes from start to goal
/// node_map: GraphNodeMap<N, C> - map of nodes with their parent index and cost
/// goal_index: usize - index of the goal node in the node_map
pub(crate) fn shortest_path<N, C>(node_map: &GraphNodeMap<N, C>, goal_index: usize) -> Result<Vec<N>, SearchError>
where
    N: Clone,
{

    let mut path = Vec::new();
    let mut current_index = goal_index;

    // Trace back from goal to start
    // usize::MAX marks the start node, which has no parent
    while current_index != usize::MAX {
        // Add the current node to the path
        if let Some((node, &(parent_index, _))) = node_map.get_index(current_index) {
            path.push(node.clone());
            current_index = parent_index;
        } else {
            // Dangling parent slot - never fabricate a path through it
            return Err(SearchError::NoPathFound);
        }
    }

    // The path is in reverse order, so reverse it
    path.reverse();

    if path.is_empty() {
        return Err(SearchError::NoPathFound);
    }

    Ok(path)
}


/// Same backward walk, keeping the cumulative cost recorded for each node
pub(crate) fn shortest_path_with_costs<N, C>(node_map: &GraphNodeMap<N, C>, goal_index: usize) -> Result<Vec<(N, C)>, SearchError>
where
    N: Clone,
    C: Copy,
{

    let mut path = Vec::new();
    let mut current_index = goal_index;

    while current_index != usize::MAX {
        if let Some((node, &(parent_index, cost))) = node_map.get_index(current_index) {
            path.push((node.clone(), cost));
            current_index = parent_index;
        } else {
            return Err(SearchError::NoPathFound);
        }
    }

    path.reverse();

    if path.is_empty() {
        return Err(SearchError::NoPathFound);
    }

    Ok(path)
}
