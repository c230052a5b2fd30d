pub mod bfs;
pub mod ucs;
mod shortest_path;

pub use bfs::breadth_first_search;
pub use ucs::uniform_cost_search;

use crate::collections::FxIndexMap;

/// Type alias for the came-from map used by the search algorithms
/// N: Node handle on the graph
/// C: Cost of reaching the node from the start (hop depth for BFS)
/// The tuple contains (parent_index, cost) where:
/// - parent_index is the index of the parent node in the map
/// - cost is the best known cost to reach this node from the start
pub type GraphNodeMap<N, C> = FxIndexMap<N, (usize, C)>;
