//! Graph search core: a binary-heap priority queue, a weighted node/edge
//! graph, and shortest path algorithms (breadth-first and uniform-cost)
//! over it. Graph construction and rendering live with the caller.

pub mod collections;
pub mod errors;
pub mod graph;
pub mod search;
