use crate::errors::SearchError;

use std::fmt::Debug;
use num_traits::Zero;


/// Handle to a node in a Graph arena
/// Assigned by add_node in insertion order, never reused or rewritten
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}


/// Directed edge with a cost captured at construction time
/// Later set_cost calls on either endpoint do not change it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<C> {
    pub from: NodeId,
    pub to: NodeId,
    pub cost: C,
}


/// Node in the arena
/// - cost is the cost of entering this node
/// - data is an opaque caller payload, e.g. display coordinates
#[derive(Debug, Clone)]
pub struct Node<D, C> {
    pub id: NodeId,
    pub cost: C,
    pub neighbors: Vec<Edge<C>>,
    pub data: D,
}


/// Arena of nodes addressed by index
/// The search algorithms only read it, construction and cost edits happen
/// before a search is launched
#[derive(Debug, Clone)]
pub struct Graph<D, C> {
    nodes: Vec<Node<D, C>>,
}

impl<D, C> Graph<D, C> {

    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn node(&self, id: NodeId) -> Option<&Node<D, C>> {
        self.nodes.get(id.0)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.nodes.len()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node<D, C>> {
        self.nodes.iter()
    }
}

impl<D, C: Zero + Ord + Copy + Debug> Graph<D, C> {

    /// Add a node with its entry cost and caller payload
    /// Negative costs break the shortest-path guarantee and are rejected
    pub fn add_node(&mut self, cost: C, data: D) -> Result<NodeId, SearchError> {
        if cost < C::zero() {
            return Err(SearchError::InvalidGraph(format!("negative node cost {cost:?}")));
        }

        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            id,
            cost,
            neighbors: Vec::new(),
            data,
        });
        Ok(id)
    }

    /// Add a directed edge, capturing the current cost of entering `to`
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) -> Result<(), SearchError> {
        let cost = self
            .node(to)
            .ok_or_else(|| SearchError::InvalidInput(format!("unknown edge target {to:?}")))?
            .cost;
        self.add_edge_with_cost(from, to, cost)
    }

    /// Add a directed edge with an explicit cost
    pub fn add_edge_with_cost(&mut self, from: NodeId, to: NodeId, cost: C) -> Result<(), SearchError> {
        if cost < C::zero() {
            return Err(SearchError::InvalidGraph(format!("negative edge cost {cost:?}")));
        }
        if !self.contains(to) {
            return Err(SearchError::InvalidInput(format!("unknown edge target {to:?}")));
        }

        let source = self
            .nodes
            .get_mut(from.0)
            .ok_or_else(|| SearchError::InvalidInput(format!("unknown edge source {from:?}")))?;
        source.neighbors.push(Edge { from, to, cost });
        Ok(())
    }

    /// Update a node's entry cost, e.g. on a cell edit in the caller's grid
    /// Existing edges keep the cost captured when they were built
    pub fn set_cost(&mut self, id: NodeId, cost: C) -> Result<(), SearchError> {
        if cost < C::zero() {
            return Err(SearchError::InvalidGraph(format!("negative node cost {cost:?}")));
        }

        let node = self
            .nodes
            .get_mut(id.0)
            .ok_or_else(|| SearchError::InvalidInput(format!("unknown node {id:?}")))?;
        node.cost = cost;
        Ok(())
    }
}

impl<D, C> Default for Graph<D, C> {
    fn default() -> Self {
        Self::new()
    }
}
