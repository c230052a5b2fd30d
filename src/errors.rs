#[derive(Debug)]
pub enum SearchError {
    NoPathFound, // Unable to find a path to the goal
    InvalidInput(String), // A referenced node is not part of the graph
    InvalidGraph(String), // Graph violates a search precondition, e.g. a negative cost
}
