//! Graph abstract data type.

use crate::error::GraphError;
use crate::traits::{Edge, Node};

/// Container contract shared by graph implementations.
///
/// Mutations report failure through `GraphError` and leave the graph
/// untouched when they fail. Lookups and searches never fail: unknown ids
/// produce `None` or an empty result.
pub trait Graph {
    type Node: Node + Clone;
    type Edge: Edge + Clone + PartialEq;

    /// Appends a node. Rejects an id that is already present.
    fn add_node(&mut self, node: Self::Node) -> Result<(), GraphError>;

    /// Records a directed edge. Both endpoints must already be nodes and the
    /// edge must not equal one already present.
    fn add_edge(&mut self, edge: Self::Edge) -> Result<(), GraphError>;

    /// Removes a node together with every edge touching it.
    fn remove_node(&mut self, id: &str) -> Result<Self::Node, GraphError>;

    /// Removes the directed edge `from -> to`.
    fn remove_edge(&mut self, from: &str, to: &str) -> Result<Self::Edge, GraphError>;

    /// Copy of the nodes, in insertion order.
    fn nodes(&self) -> Vec<Self::Node>;

    /// Copy of the edges, in insertion order.
    fn edges(&self) -> Vec<Self::Edge>;

    fn node(&self, id: &str) -> Option<&Self::Node>;

    /// Lowest-weight path from `from` to `to`, as an ordered node sequence.
    ///
    /// Empty when either endpoint is unknown or no path exists.
    fn find_path(&self, from: &str, to: &str) -> Vec<Self::Node>;

    fn node_count(&self) -> usize;

    fn edge_count(&self) -> usize;

    fn contains_node(&self, id: &str) -> bool {
        self.node(id).is_some()
    }
}
