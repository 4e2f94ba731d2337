//! Adjacency-matrix graph engine.
//!
//! Nodes live in a dense vector; edges refer to them by id and the id → index
//! map resolves those ids to matrix rows/columns. A cell holds the weight of
//! the directed edge between two positions, or `None` when there is no edge,
//! so zero-weight edges stay distinguishable from missing ones.
//!
//! Not synchronized. Mutating a graph that another thread is searching is a
//! caller bug; share a finished graph immutably or rebuild and swap a new one
//! (see `crate::service::SharedRouteService`).

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::all_paths::all_simple_paths;
use crate::error::GraphError;
use crate::graph::Graph;
use crate::shortest_path::dijkstra;
use crate::traits::{Edge, Node};

/// Largest edge weight `add_edge` accepts. Path weights are sums of at most
/// one edge per node, so they stay finite for any graph that fits in memory.
pub const MAX_EDGE_WEIGHT: f64 = 1e12;

/// Size and connectivity summary, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStatistics {
    pub node_count: usize,
    pub edge_count: usize,
    pub connected: bool,
}

impl fmt::Display for GraphStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "nodes: {}, edges: {}, connected: {}",
            self.node_count,
            self.edge_count,
            if self.connected { "yes" } else { "no" }
        )
    }
}

#[derive(Debug, Clone)]
pub struct AdjacencyMatrixGraph<N, E> {
    nodes: Vec<N>,
    edges: Vec<E>,
    matrix: Vec<Vec<Option<f64>>>,
    node_index: HashMap<String, usize>,
}

impl<N, E> Default for AdjacencyMatrixGraph<N, E> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            matrix: Vec::new(),
            node_index: HashMap::new(),
        }
    }
}

impl<N, E> AdjacencyMatrixGraph<N, E>
where
    N: Node + Clone,
    E: Edge + Clone + PartialEq,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Current position of a node in the node list and matrix.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.node_index.get(id).copied()
    }

    /// Weight of the direct edge `from -> to`, if there is one.
    pub fn weight_between(&self, from: &str, to: &str) -> Option<f64> {
        let from = self.index_of(from)?;
        let to = self.index_of(to)?;
        self.matrix[from][to]
    }

    /// The dense weight matrix, indexed by node position.
    pub fn adjacency_matrix(&self) -> &[Vec<Option<f64>>] {
        &self.matrix
    }

    /// Accumulated weight of the lowest-weight path, `None` when unreachable.
    pub fn shortest_path_weight(&self, from: &str, to: &str) -> Option<f64> {
        let source = self.index_of(from)?;
        let target = self.index_of(to)?;
        dijkstra(&self.matrix, source, target).map(|path| path.weight)
    }

    /// Every simple path from `from` to `to`.
    ///
    /// Exponential in the worst case. Only call this on city-scale graphs
    /// (tens of nodes); bound the graph size before calling it.
    pub fn find_all_paths(&self, from: &str, to: &str) -> Vec<Vec<N>> {
        let (Some(source), Some(target)) = (self.index_of(from), self.index_of(to)) else {
            return Vec::new();
        };

        all_simple_paths(&self.matrix, source, target)
            .into_iter()
            .map(|path| self.materialize(&path))
            .collect()
    }

    /// Nodes reachable from `id` through a single outgoing edge.
    pub fn direct_connections(&self, id: &str) -> Vec<N> {
        let Some(index) = self.index_of(id) else {
            return Vec::new();
        };

        self.matrix[index]
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_some())
            .map(|(adj, _)| self.nodes[adj].clone())
            .collect()
    }

    /// The edge `from -> to`, if present.
    pub fn find_edge(&self, from: &str, to: &str) -> Option<&E> {
        self.edges
            .iter()
            .find(|edge| edge.source_id() == from && edge.target_id() == to)
    }

    /// Whether every node is reachable from the first one when edges are
    /// followed in either direction. An empty graph is connected.
    pub fn is_connected(&self) -> bool {
        let node_count = self.nodes.len();
        if node_count == 0 {
            return true;
        }

        let mut visited = vec![false; node_count];
        let mut stack = vec![0];
        visited[0] = true;
        let mut visited_count = 1;

        while let Some(node) = stack.pop() {
            for adj in 0..node_count {
                if visited[adj] {
                    continue;
                }
                if self.matrix[node][adj].is_some() || self.matrix[adj][node].is_some() {
                    visited[adj] = true;
                    visited_count += 1;
                    stack.push(adj);
                }
            }
        }

        visited_count == node_count
    }

    pub fn statistics(&self) -> GraphStatistics {
        GraphStatistics {
            node_count: self.nodes.len(),
            edge_count: self.edges.len(),
            connected: self.is_connected(),
        }
    }

    fn materialize(&self, path: &[usize]) -> Vec<N> {
        path.iter().map(|&index| self.nodes[index].clone()).collect()
    }

    /// Reallocates the matrix for an additional node, keeping existing cells.
    fn grow_matrix(&mut self) {
        let size = self.nodes.len();
        let mut matrix = vec![vec![None; size]; size];
        for (row, old_row) in matrix.iter_mut().zip(&self.matrix) {
            row[..old_row.len()].copy_from_slice(old_row);
        }
        self.matrix = matrix;
    }

    /// Rebuilds the index map and the matrix from the node and edge lists.
    fn rebuild(&mut self) {
        self.node_index = self
            .nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (node.id().to_string(), index))
            .collect();

        let size = self.nodes.len();
        let mut matrix = vec![vec![None; size]; size];
        for edge in &self.edges {
            let from = self.node_index[edge.source_id()];
            let to = self.node_index[edge.target_id()];
            matrix[from][to] = Some(edge.weight());
        }
        self.matrix = matrix;

        debug!(nodes = size, edges = self.edges.len(), "rebuilt adjacency matrix");
    }
}

impl<N, E> Graph for AdjacencyMatrixGraph<N, E>
where
    N: Node + Clone,
    E: Edge + Clone + PartialEq,
{
    type Node = N;
    type Edge = E;

    fn add_node(&mut self, node: N) -> Result<(), GraphError> {
        if self.node_index.contains_key(node.id()) {
            return Err(GraphError::DuplicateNode(node.id().to_string()));
        }

        self.node_index.insert(node.id().to_string(), self.nodes.len());
        self.nodes.push(node);
        self.grow_matrix();
        Ok(())
    }

    fn add_edge(&mut self, edge: E) -> Result<(), GraphError> {
        let Some(from) = self.index_of(edge.source_id()) else {
            return Err(GraphError::UnknownEndpoint(edge.source_id().to_string()));
        };
        let Some(to) = self.index_of(edge.target_id()) else {
            return Err(GraphError::UnknownEndpoint(edge.target_id().to_string()));
        };

        if self.edges.contains(&edge) {
            return Err(GraphError::DuplicateEdge {
                from: edge.source_id().to_string(),
                to: edge.target_id().to_string(),
            });
        }

        let weight = edge.weight();
        if !(0.0..=MAX_EDGE_WEIGHT).contains(&weight) {
            return Err(GraphError::InvalidWeight {
                from: edge.source_id().to_string(),
                to: edge.target_id().to_string(),
                weight,
            });
        }

        for (attribute, value) in [("distance", edge.distance_km()), ("cost", edge.cost())] {
            if !value.is_finite() || value < 0.0 {
                return Err(GraphError::InvalidAttribute {
                    from: edge.source_id().to_string(),
                    to: edge.target_id().to_string(),
                    attribute,
                    value,
                });
            }
        }

        self.matrix[from][to] = Some(weight);
        self.edges.push(edge);
        Ok(())
    }

    fn remove_node(&mut self, id: &str) -> Result<N, GraphError> {
        let Some(index) = self.index_of(id) else {
            return Err(GraphError::NodeNotFound(id.to_string()));
        };

        self.edges
            .retain(|edge| edge.source_id() != id && edge.target_id() != id);
        let node = self.nodes.remove(index);
        self.rebuild();
        Ok(node)
    }

    fn remove_edge(&mut self, from: &str, to: &str) -> Result<E, GraphError> {
        let Some(position) = self
            .edges
            .iter()
            .position(|edge| edge.source_id() == from && edge.target_id() == to)
        else {
            return Err(GraphError::EdgeNotFound {
                from: from.to_string(),
                to: to.to_string(),
            });
        };

        let edge = self.edges.remove(position);
        let row = self.node_index[from];
        let column = self.node_index[to];
        // A parallel edge between the same endpoints keeps the cell alive.
        self.matrix[row][column] = self
            .edges
            .iter()
            .rev()
            .find(|other| other.source_id() == from && other.target_id() == to)
            .map(|other| other.weight());
        Ok(edge)
    }

    fn nodes(&self) -> Vec<N> {
        self.nodes.clone()
    }

    fn edges(&self) -> Vec<E> {
        self.edges.clone()
    }

    fn node(&self, id: &str) -> Option<&N> {
        self.index_of(id).map(|index| &self.nodes[index])
    }

    fn find_path(&self, from: &str, to: &str) -> Vec<N> {
        let (Some(source), Some(target)) = (self.index_of(from), self.index_of(to)) else {
            return Vec::new();
        };

        dijkstra(&self.matrix, source, target)
            .map(|path| self.materialize(&path.nodes))
            .unwrap_or_default()
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
