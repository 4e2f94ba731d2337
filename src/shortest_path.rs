//! Dijkstra over the dense weight matrix.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::trace;

const INVALID_NODE: usize = usize::MAX;

/// A path found by a search, as positions in the graph's node list.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct IndexPath {
    pub nodes: Vec<usize>,
    pub weight: f64,
}

#[derive(Copy, Clone, Debug)]
struct HeapItem {
    node: usize,
    weight: f64,
}

impl PartialEq for HeapItem {
    fn eq(&self, other: &HeapItem) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapItem {}

impl PartialOrd for HeapItem {
    fn partial_cmp(&self, other: &HeapItem) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // Flip weight to make this a min-heap
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| self.node.cmp(&other.node))
    }
}

/// Lowest-weight path from `source` to `target`.
///
/// Assumes every weight in the matrix is non-negative; the graph rejects
/// other weights when edges are added. Returns `None` when `target` is not
/// reachable or either position is out of range.
pub(crate) fn dijkstra(matrix: &[Vec<Option<f64>>], source: usize, target: usize) -> Option<IndexPath> {
    let node_count = matrix.len();
    if source >= node_count || target >= node_count {
        return None;
    }

    if source == target {
        return Some(IndexPath {
            nodes: vec![source],
            weight: 0.0,
        });
    }

    let mut weights = vec![f64::INFINITY; node_count];
    let mut parents = vec![INVALID_NODE; node_count];
    let mut settled = vec![false; node_count];
    let mut heap = BinaryHeap::with_capacity(node_count);

    weights[source] = 0.0;
    heap.push(HeapItem {
        node: source,
        weight: 0.0,
    });

    let mut iterations = 0;

    while let Some(HeapItem { node, weight }) = heap.pop() {
        if settled[node] {
            continue;
        }

        // Stale heap entry
        if weight > weights[node] {
            continue;
        }

        settled[node] = true;
        iterations += 1;

        if node == target {
            break;
        }

        for (adj_node, cell) in matrix[node].iter().enumerate() {
            let Some(edge_weight) = cell else {
                continue;
            };

            if settled[adj_node] {
                continue;
            }

            let next_weight = weight + edge_weight;
            if next_weight < weights[adj_node] {
                weights[adj_node] = next_weight;
                parents[adj_node] = node;
                heap.push(HeapItem {
                    node: adj_node,
                    weight: next_weight,
                });
            }
        }
    }

    trace!(source, target, iterations, "dijkstra finished");

    if parents[target] == INVALID_NODE {
        return None;
    }

    let mut nodes = vec![target];
    let mut node = target;
    while parents[node] != INVALID_NODE {
        node = parents[node];
        nodes.push(node);
    }
    nodes.reverse();

    Some(IndexPath {
        nodes,
        weight: weights[target],
    })
}
