//! Exhaustive simple-path enumeration.
//!
//! Depth-first search with backtracking: a node is marked while it is on the
//! current path and unmarked when the search backs out of it, so it can show
//! up on other candidate paths but never twice on the same one.
//!
//! The number of simple paths grows exponentially with graph density. This is
//! meant for city-scale networks (tens of nodes); callers must bound the
//! graph size before calling it. There is no cancellation point inside the
//! recursion.

/// Every simple path from `source` to `target`, in discovery order.
///
/// The search stops descending once it reaches `target`. Returns nothing
/// when either position is out of range.
pub(crate) fn all_simple_paths(matrix: &[Vec<Option<f64>>], source: usize, target: usize) -> Vec<Vec<usize>> {
    let node_count = matrix.len();
    if source >= node_count || target >= node_count {
        return Vec::new();
    }

    let mut search = PathSearch {
        matrix,
        target,
        visited: vec![false; node_count],
        current: Vec::with_capacity(node_count),
        paths: Vec::new(),
    };
    search.visit(source);
    search.paths
}

struct PathSearch<'a> {
    matrix: &'a [Vec<Option<f64>>],
    target: usize,
    visited: Vec<bool>,
    current: Vec<usize>,
    paths: Vec<Vec<usize>>,
}

impl PathSearch<'_> {
    fn visit(&mut self, node: usize) {
        self.visited[node] = true;
        self.current.push(node);

        if node == self.target {
            self.paths.push(self.current.clone());
        } else {
            for adj_node in 0..self.matrix.len() {
                if self.matrix[node][adj_node].is_some() && !self.visited[adj_node] {
                    self.visit(adj_node);
                }
            }
        }

        self.current.pop();
        self.visited[node] = false;
    }
}
