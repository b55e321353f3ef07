use std::fmt;

pub mod cycle;
pub mod kruskal;
pub mod parse;
pub mod union_find;

pub use cycle::{find_tree_path, locate_cycle, Cycle};
pub use kruskal::{run, Decision, KruskalRun, Step, Termination};
pub use union_find::UnionFind;

/// Vertex identifier. Input vertices are numbered `1..=n`.
pub type Vertex = usize;

/// Integer edge weight. Sums are not overflow-checked beyond the usual debug assertions.
pub type Weight = i64;

/// Represents an undirected, weighted edge in a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub src: Vertex,
    pub dst: Vertex,
    pub weight: Weight,
}

impl Edge {
    pub fn new(src: Vertex, dst: Vertex, weight: Weight) -> Self {
        Self { src, dst, weight }
    }

    /// Returns `true` if the edge joins `a` and `b` in either direction.
    pub fn connects(&self, a: Vertex, b: Vertex) -> bool {
        (self.src == a && self.dst == b) || (self.src == b && self.dst == a)
    }

    pub fn is_self_loop(&self) -> bool {
        self.src == self.dst
    }
}

/// Formats as `(u;v:w)`.
impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({};{}:{})", self.src, self.dst, self.weight)
    }
}

/// An undirected multigraph given as a vertex count and an edge list.
///
/// Parallel edges, self-loops and negative weights are kept as they are.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Graph {
    pub num_vertices: usize,
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn new(num_vertices: usize, edges: Vec<Edge>) -> Self {
        Self {
            num_vertices,
            edges,
        }
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_display() {
        assert_eq!(Edge::new(1, 2, 7).to_string(), "(1;2:7)");
        assert_eq!(Edge::new(3, 4, -2).to_string(), "(3;4:-2)");
    }

    #[test]
    fn test_edge_connects_either_direction() {
        let e = Edge::new(4, 1, 4);
        assert!(e.connects(4, 1));
        assert!(e.connects(1, 4));
        assert!(!e.connects(1, 3));
        assert!(!e.is_self_loop());
        assert!(Edge::new(2, 2, 0).is_self_loop());
    }
}
