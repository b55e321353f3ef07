use std::fmt;

use super::{Edge, Vertex, Weight};

/// A closed walk made of tree edges plus the one rejected edge that closes it.
///
/// Edges are oriented in traversal order, so `edges[i].dst == edges[i + 1].src`
/// and the last edge ends where the first one starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cycle {
    edges: Vec<Edge>,
}

impl Cycle {
    /// Closes a tree path running from `rejected.src` to `rejected.dst` with the
    /// rejected edge itself.
    ///
    /// The result is rotated to start at the first path vertex that is not an
    /// endpoint of the rejected edge. Cycles with no such vertex (a parallel edge
    /// or a self-loop) start at the rejected edge's source.
    pub fn close(path: Vec<Edge>, rejected: &Edge) -> Self {
        let mut edges = path;
        edges.push(Edge::new(rejected.dst, rejected.src, rejected.weight));

        let start = edges
            .iter()
            .skip(1)
            .position(|e| e.src != rejected.src && e.src != rejected.dst)
            .map_or(0, |i| i + 1);
        edges.rotate_left(start);

        Self { edges }
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Vertices in visiting order, without repeating the first one at the end.
    pub fn vertices(&self) -> Vec<Vertex> {
        self.edges.iter().map(|e| e.src).collect()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, edge) in self.edges.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{edge}")?;
        }
        Ok(())
    }
}

/// Finds the cycle that `rejected` would close in the forest `tree`.
///
/// Returns `None` if the endpoints of `rejected` are not connected in `tree`.
pub fn locate_cycle(tree: &[Edge], rejected: &Edge) -> Option<Cycle> {
    tree_path(tree, rejected.src, rejected.dst).map(|path| Cycle::close(path, rejected))
}

/// Returns the unique simple path between `from` and `to` in the forest `tree`,
/// in `from -> to` order, or `None` if they lie in different trees.
///
/// # Examples
/// ```
/// use kruskal_trace::graph::{find_tree_path, Edge};
///
/// let tree = vec![Edge::new(1, 2, 1), Edge::new(2, 3, 2)];
/// assert_eq!(find_tree_path(&tree, 1, 3), Some(vec![1, 2, 3]));
/// ```
pub fn find_tree_path(tree: &[Edge], from: Vertex, to: Vertex) -> Option<Vec<Vertex>> {
    let edges = tree_path(tree, from, to)?;
    let mut path = Vec::with_capacity(edges.len() + 1);
    path.push(from);
    path.extend(edges.iter().map(|e| e.dst));
    Some(path)
}

/// Depth-first search over the tree's adjacency lists, recording each vertex's
/// predecessor and the weight of the edge it was reached through.
fn tree_path(tree: &[Edge], from: Vertex, to: Vertex) -> Option<Vec<Edge>> {
    let slots = tree
        .iter()
        .flat_map(|e| [e.src, e.dst])
        .chain([from, to])
        .max()
        .map_or(0, |max| max + 1);

    let mut adjacency: Vec<Vec<(Vertex, Weight)>> = vec![Vec::new(); slots];
    for edge in tree {
        adjacency[edge.src].push((edge.dst, edge.weight));
        adjacency[edge.dst].push((edge.src, edge.weight));
    }

    let mut visited = vec![false; slots];
    let mut predecessor: Vec<Option<(Vertex, Weight)>> = vec![None; slots];
    let mut stack = vec![from];
    visited[from] = true;

    while let Some(node) = stack.pop() {
        if node == to {
            break;
        }
        for &(next, weight) in &adjacency[node] {
            if !visited[next] {
                visited[next] = true;
                predecessor[next] = Some((node, weight));
                stack.push(next);
            }
        }
    }

    if !visited[to] {
        return None;
    }

    let mut path = Vec::new();
    let mut current = to;
    while let Some((prev, weight)) = predecessor[current] {
        path.push(Edge::new(prev, current, weight));
        current = prev;
    }
    path.reverse();
    Some(path)
}
