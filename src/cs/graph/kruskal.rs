use log::{debug, info};

use super::cycle::{locate_cycle, Cycle};
use super::union_find::UnionFind;
use super::{Edge, Graph, Vertex, Weight};
use crate::error::{GraphError, Result};

/// Outcome of evaluating one edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// The endpoints were in different components, which were merged.
    Accepted {
        src_root: Vertex,
        dst_root: Vertex,
        /// Representative of the merged component.
        root: Vertex,
    },
    /// The endpoints already shared `root`; adding the edge would close `cycle`.
    Rejected { root: Vertex, cycle: Cycle },
}

/// One evaluated edge, in processing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Position of `edge` in the sorted edge list.
    pub index: usize,
    pub edge: Edge,
    /// Number of tree edges once this step is applied.
    pub tree_len: usize,
    pub decision: Decision,
}

impl Step {
    pub fn is_accepted(&self) -> bool {
        matches!(self.decision, Decision::Accepted { .. })
    }

    /// The cycle this edge would have closed, for rejected edges.
    pub fn cycle(&self) -> Option<&Cycle> {
        match &self.decision {
            Decision::Rejected { cycle, .. } => Some(cycle),
            Decision::Accepted { .. } => None,
        }
    }
}

/// How the algorithm ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The tree has `n - 1` edges and spans every vertex.
    SpanningTree,
    /// The graph is disconnected; the result is one tree per component.
    SpanningForest { components: usize },
}

/// Complete record of a Kruskal run: the input, every decision, and the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KruskalRun {
    pub num_vertices: usize,
    /// Edges in input order.
    pub original: Vec<Edge>,
    /// Edges in processing order.
    pub sorted: Vec<Edge>,
    pub steps: Vec<Step>,
    /// Accepted edges in acceptance order.
    pub tree: Vec<Edge>,
    pub total_weight: Weight,
}

impl KruskalRun {
    /// Distinct edge weights in ascending order.
    pub fn distinct_weights(&self) -> Vec<Weight> {
        let mut weights: Vec<Weight> = self.sorted.iter().map(|e| e.weight).collect();
        weights.dedup();
        weights
    }

    /// Edges not yet evaluated once `step` has been applied.
    pub fn remaining_after(&self, step: &Step) -> &[Edge] {
        &self.sorted[step.index + 1..]
    }

    /// Tree edges once `step` has been applied.
    pub fn tree_after(&self, step: &Step) -> &[Edge] {
        &self.tree[..step.tree_len]
    }

    pub fn rejected(&self) -> impl Iterator<Item = &Step> {
        self.steps.iter().filter(|s| !s.is_accepted())
    }

    /// Number of edges a spanning tree on these vertices has.
    pub fn required_edges(&self) -> usize {
        self.num_vertices.saturating_sub(1)
    }

    /// Number of connected components of the input graph.
    pub fn components(&self) -> usize {
        self.num_vertices.saturating_sub(self.tree.len())
    }

    pub fn termination(&self) -> Termination {
        if self.tree.len() == self.required_edges() {
            Termination::SpanningTree
        } else {
            Termination::SpanningForest {
                components: self.components(),
            }
        }
    }

    pub fn is_spanning_tree(&self) -> bool {
        self.termination() == Termination::SpanningTree
    }
}

/// Kruskal's algorithm to compute the MST for an undirected, weighted graph.
///
/// Edges are sorted by weight (ties keep their input order) and evaluated one by
/// one. An edge joining two components is added to the tree; an edge inside a
/// component is rejected and the cycle it would close is recorded. Every edge is
/// evaluated exactly once, so `steps.len()` always equals the edge count.
///
/// If the graph is disconnected, the result is a spanning forest of all
/// connected components, reported as [`Termination::SpanningForest`].
///
/// # Examples
/// ```
/// use kruskal_trace::graph::{kruskal, Edge, Graph};
///
/// let graph = Graph::new(
///     4,
///     vec![
///         Edge::new(1, 2, 1),
///         Edge::new(2, 3, 2),
///         Edge::new(3, 4, 3),
///         Edge::new(4, 1, 4),
///         Edge::new(1, 3, 5),
///     ],
/// );
/// let run = kruskal::run(&graph).unwrap();
/// assert_eq!(run.total_weight, 6);
/// assert_eq!(run.rejected().count(), 2);
/// ```
///
/// # Complexity
/// * Time: O(E log E + E α(V)), plus O(V) per rejected edge to explain its cycle
/// * Space: O(V + E)
///
/// # Errors
/// * `VertexOutOfRange` if an edge endpoint is outside `1..=num_vertices`
/// * `CycleNotFound` if the tree search disagrees with the union-find (never expected)
pub fn run(graph: &Graph) -> Result<KruskalRun> {
    graph.validate()?;

    let mut sorted = graph.edges.clone();
    sorted.sort_by_key(|e| e.weight);
    debug!(
        "sorted {} edges over {} vertices",
        sorted.len(),
        graph.num_vertices
    );

    // Slot 0 is never referenced by a valid edge.
    let mut uf = UnionFind::new(graph.num_vertices + 1);
    let mut tree = Vec::with_capacity(graph.num_vertices.saturating_sub(1));
    let mut total_weight: Weight = 0;
    let mut steps = Vec::with_capacity(sorted.len());

    for (index, edge) in sorted.iter().enumerate() {
        let src_root = uf.find(edge.src);
        let dst_root = uf.find(edge.dst);

        let decision = if src_root != dst_root {
            uf.union(edge.src, edge.dst);
            let root = uf.find(edge.src);
            tree.push(*edge);
            total_weight += edge.weight;
            debug!(
                "accept {edge}: roots {src_root} and {dst_root} merged into {root}, weight {total_weight}"
            );
            Decision::Accepted {
                src_root,
                dst_root,
                root,
            }
        } else {
            let cycle = locate_cycle(&tree, edge).ok_or(GraphError::CycleNotFound {
                src: edge.src,
                dst: edge.dst,
            })?;
            debug!("reject {edge}: both endpoints under root {src_root}, cycle {cycle}");
            Decision::Rejected {
                root: src_root,
                cycle,
            }
        };

        steps.push(Step {
            index,
            edge: *edge,
            tree_len: tree.len(),
            decision,
        });
    }

    let run = KruskalRun {
        num_vertices: graph.num_vertices,
        original: graph.edges.clone(),
        sorted,
        steps,
        tree,
        total_weight,
    };
    info!(
        "kruskal finished: {} tree edges, total weight {}, {:?}",
        run.tree.len(),
        run.total_weight,
        run.termination()
    );
    Ok(run)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(n: usize, edges: &[(Vertex, Vertex, Weight)]) -> Graph {
        Graph::new(
            n,
            edges.iter().map(|&(u, v, w)| Edge::new(u, v, w)).collect(),
        )
    }

    fn square_with_diagonal() -> Graph {
        graph(4, &[(1, 2, 1), (2, 3, 2), (3, 4, 3), (4, 1, 4), (1, 3, 5)])
    }

    #[test]
    fn test_empty_graph() {
        let run = run(&graph(0, &[])).unwrap();
        assert!(run.tree.is_empty(), "MST of empty graph should be empty");
        assert_eq!(run.total_weight, 0);
        assert_eq!(run.termination(), Termination::SpanningTree);
    }

    #[test]
    fn test_single_vertex_no_edges() {
        let run = run(&graph(1, &[])).unwrap();
        assert!(
            run.tree.is_empty(),
            "MST of single vertex with no edges should be empty"
        );
        assert!(run.is_spanning_tree());
    }

    #[test]
    fn test_square_with_diagonal() {
        let run = run(&square_with_diagonal()).unwrap();

        assert_eq!(
            run.tree,
            vec![Edge::new(1, 2, 1), Edge::new(2, 3, 2), Edge::new(3, 4, 3)]
        );
        assert_eq!(run.total_weight, 6);
        assert_eq!(run.termination(), Termination::SpanningTree);

        let rejected: Vec<Edge> = run.rejected().map(|s| s.edge).collect();
        assert_eq!(rejected, vec![Edge::new(4, 1, 4), Edge::new(1, 3, 5)]);
    }

    #[test]
    fn test_steps_record_union_roots() {
        let run = run(&square_with_diagonal()).unwrap();
        assert_eq!(run.steps.len(), 5);
        assert_eq!(
            run.steps[0].decision,
            Decision::Accepted {
                src_root: 1,
                dst_root: 2,
                root: 1
            }
        );
        assert_eq!(
            run.steps[1].decision,
            Decision::Accepted {
                src_root: 1,
                dst_root: 3,
                root: 1
            }
        );
        match &run.steps[3].decision {
            Decision::Rejected { root, cycle } => {
                assert_eq!(*root, 1);
                assert_eq!(cycle.to_string(), "(3;2:2) (2;1:1) (1;4:4) (4;3:3)");
            }
            other => panic!("expected rejection, got {other:?}"),
        }
        let cycle = run.steps[4].cycle().unwrap();
        assert_eq!(cycle.vertices(), vec![2, 3, 1]);
    }

    #[test]
    fn test_remaining_and_tree_views() {
        let run = run(&square_with_diagonal()).unwrap();
        let first = &run.steps[0];
        assert_eq!(run.remaining_after(first).len(), 4);
        assert_eq!(run.tree_after(first), &[Edge::new(1, 2, 1)]);

        let fourth = &run.steps[3];
        assert_eq!(run.remaining_after(fourth), &[Edge::new(1, 3, 5)]);
        assert_eq!(run.tree_after(fourth).len(), 3);

        let last = run.steps.last().unwrap();
        assert!(run.remaining_after(last).is_empty());
    }

    #[test]
    fn test_disconnected_components() {
        let run = run(&graph(5, &[(1, 2, 1), (3, 4, 2)])).unwrap();
        assert_eq!(
            run.tree.len(),
            2,
            "Should return one edge per connected component minus 1 edge each."
        );
        assert_eq!(run.total_weight, 3);
        assert_eq!(run.components(), 3);
        assert_eq!(
            run.termination(),
            Termination::SpanningForest { components: 3 }
        );
        assert_eq!(run.num_vertices - run.components(), run.tree.len());
    }

    #[test]
    fn test_standard_graph() {
        // (1)---10---(2)
        //  | \       /
        //  6  5    15
        //  |   \   /
        // (3)---4---(4)
        let run = run(&graph(
            4,
            &[(1, 2, 10), (1, 3, 6), (1, 4, 5), (2, 4, 15), (3, 4, 4)],
        ))
        .unwrap();

        assert_eq!(run.tree.len(), 3);
        assert_eq!(
            run.total_weight, 19,
            "Kruskal's MST should have a total weight of 19"
        );
        assert!(run.tree.contains(&Edge::new(3, 4, 4)));
        assert!(run.tree.contains(&Edge::new(1, 4, 5)));
        assert!(run.tree.contains(&Edge::new(1, 2, 10)));
    }

    #[test]
    fn test_negative_weights() {
        let run = run(&graph(4, &[(1, 2, -2), (2, 3, -3), (1, 3, -1), (3, 4, 2)])).unwrap();
        // picks (2-3 = -3), (1-2 = -2), rejects (1-3 = -1), picks (3-4 = 2)
        assert_eq!(run.tree.len(), 3);
        assert_eq!(
            run.total_weight, -3,
            "MST should properly handle negative weights"
        );
        assert_eq!(run.rejected().count(), 1);
    }

    #[test]
    fn test_parallel_edges() {
        let run = run(&graph(3, &[(1, 2, 10), (1, 2, 1), (2, 3, 5)])).unwrap();
        assert_eq!(run.tree, vec![Edge::new(1, 2, 1), Edge::new(2, 3, 5)]);

        let rejected = run.rejected().next().unwrap();
        assert_eq!(rejected.edge, Edge::new(1, 2, 10));
        assert_eq!(rejected.cycle().unwrap().to_string(), "(1;2:1) (2;1:10)");
    }

    #[test]
    fn test_self_loop_is_rejected() {
        let run = run(&graph(2, &[(1, 1, 0), (1, 2, 3)])).unwrap();
        assert_eq!(run.tree, vec![Edge::new(1, 2, 3)]);
        assert!(!run.steps[0].is_accepted());
        assert_eq!(run.steps[0].cycle().unwrap().len(), 1);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let run = run(&graph(3, &[(2, 3, 1), (1, 2, 1), (1, 3, 1)])).unwrap();
        assert_eq!(
            run.sorted,
            vec![Edge::new(2, 3, 1), Edge::new(1, 2, 1), Edge::new(1, 3, 1)]
        );
        assert_eq!(run.tree, vec![Edge::new(2, 3, 1), Edge::new(1, 2, 1)]);
    }

    #[test]
    fn test_every_edge_is_evaluated_once() {
        let run = run(&square_with_diagonal()).unwrap();
        assert_eq!(run.steps.len(), run.sorted.len());
        for (i, step) in run.steps.iter().enumerate() {
            assert_eq!(step.index, i);
            assert_eq!(step.edge, run.sorted[i]);
        }
    }

    #[test]
    fn test_distinct_weights() {
        let run = run(&graph(3, &[(1, 2, 4), (2, 3, 1), (1, 3, 4), (1, 2, 1)])).unwrap();
        assert_eq!(run.distinct_weights(), vec![1, 4]);
    }

    #[test]
    fn test_out_of_range_vertex_is_an_error() {
        let err = run(&graph(3, &[(1, 2, 1), (2, 4, 1)])).unwrap_err();
        assert!(matches!(
            err,
            GraphError::VertexOutOfRange {
                edge: 2,
                vertex: 4,
                num_vertices: 3
            }
        ));
    }
}
