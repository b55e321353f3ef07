//! Reading graphs from their plain-text description.
//!
//! The format is a whitespace-separated list of integers: the vertex count `n`,
//! the edge count `m`, then `m` triples `u v w`. Line breaks carry no meaning
//! but are tracked so errors can point at the offending line.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use log::{debug, warn};

use super::{Edge, Graph};
use crate::error::{GraphError, Result};

impl Graph {
    /// Reads and parses the graph stored at `path`.
    ///
    /// # Errors
    /// * `InputUnavailable` if the file cannot be read
    /// * any parse error from [`Graph::from_str`]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text =
            fs::read_to_string(path).map_err(|e| GraphError::input_unavailable(path, e))?;
        let graph: Graph = text.parse()?;
        debug!(
            "loaded {} vertices and {} edges from {}",
            graph.num_vertices,
            graph.num_edges(),
            path.display()
        );
        Ok(graph)
    }

    /// Checks that every edge endpoint is a vertex in `1..=num_vertices`.
    pub fn validate(&self) -> Result<()> {
        for (i, edge) in self.edges.iter().enumerate() {
            for vertex in [edge.src, edge.dst] {
                if vertex == 0 || vertex > self.num_vertices {
                    return Err(GraphError::VertexOutOfRange {
                        edge: i + 1,
                        vertex,
                        num_vertices: self.num_vertices,
                    });
                }
            }
        }
        Ok(())
    }
}

impl FromStr for Graph {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        let mut tokens = Tokens::new(s);

        let num_vertices: usize = tokens.next_number("vertex count")?;
        let num_edges: usize = tokens.next_number("edge count")?;

        let mut edges = Vec::new();
        for _ in 0..num_edges {
            let src = tokens.next_number("edge source vertex")?;
            let dst = tokens.next_number("edge target vertex")?;
            let weight = tokens.next_number("edge weight")?;
            edges.push(Edge::new(src, dst, weight));
        }

        if let Some((line, token)) = tokens.next_token() {
            warn!("ignoring trailing input starting at line {line}: {token:?}");
        }

        let graph = Graph::new(num_vertices, edges);
        graph.validate()?;
        Ok(graph)
    }
}

/// Whitespace-separated tokens tagged with their 1-based line number.
struct Tokens<'a> {
    iter: Box<dyn Iterator<Item = (usize, &'a str)> + 'a>,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        let iter = text
            .lines()
            .enumerate()
            .flat_map(|(i, line)| line.split_whitespace().map(move |token| (i + 1, token)));
        Self {
            iter: Box::new(iter),
        }
    }

    fn next_token(&mut self) -> Option<(usize, &'a str)> {
        self.iter.next()
    }

    fn next_number<T: FromStr>(&mut self, expected: &'static str) -> Result<T> {
        let (line, token) = self.next_token().ok_or(GraphError::UnexpectedEnd { expected })?;
        token.parse().map_err(|_| GraphError::InvalidToken {
            line,
            expected,
            token: token.to_string(),
        })
    }
}
