use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::cs::graph::Vertex;

/// Errors raised while loading a graph or running Kruskal's algorithm.
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("cannot open input file {}", path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unexpected end of input: expected {expected}")]
    UnexpectedEnd { expected: &'static str },

    #[error("line {line}: expected {expected}, found {token:?}")]
    InvalidToken {
        line: usize,
        expected: &'static str,
        token: String,
    },

    #[error("edge {edge} references vertex {vertex}, outside 1..={num_vertices}")]
    VertexOutOfRange {
        edge: usize,
        vertex: Vertex,
        num_vertices: usize,
    },

    /// The endpoints of a rejected edge share a root but no tree path joins them.
    #[error("internal error: no tree path between {src} and {dst}")]
    CycleNotFound { src: Vertex, dst: Vertex },
}

impl GraphError {
    pub fn input_unavailable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        GraphError::InputUnavailable {
            path: path.into(),
            source,
        }
    }

    /// True for the variants caused by the contents of the input rather than its availability.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            GraphError::UnexpectedEnd { .. }
                | GraphError::InvalidToken { .. }
                | GraphError::VertexOutOfRange { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
