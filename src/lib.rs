pub mod cs;
pub mod error;
pub mod render;

pub use cs::graph;
pub use error::{GraphError, Result};
