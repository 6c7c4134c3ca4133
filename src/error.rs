//! Error type shared by graph construction and traversal.

use core::fmt;

use crate::graph::{EdgeId, VertexId};

/// Errors produced by [`Graph`](crate::Graph) mutation and by
/// [`depth_pass`](crate::depth_pass).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// The handle does not name a vertex of this graph.
    VertexNotFound(VertexId),
    /// The handle does not name an edge of this graph.
    EdgeNotFound(EdgeId),
    /// The edge cannot be walked starting at `from`.
    ///
    /// Raised when the traversal reaches an edge through a vertex that is not
    /// its source (directed) or not one of its endpoints (undirected).
    NotTraversable {
        /// Edge being resolved.
        edge: EdgeId,
        /// Vertex the traversal stood on.
        from: VertexId,
    },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VertexNotFound(v) => write!(f, "vertex {} does not exist", v.index()),
            Self::EdgeNotFound(e) => write!(f, "edge {} does not exist", e.index()),
            Self::NotTraversable { edge, from } => write!(
                f,
                "edge {} cannot be traversed from vertex {}",
                edge.index(),
                from.index()
            ),
        }
    }
}

impl std::error::Error for GraphError {}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, GraphError>;
