//! Depth-first traversal driven by a [`Visitor`].
//!
//! The engine owns no state: it walks adjacency lists in insertion order and
//! lets the visitor decide which vertices to enter and which edges to follow.
//! Recursion depth equals the length of the branch being explored, so a
//! visitor without revisit protection can exhaust the stack on cyclic graphs.

mod active_path;
mod path_builder;
mod visitor;

pub use active_path::ActivePath;
pub use path_builder::{find_paths, Equality, Equivalence, Path, PathBuilder};
pub use visitor::{OneTimeVisitor, Visitor};

use crate::error::{GraphError, Result};
use crate::graph::{Graph, VertexId};

/// Runs a depth-first pass from `start`, reporting every step to `visitor`.
///
/// For each accepted vertex the adjacency is walked in insertion order. An
/// edge accepted by [`Visitor::visit_edge`] is resolved to the vertex on its
/// far side, the pass recurses there, and [`Visitor::leave_edge`] follows.
/// [`Visitor::leave_vertex`] closes every accepted vertex.
///
/// # Errors
/// - [`GraphError::VertexNotFound`] if `start` is not in `graph`; the visitor
///   is not called.
/// - [`GraphError::NotTraversable`] if an adjacency entry cannot be walked from
///   its owner. Graphs built through [`Graph`]'s API never produce this. The
///   visitor's enter/leave calls are left unbalanced when it happens.
pub fn depth_pass<V, E, F>(graph: &Graph<V, E>, start: VertexId, visitor: &mut F) -> Result<()>
where
    F: Visitor<V, E> + ?Sized,
{
    if !graph.contains_vertex(start) {
        return Err(GraphError::VertexNotFound(start));
    }
    descend(graph, start, visitor)
}

fn descend<V, E, F>(graph: &Graph<V, E>, vertex: VertexId, visitor: &mut F) -> Result<()>
where
    F: Visitor<V, E> + ?Sized,
{
    if !visitor.visit_vertex(graph, vertex) {
        return Ok(());
    }
    #[cfg(feature = "tracing")]
    tracing::trace!(vertex = vertex.index(), "enter vertex");

    for &edge_id in graph.adjacency(vertex) {
        if visitor.should_stop() {
            #[cfg(feature = "tracing")]
            tracing::trace!(vertex = vertex.index(), "visitor requested stop");
            break;
        }
        if !visitor.visit_edge(graph, edge_id) {
            continue;
        }

        let edge = graph.edge(edge_id).ok_or(GraphError::EdgeNotFound(edge_id))?;
        let next = edge.traverse_from(edge_id, vertex)?;
        #[cfg(feature = "tracing")]
        tracing::trace!(edge = edge_id.index(), from = vertex.index(), to = next.index(), "descend");

        descend(graph, next, visitor)?;
        visitor.leave_edge(graph, edge_id);
    }

    visitor.leave_vertex(graph, vertex);
    #[cfg(feature = "tracing")]
    tracing::trace!(vertex = vertex.index(), "leave vertex");
    Ok(())
}
