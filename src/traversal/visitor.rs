//! The visitor contract driven by [`depth_pass`](super::depth_pass).

use crate::graph::{EdgeId, Graph, VertexId};

use super::active_path::ActivePath;

/// Callbacks invoked by a depth-first pass.
///
/// The engine calls them in a strict nesting order:
/// `visit_vertex` ( `visit_edge` [ <recursion> `leave_edge` ] )* `leave_vertex`.
/// `leave_vertex` is only called for vertices whose `visit_vertex` returned
/// `true`, and `leave_edge` only for edges whose `visit_edge` returned `true`.
pub trait Visitor<V, E> {
    /// Called on entering a vertex. Return `false` to skip it entirely.
    fn visit_vertex(&mut self, graph: &Graph<V, E>, vertex: VertexId) -> bool;

    /// Called before descending along an edge. Return `false` to skip the edge.
    fn visit_edge(&mut self, graph: &Graph<V, E>, edge: EdgeId) -> bool;

    /// Called once every edge of an accepted vertex has been processed.
    fn leave_vertex(&mut self, graph: &Graph<V, E>, vertex: VertexId);

    /// Called after the descent along an accepted edge returns.
    fn leave_edge(&mut self, graph: &Graph<V, E>, edge: EdgeId);

    /// Asks the engine to stop exploring further edges.
    ///
    /// Checked before every edge. Vertices already entered are still left, so
    /// enter/leave calls stay balanced.
    fn should_stop(&self) -> bool {
        false
    }
}

impl<V, E, T> Visitor<V, E> for &mut T
where
    T: Visitor<V, E> + ?Sized,
{
    #[inline]
    fn visit_vertex(&mut self, graph: &Graph<V, E>, vertex: VertexId) -> bool {
        (**self).visit_vertex(graph, vertex)
    }

    #[inline]
    fn visit_edge(&mut self, graph: &Graph<V, E>, edge: EdgeId) -> bool {
        (**self).visit_edge(graph, edge)
    }

    #[inline]
    fn leave_vertex(&mut self, graph: &Graph<V, E>, vertex: VertexId) {
        (**self).leave_vertex(graph, vertex);
    }

    #[inline]
    fn leave_edge(&mut self, graph: &Graph<V, E>, edge: EdgeId) {
        (**self).leave_edge(graph, edge);
    }

    #[inline]
    fn should_stop(&self) -> bool {
        (**self).should_stop()
    }
}

/// Visitor that never enters a vertex already on the current branch.
///
/// Every simple path from the root is explored; a vertex may be entered many
/// times overall, but never twice on the same branch.
#[derive(Debug, Clone, Default)]
pub struct OneTimeVisitor {
    path: ActivePath,
}

impl OneTimeVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// The vertices on the active branch, root first.
    #[inline(always)]
    pub fn visited(&self) -> &[VertexId] {
        self.path.as_slice()
    }

    #[inline(always)]
    pub fn active_path(&self) -> &ActivePath {
        &self.path
    }
}

impl<V, E> Visitor<V, E> for OneTimeVisitor {
    #[inline]
    fn visit_vertex(&mut self, _graph: &Graph<V, E>, vertex: VertexId) -> bool {
        self.path.try_enter(vertex)
    }

    #[inline]
    fn visit_edge(&mut self, _graph: &Graph<V, E>, _edge: EdgeId) -> bool {
        true
    }

    #[inline]
    fn leave_vertex(&mut self, _graph: &Graph<V, E>, vertex: VertexId) {
        let left = self.path.leave();
        debug_assert_eq!(left, Some(vertex), "leave_vertex out of order");
    }

    #[inline]
    fn leave_edge(&mut self, _graph: &Graph<V, E>, _edge: EdgeId) {}
}
