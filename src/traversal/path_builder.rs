//! `PathBuilder` - records every simple path from the root to a target value.
//!
//! Built by composition: the no-revisit bookkeeping lives in an inner
//! [`OneTimeVisitor`], and this type layers target matching and a path budget
//! on top of it.

use crate::error::Result;
use crate::graph::{EdgeId, Graph, VertexId};

use super::active_path::ActivePath;
use super::visitor::{OneTimeVisitor, Visitor};
use super::depth_pass;

/// A path of vertex handles, root first.
pub type Path = Vec<VertexId>;

/// Decides whether a vertex's properties match the searched value.
pub trait Equivalence<V: ?Sized> {
    fn equivalent(&self, candidate: &V, target: &V) -> bool;
}

/// Matches with `PartialEq`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Equality;

impl<V: PartialEq + ?Sized> Equivalence<V> for Equality {
    #[inline]
    fn equivalent(&self, candidate: &V, target: &V) -> bool {
        candidate == target
    }
}

impl<V: ?Sized, F> Equivalence<V> for F
where
    F: Fn(&V, &V) -> bool,
{
    #[inline]
    fn equivalent(&self, candidate: &V, target: &V) -> bool {
        self(candidate, target)
    }
}

/// Visitor collecting paths that end at a vertex matching `target`.
///
/// A matching vertex terminates its branch: the path up to and including it
/// is recorded and the traversal does not descend past it. Once `path_count`
/// paths are recorded every further edge is rejected; the pass itself keeps
/// unwinding unless [`stop_when_full`](Self::stop_when_full) is set.
///
/// ```
/// use walkgraph::{depth_pass, Graph, PathBuilder};
///
/// let mut g = Graph::new();
/// let a = g.add_vertex("a");
/// let b = g.add_vertex("b");
/// g.add_edge(a, 1, b).unwrap();
///
/// let mut builder = PathBuilder::new("b");
/// depth_pass(&g, a, &mut builder).unwrap();
/// assert_eq!(builder.paths(), &[vec![a, b]]);
/// ```
#[derive(Debug, Clone)]
pub struct PathBuilder<V, M = Equality> {
    inner: OneTimeVisitor,
    target: V,
    matcher: M,
    path_count: usize,
    stop_when_full: bool,
    paths: Vec<Path>,
}

impl<V> PathBuilder<V, Equality> {
    /// Searches for vertices equal to `target`, with no limit on the number of paths.
    pub fn new(target: V) -> Self {
        Self {
            inner: OneTimeVisitor::new(),
            target,
            matcher: Equality,
            path_count: usize::MAX,
            stop_when_full: false,
            paths: Vec::new(),
        }
    }
}

impl<V, M> PathBuilder<V, M> {
    /// Caps the number of recorded paths.
    #[must_use]
    pub fn with_path_count(mut self, path_count: usize) -> Self {
        self.path_count = path_count;
        self
    }

    /// Replaces the equivalence used to compare vertex properties with the target.
    pub fn with_matcher<N>(self, matcher: N) -> PathBuilder<V, N>
    where
        N: Equivalence<V>,
    {
        PathBuilder {
            inner: self.inner,
            target: self.target,
            matcher,
            path_count: self.path_count,
            stop_when_full: self.stop_when_full,
            paths: self.paths,
        }
    }

    /// When `true`, the visitor asks the engine to stop as soon as the budget is spent.
    #[must_use]
    pub fn stop_when_full(mut self, stop: bool) -> Self {
        self.stop_when_full = stop;
        self
    }

    #[inline(always)]
    pub fn target(&self) -> &V {
        &self.target
    }

    #[inline(always)]
    pub fn path_count(&self) -> usize {
        self.path_count
    }

    /// Paths recorded so far, in discovery order.
    #[inline(always)]
    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    pub fn into_paths(self) -> Vec<Path> {
        self.paths
    }

    /// Returns `true` once `path_count` paths have been recorded.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.paths.len() >= self.path_count
    }

    #[inline(always)]
    pub fn active_path(&self) -> &ActivePath {
        self.inner.active_path()
    }
}

impl<V, E, M> Visitor<V, E> for PathBuilder<V, M>
where
    M: Equivalence<V>,
{
    fn visit_vertex(&mut self, graph: &Graph<V, E>, vertex: VertexId) -> bool {
        if !self.inner.visit_vertex(graph, vertex) {
            return false;
        }
        if self.matcher.equivalent(graph.properties(vertex), &self.target) {
            self.paths.push(self.inner.visited().to_vec());
            #[cfg(feature = "tracing")]
            tracing::debug!(
                vertex = vertex.index(),
                depth = self.inner.visited().len(),
                recorded = self.paths.len(),
                "path recorded"
            );
            // A match ends the branch, so undo the push right away.
            self.inner.leave_vertex(graph, vertex);
            return false;
        }
        true
    }

    fn visit_edge(&mut self, graph: &Graph<V, E>, edge: EdgeId) -> bool {
        if !self.inner.visit_edge(graph, edge) {
            return false;
        }
        if self.paths.len() < self.path_count {
            return true;
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(edge = edge.index(), "path budget spent, edge rejected");
        self.inner.leave_edge(graph, edge);
        false
    }

    #[inline]
    fn leave_vertex(&mut self, graph: &Graph<V, E>, vertex: VertexId) {
        self.inner.leave_vertex(graph, vertex);
    }

    #[inline]
    fn leave_edge(&mut self, graph: &Graph<V, E>, edge: EdgeId) {
        self.inner.leave_edge(graph, edge);
    }

    #[inline]
    fn should_stop(&self) -> bool {
        self.stop_when_full && self.is_full()
    }
}

/// Collects up to `limit` paths from `start` to vertices equal to `target`.
///
/// Stops the pass as soon as the limit is reached.
///
/// # Errors
/// Propagates [`depth_pass`] errors, e.g. an unknown `start`.
pub fn find_paths<V, E>(
    graph: &Graph<V, E>,
    start: VertexId,
    target: V,
    limit: usize,
) -> Result<Vec<Path>>
where
    V: PartialEq,
{
    let mut builder = PathBuilder::new(target)
        .with_path_count(limit)
        .stop_when_full(true);
    depth_pass(graph, start, &mut builder)?;
    Ok(builder.into_paths())
}
