//! The stack of vertices on the current depth-first branch.
//!
//! Kept separate from any visitor so that policies layered on top of
//! [`OneTimeVisitor`](super::OneTimeVisitor) share one piece of bookkeeping.

use crate::graph::VertexId;

/// Root-to-current path of an in-progress depth-first pass.
///
/// A handle is pushed at most once: [`try_enter`](Self::try_enter) scans the
/// stack before pushing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivePath {
    stack: Vec<VertexId>,
}

impl ActivePath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            stack: Vec::with_capacity(capacity),
        }
    }

    /// Pushes `vertex` unless it is already on the path.
    ///
    /// Returns `true` iff the vertex was pushed.
    #[inline]
    pub fn try_enter(&mut self, vertex: VertexId) -> bool {
        if self.contains(vertex) {
            return false;
        }
        self.stack.push(vertex);
        true
    }

    /// Pops the most recently entered vertex.
    #[inline]
    pub fn leave(&mut self) -> Option<VertexId> {
        self.stack.pop()
    }

    #[inline]
    pub fn contains(&self, vertex: VertexId) -> bool {
        self.stack.contains(&vertex)
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[VertexId] {
        &self.stack
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// The vertex currently being explored.
    #[inline]
    pub fn head(&self) -> Option<VertexId> {
        self.stack.last().copied()
    }
}
