//! Vertex and edge records plus the handles that name them.

use crate::error::{GraphError, Result};

/// A strongly-typed index for a vertex in a [`Graph`](super::Graph).
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(usize);

impl VertexId {
    #[inline(always)]
    pub(crate) const fn new(idx: usize) -> Self {
        Self(idx)
    }

    /// Position of the vertex in its graph's arena.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A strongly-typed index for an edge in a [`Graph`](super::Graph).
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(usize);

impl EdgeId {
    #[inline(always)]
    pub(crate) const fn new(idx: usize) -> Self {
        Self(idx)
    }

    /// Position of the edge in its graph's arena.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// The two ends of an edge, tagged with its direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoints {
    /// Walkable from either end. Listed in the adjacency of both `a` and `b`.
    Undirected {
        /// Vertex that created the edge.
        a: VertexId,
        /// Vertex on the other end.
        b: VertexId,
    },
    /// Walkable only from `from` to `to`. Listed in the adjacency of `from` alone.
    Directed {
        /// Source vertex.
        from: VertexId,
        /// Target vertex.
        to: VertexId,
    },
}

impl Endpoints {
    /// Returns both endpoints in creation order.
    #[inline]
    pub const fn pair(self) -> (VertexId, VertexId) {
        match self {
            Self::Undirected { a, b } => (a, b),
            Self::Directed { from, to } => (from, to),
        }
    }

    /// Returns `true` if `vertex` is one of the endpoints.
    #[inline]
    pub fn touches(self, vertex: VertexId) -> bool {
        let (x, y) = self.pair();
        x == vertex || y == vertex
    }
}

/// A vertex: immutable properties and the ordered list of incident edges.
#[derive(Debug, Clone)]
pub struct Vertex<V> {
    properties: V,
    edges: Vec<EdgeId>,
}

impl<V> Vertex<V> {
    #[inline]
    pub(crate) fn new(properties: V) -> Self {
        Self {
            properties,
            edges: Vec::new(),
        }
    }

    /// The user-supplied properties.
    #[inline(always)]
    pub fn properties(&self) -> &V {
        &self.properties
    }

    /// Incident edges, in insertion order.
    #[inline(always)]
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    #[inline]
    pub(crate) fn attach(&mut self, edge: EdgeId) {
        self.edges.push(edge);
    }
}

/// An edge: immutable properties and its tagged endpoints.
#[derive(Debug, Clone)]
pub struct Edge<E> {
    properties: E,
    endpoints: Endpoints,
}

impl<E> Edge<E> {
    #[inline]
    pub(crate) fn new(properties: E, endpoints: Endpoints) -> Self {
        Self {
            properties,
            endpoints,
        }
    }

    /// The user-supplied properties.
    #[inline(always)]
    pub fn properties(&self) -> &E {
        &self.properties
    }

    #[inline(always)]
    pub fn endpoints(&self) -> Endpoints {
        self.endpoints
    }

    #[inline]
    pub fn is_directed(&self) -> bool {
        matches!(self.endpoints, Endpoints::Directed { .. })
    }

    /// Resolves the vertex reached by walking this edge from `current`.
    ///
    /// Undirected edges lead to the opposite endpoint (a self loop leads back to
    /// `current`). Directed edges lead to their target, and only from their
    /// source.
    ///
    /// # Errors
    /// [`GraphError::NotTraversable`] if `current` is not a valid starting
    /// point for this edge. `id` is only used to label the error.
    pub fn traverse_from(&self, id: EdgeId, current: VertexId) -> Result<VertexId> {
        match self.endpoints {
            Endpoints::Undirected { a, b } if a == current => Ok(b),
            Endpoints::Undirected { a, b } if b == current => Ok(a),
            Endpoints::Directed { from, to } if from == current => Ok(to),
            _ => Err(GraphError::NotTraversable {
                edge: id,
                from: current,
            }),
        }
    }
}
