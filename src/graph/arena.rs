//! `Graph` - an arena owning every vertex and edge.
//!
//! Vertices and edges live in two vectors and refer to each other by
//! [`VertexId`] / [`EdgeId`]. Nothing is ever removed, so handles stay valid for
//! the lifetime of the graph and all storage is released when it drops.
//!
//! # Performance
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `add_vertex` | \(O(1)\) amortized | Appends to the vertex arena |
//! | `add_edge` | \(O(1)\) amortized | Appends to the edge arena and two adjacency lists |
//! | `add_ordered_edge` | \(O(1)\) amortized | Appends to the edge arena and one adjacency list |
//! | `adjacency` / `degree` | \(O(1)\) | Slice of the stored list |
//! | `find_vertex` | \(O(n)\) | Linear scan |

use crate::error::{GraphError, Result};

use super::entity::{Edge, EdgeId, Endpoints, Vertex, VertexId};

/// A graph with vertex properties `V` and edge properties `E`.
///
/// Self loops and parallel edges are accepted without complaint.
#[derive(Debug, Clone)]
pub struct Graph<V, E> {
    vertices: Vec<Vertex<V>>,
    edges: Vec<Edge<E>>,
}

impl<V, E> Default for Graph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> Graph<V, E> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Creates an empty graph with room for the given number of vertices and edges.
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            edges: Vec::with_capacity(edges),
        }
    }

    /// Adds a vertex and returns its handle.
    pub fn add_vertex(&mut self, properties: V) -> VertexId {
        let id = VertexId::new(self.vertices.len());
        self.vertices.push(Vertex::new(properties));
        id
    }

    /// Connects `source` and `target` with an undirected edge.
    ///
    /// The edge is appended to the adjacency of `source`, then of `target`.
    /// A self loop is therefore listed twice on the same vertex.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if either handle is unknown. The graph is
    /// left untouched.
    pub fn add_edge(&mut self, source: VertexId, properties: E, target: VertexId) -> Result<EdgeId> {
        self.check_vertex(source)?;
        self.check_vertex(target)?;

        let id = self.push_edge(Edge::new(
            properties,
            Endpoints::Undirected {
                a: source,
                b: target,
            },
        ));
        self.vertices[source.index()].attach(id);
        self.vertices[target.index()].attach(id);
        Ok(id)
    }

    /// Adds a directed edge `source -> target`.
    ///
    /// Only `source` lists the edge, so it is unreachable when walking from
    /// `target`.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if either handle is unknown. The graph is
    /// left untouched.
    pub fn add_ordered_edge(
        &mut self,
        source: VertexId,
        properties: E,
        target: VertexId,
    ) -> Result<EdgeId> {
        self.check_vertex(source)?;
        self.check_vertex(target)?;

        let id = self.push_edge(Edge::new(
            properties,
            Endpoints::Directed {
                from: source,
                to: target,
            },
        ));
        self.vertices[source.index()].attach(id);
        Ok(id)
    }

    fn push_edge(&mut self, edge: Edge<E>) -> EdgeId {
        let id = EdgeId::new(self.edges.len());
        self.edges.push(edge);
        id
    }

    #[inline]
    fn check_vertex(&self, id: VertexId) -> Result<()> {
        if self.contains_vertex(id) {
            Ok(())
        } else {
            Err(GraphError::VertexNotFound(id))
        }
    }

    /// Returns `true` if `id` names a vertex of this graph.
    #[inline(always)]
    pub fn contains_vertex(&self, id: VertexId) -> bool {
        id.index() < self.vertices.len()
    }

    /// Returns `true` if `id` names an edge of this graph.
    #[inline(always)]
    pub fn contains_edge(&self, id: EdgeId) -> bool {
        id.index() < self.edges.len()
    }

    /// Number of vertices.
    #[inline(always)]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges. An undirected edge counts once.
    #[inline(always)]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<V>> {
        self.vertices.get(id.index())
    }

    #[inline]
    pub fn edge(&self, id: EdgeId) -> Option<&Edge<E>> {
        self.edges.get(id.index())
    }

    /// Properties of a vertex.
    ///
    /// # Panics
    /// Panics if `id` does not belong to this graph.
    #[inline]
    pub fn properties(&self, id: VertexId) -> &V {
        assert!(self.contains_vertex(id), "vertex {} out of bounds", id.index());
        self.vertices[id.index()].properties()
    }

    /// Properties of an edge.
    ///
    /// # Panics
    /// Panics if `id` does not belong to this graph.
    #[inline]
    pub fn edge_properties(&self, id: EdgeId) -> &E {
        assert!(self.contains_edge(id), "edge {} out of bounds", id.index());
        self.edges[id.index()].properties()
    }

    /// Incident edges of a vertex, in insertion order.
    ///
    /// # Panics
    /// Panics if `id` does not belong to this graph.
    #[inline]
    pub fn adjacency(&self, id: VertexId) -> &[EdgeId] {
        assert!(self.contains_vertex(id), "vertex {} out of bounds", id.index());
        self.vertices[id.index()].edges()
    }

    /// Number of adjacency entries of a vertex.
    ///
    /// # Panics
    /// Panics if `id` does not belong to this graph.
    #[inline]
    pub fn degree(&self, id: VertexId) -> usize {
        self.adjacency(id).len()
    }

    /// Vertices reachable in one step from `id`, in adjacency order.
    ///
    /// # Panics
    /// Panics if `id` does not belong to this graph.
    pub fn neighbors(&self, id: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.adjacency(id).iter().filter_map(move |&e| {
            self.edges[e.index()].traverse_from(e, id).ok()
        })
    }

    /// All vertex handles, in creation order.
    pub fn vertex_ids(&self) -> impl ExactSizeIterator<Item = VertexId> {
        (0..self.vertices.len()).map(VertexId::new)
    }

    /// All vertices with their handles.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = (VertexId, &Vertex<V>)> {
        self.vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (VertexId::new(i), v))
    }

    /// All edges with their handles.
    pub fn edges(&self) -> impl ExactSizeIterator<Item = (EdgeId, &Edge<E>)> {
        self.edges
            .iter()
            .enumerate()
            .map(|(i, e)| (EdgeId::new(i), e))
    }

    /// First vertex, in creation order, whose properties satisfy `predicate`.
    pub fn find_vertex<P>(&self, mut predicate: P) -> Option<VertexId>
    where
        P: FnMut(&V) -> bool,
    {
        self.vertices
            .iter()
            .position(|v| predicate(v.properties()))
            .map(VertexId::new)
    }

    /// Maps a path of handles to the properties of its vertices.
    ///
    /// # Panics
    /// Panics if any handle does not belong to this graph.
    pub fn path_properties<'a>(&'a self, path: &[VertexId]) -> Vec<&'a V> {
        path.iter().map(|&v| self.properties(v)).collect()
    }

    /// Validates the structural invariants of the arena.
    ///
    /// This method checks that:
    /// 1. Every adjacency entry names an existing edge incident to its owner
    /// 2. Every edge endpoint is in bounds
    /// 3. Undirected edges are listed by both endpoints, directed edges by their source only
    ///
    /// Returns `true` if all invariants hold.
    #[cfg(debug_assertions)]
    pub fn validate_invariants(&self) -> bool {
        use super::invariant::invariant_assert;

        let n = self.vertices.len();
        for (v, vertex) in self.vertices() {
            for &e in vertex.edges() {
                if !self.contains_edge(e) {
                    return false;
                }
                invariant_assert(
                    self.edges[e.index()].endpoints().touches(v),
                    "adjacency entries must be incident to their vertex",
                );
            }
        }

        for (id, edge) in self.edges() {
            let (x, y) = edge.endpoints().pair();
            if x.index() >= n || y.index() >= n {
                return false;
            }
            let listed_by = |v: VertexId| self.vertices[v.index()].edges().contains(&id);
            let consistent = match edge.endpoints() {
                Endpoints::Undirected { a, b } => listed_by(a) && listed_by(b),
                Endpoints::Directed { from, to } => listed_by(from) && (from == to || !listed_by(to)),
            };
            if !consistent {
                return false;
            }
        }

        true
    }
}
