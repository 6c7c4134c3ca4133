//! # `walkgraph` - Visitor-Driven Graph Traversal
//!
//! A small generic graph library: an arena of vertices and edges carrying
//! user-supplied properties, a depth-first traversal engine that hands every
//! decision to a visitor, and a path finder built on top of that visitor.
//!
//! ## Architecture
//!
//! 1. **Graph arena** (`Graph<V, E>`):
//!    - Owns every vertex and edge by value
//!    - Addressed through `VertexId` / `EdgeId` handles
//!    - Edges are tagged `Undirected { a, b }` or `Directed { from, to }`
//!
//! 2. **Traversal engine** (`depth_pass`):
//!    - Recursive depth-first walk in adjacency insertion order
//!    - No state of its own; the visitor accepts or rejects each vertex and edge
//!
//! 3. **Visitors** (`Visitor`, `OneTimeVisitor`, `PathBuilder`):
//!    - `OneTimeVisitor` keeps the active branch and refuses re-entry
//!    - `PathBuilder` composes it with target matching and a path budget
//!
//! ## Example
//!
//! ```rust
//! use walkgraph::{depth_pass, Graph, PathBuilder};
//!
//! let mut graph = Graph::new();
//! let a1 = graph.add_vertex("A1");
//! let b1 = graph.add_vertex("B1");
//! let c1 = graph.add_vertex("C1");
//! let b2 = graph.add_vertex("B2");
//! let e1 = graph.add_vertex("E1");
//! let f1 = graph.add_vertex("F1");
//!
//! graph.add_edge(a1, 10, b1)?;
//! graph.add_edge(b1, 20, c1)?;
//! graph.add_edge(a1, 15, b2)?;
//! graph.add_ordered_edge(c1, 30, e1)?;
//! graph.add_ordered_edge(e1, 25, f1)?;
//! graph.add_edge(b2, 40, f1)?;
//!
//! let mut builder = PathBuilder::new("F1");
//! depth_pass(&graph, a1, &mut builder)?;
//!
//! assert_eq!(builder.paths(), &[vec![a1, b1, c1, e1, f1], vec![a1, b2, f1]]);
//! # Ok::<(), walkgraph::GraphError>(())
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `trace!`/`debug!` events from the traversal and path finder.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod graph;
pub mod traversal;

pub use error::{GraphError, Result};
pub use graph::{Edge, EdgeId, Endpoints, Graph, Vertex, VertexId};
pub use traversal::{
    depth_pass, find_paths, ActivePath, Equality, Equivalence, OneTimeVisitor, Path, PathBuilder,
    Visitor,
};

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // Handles are thin indices.
    assert!(mem::size_of::<VertexId>() == mem::size_of::<usize>());
    assert!(mem::size_of::<EdgeId>() == mem::size_of::<usize>());
    assert!(mem::size_of::<Option<VertexId>>() <= mem::size_of::<usize>() * 2);
};
