//! Graph storage: an arena of vertices and edges addressed by typed handles.
//!
//! Vertical split:
//! - `entity`: handles, `Vertex`, `Edge`, tagged `Endpoints`
//! - `arena`: the owning `Graph`
//! - `tests`: module tests

mod arena;
mod entity;
#[cfg(debug_assertions)]
mod invariant;

pub use arena::Graph;
pub use entity::{Edge, EdgeId, Endpoints, Vertex, VertexId};
