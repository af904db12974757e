//! Stratagraph: in-memory graph container with abstraction hierarchies.
//!
//! Stores vertices and edges with undirected adjacency bookkeeping, maps
//! finer graphs, vertices and edges onto coarser ones, and finds fewest-hop
//! paths under an optional edge predicate.

pub mod cli;
pub mod graph;
pub mod hierarchy;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{find_path, find_path_by, Edge, Graph, GraphBuilder, Store, Vertex};
pub use hierarchy::Hierarchy;
pub use types::{
    EdgeId, EdgeRef, ElementId, ErrorKind, GraphError, GraphId, GraphResult, VertexId,
    VertexRef, DEFAULT_EDGE_WEIGHT, ELEMENT_ID_INIT,
};
