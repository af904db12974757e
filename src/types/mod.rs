//! Shared types for the stratagraph library.

pub mod error;
pub mod ids;

pub use error::{ErrorKind, GraphError, GraphResult};
pub use ids::{EdgeId, EdgeRef, ElementId, GraphId, VertexId, VertexRef};

/// First id handed out by every element store. Ids are never reused.
pub const ELEMENT_ID_INIT: u64 = 0;

/// Default edge weight used by the edge-list loader.
pub const DEFAULT_EDGE_WEIGHT: f64 = 1.0;
