//! In-memory graph operations: the core data structure.

pub mod builder;
pub mod edge;
pub mod model;
pub mod store;
pub mod traversal;
pub mod vertex;

pub use builder::GraphBuilder;
pub use edge::Edge;
pub use model::Graph;
pub use store::Store;
pub use traversal::{find_path, find_path_by};
pub use vertex::Vertex;
