//! Multi-level mapping between graphs, vertices and edges.

pub mod forest;
pub mod mapping;

pub use forest::Hierarchy;
