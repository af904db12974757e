//! Handles: id newtypes for vertices, edges and graphs.

use std::fmt;

use serde::Serialize;

/// Numeric ids usable as keys of an element [`Store`](crate::graph::Store).
pub trait ElementId: Copy + Ord + fmt::Display {
    /// Wrap a raw id allocated by a store.
    fn from_raw(raw: u64) -> Self;
    /// The raw numeric id.
    fn raw(self) -> u64;
}

macro_rules! element_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl ElementId for $name {
            fn from_raw(raw: u64) -> Self {
                Self(raw)
            }

            fn raw(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "{}"), self.0)
            }
        }
    };
}

element_id!(
    /// Handle of a vertex within one graph.
    VertexId,
    "v"
);

element_id!(
    /// Handle of an edge within one graph.
    EdgeId,
    "e"
);

element_id!(
    /// Handle of a graph within a [`Hierarchy`](crate::hierarchy::Hierarchy).
    GraphId,
    "g"
);

/// A vertex addressed across graphs: owning graph plus vertex id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct VertexRef {
    pub graph: GraphId,
    pub vertex: VertexId,
}

impl VertexRef {
    pub fn new(graph: GraphId, vertex: VertexId) -> Self {
        Self { graph, vertex }
    }
}

impl fmt::Display for VertexRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.graph, self.vertex)
    }
}

/// An edge addressed across graphs: owning graph plus edge id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EdgeRef {
    pub graph: GraphId,
    pub edge: EdgeId,
}

impl EdgeRef {
    pub fn new(graph: GraphId, edge: EdgeId) -> Self {
        Self { graph, edge }
    }
}

impl fmt::Display for EdgeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.graph, self.edge)
    }
}
