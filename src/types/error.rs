//! Error types for the stratagraph library.

use thiserror::Error;

use super::ids::{EdgeId, EdgeRef, GraphId, VertexId, VertexRef};

/// All errors that can occur in the stratagraph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Vertex ID does not resolve to a stored vertex.
    #[error("Vertex {0} not found")]
    VertexNotFound(VertexId),

    /// Edge ID does not resolve to a stored edge.
    #[error("Edge {0} not found")]
    EdgeNotFound(EdgeId),

    /// Graph ID does not resolve to a graph in the hierarchy.
    #[error("Graph {0} not found")]
    GraphNotFound(GraphId),

    /// No vertex carries the given label.
    #[error("Vertex labelled '{0}' not found")]
    LabelNotFound(String),

    /// No edge connects the two vertices.
    #[error("No edge between vertices {0} and {1}")]
    NoEdgeBetween(VertexId, VertexId),

    /// Removal requested for a vertex that is not (or no longer) stored.
    #[error("Invalid vertex handle: {0}")]
    InvalidVertexHandle(VertexId),

    /// Removal requested for an edge that is not (or no longer) stored.
    #[error("Invalid edge handle: {0}")]
    InvalidEdgeHandle(EdgeId),

    /// Non-cascading removal of a vertex that still has incident edges.
    #[error("Vertex {vertex} still has {neighbors} neighbor(s)")]
    NotEmpty { vertex: VertexId, neighbors: usize },

    /// Graph is not a subgraph of the given parent.
    #[error("Graph {child} is not a subgraph of {parent}")]
    GraphNotMapped { parent: GraphId, child: GraphId },

    /// Vertex is not a sub-vertex of the given super vertex.
    #[error("Vertex {sub} is not a sub-vertex of {superior}")]
    VertexNotMapped { superior: VertexRef, sub: VertexRef },

    /// Edge is not a sub-edge of the given super edge.
    #[error("Edge {sub} is not a sub-edge of {superior}")]
    EdgeNotMapped { superior: EdgeRef, sub: EdgeRef },

    /// Graph already has a supergraph.
    #[error("Graph {child} is already mapped onto {parent}")]
    GraphAlreadyMapped { child: GraphId, parent: GraphId },

    /// Vertex already has a super vertex.
    #[error("Vertex {sub} is already mapped onto {superior}")]
    VertexAlreadyMapped { sub: VertexRef, superior: VertexRef },

    /// Graph cannot be removed while mapping relations still reference it.
    #[error("Graph {0} still participates in mapping relations")]
    GraphStillMapped(GraphId),

    /// Vertex cannot be removed from its graph while it is mapped.
    #[error("Vertex {0} still participates in mapping relations")]
    VertexStillMapped(VertexId),

    /// Edge cannot be removed from its graph while it is mapped.
    #[error("Edge {0} still participates in mapping relations")]
    EdgeStillMapped(EdgeId),

    /// A vertex cannot be its own super vertex.
    #[error("Vertex {0} cannot be mapped onto itself")]
    VertexSelfMapped(VertexRef),

    /// An edge cannot be its own super edge.
    #[error("Edge {0} cannot be mapped onto itself")]
    EdgeSelfMapped(EdgeRef),

    /// Search exhausted the admissible vertices without reaching the target.
    #[error("No path found from {start} to {target}")]
    NoPathFound { start: VertexId, target: VertexId },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed edge-list input.
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },
}

/// Coarse classification of a [`GraphError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    InvalidHandle,
    NotEmpty,
    NotMapped,
    AlreadyMapped,
    StillMapped,
    SelfMapped,
    NoPathFound,
    Io,
    Parse,
}

impl GraphError {
    /// The taxonomy bucket this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::VertexNotFound(_)
            | Self::EdgeNotFound(_)
            | Self::GraphNotFound(_)
            | Self::LabelNotFound(_)
            | Self::NoEdgeBetween(..) => ErrorKind::NotFound,
            Self::InvalidVertexHandle(_) | Self::InvalidEdgeHandle(_) => ErrorKind::InvalidHandle,
            Self::NotEmpty { .. } => ErrorKind::NotEmpty,
            Self::GraphNotMapped { .. }
            | Self::VertexNotMapped { .. }
            | Self::EdgeNotMapped { .. } => ErrorKind::NotMapped,
            Self::GraphAlreadyMapped { .. } | Self::VertexAlreadyMapped { .. } => {
                ErrorKind::AlreadyMapped
            }
            Self::GraphStillMapped(_)
            | Self::VertexStillMapped(_)
            | Self::EdgeStillMapped(_) => ErrorKind::StillMapped,
            Self::VertexSelfMapped(_) | Self::EdgeSelfMapped(_) => ErrorKind::SelfMapped,
            Self::NoPathFound { .. } => ErrorKind::NoPathFound,
            Self::Io(_) => ErrorKind::Io,
            Self::Parse { .. } => ErrorKind::Parse,
        }
    }
}

/// Convenience result type for stratagraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
