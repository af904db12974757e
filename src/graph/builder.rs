//! Fluent API for building Graph instances.

use crate::types::{GraphResult, VertexId};

use super::Graph;

/// Fluent builder for constructing a [`Graph`].
///
/// Vertex ids are predicted at `add_vertex` time, so edges can be linked
/// before the graph exists.
pub struct GraphBuilder<V, E> {
    vertices: Vec<V>,
    edges: Vec<(VertexId, VertexId, E)>,
}

impl<V, E> GraphBuilder<V, E> {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Add a vertex and return the id it will have in the built graph.
    pub fn add_vertex(&mut self, payload: V) -> VertexId {
        let id = VertexId(self.vertices.len() as u64);
        self.vertices.push(payload);
        id
    }

    /// Add an edge between two vertices.
    pub fn link(&mut self, from: VertexId, to: VertexId, payload: E) -> &mut Self {
        self.edges.push((from, to, payload));
        self
    }

    /// Build the final graph. Fails if a linked vertex was never added.
    pub fn build(self) -> GraphResult<Graph<V, E>> {
        let mut graph = Graph::new();
        for payload in self.vertices {
            graph.add_vertex(payload);
        }
        for (from, to, payload) in self.edges {
            graph.add_edge(from, to, payload)?;
        }
        Ok(graph)
    }
}

impl<V, E> Default for GraphBuilder<V, E> {
    fn default() -> Self {
        Self::new()
    }
}
