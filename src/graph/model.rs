//! Core graph structure: vertex and edge stores with adjacency bookkeeping.

use std::fmt;

use crate::types::{EdgeId, GraphError, GraphId, GraphResult, VertexId};

use super::edge::Edge;
use super::store::{remove_first, Store};
use super::vertex::Vertex;

/// An undirected multigraph over vertex payloads `V` and edge payloads `E`.
///
/// Self-loops and parallel edges are allowed. Every edge add/remove updates
/// both endpoints' neighbor, in-edge and out-edge lists in the same call.
#[derive(Debug, Clone)]
pub struct Graph<V, E> {
    vertices: Store<VertexId, Vertex<V>>,
    edges: Store<EdgeId, Edge<E>>,
    /// Parent graph in a [`Hierarchy`](crate::hierarchy::Hierarchy).
    supergraph: Option<GraphId>,
    subgraphs: Vec<GraphId>,
}

impl<V, E> Graph<V, E> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            vertices: Store::new(),
            edges: Store::new(),
            supergraph: None,
            subgraphs: Vec::new(),
        }
    }

    // ==================== Vertices ====================

    /// Add a vertex, returns the assigned ID.
    pub fn add_vertex(&mut self, payload: V) -> VertexId {
        let id = self.vertices.insert_with(|id| Vertex::new(id, payload));
        log::trace!("added vertex {}", id);
        id
    }

    /// Remove an isolated vertex and return its payload.
    ///
    /// Fails with [`GraphError::NotEmpty`] while any edge is incident, and with
    /// [`GraphError::VertexStillMapped`] while the vertex is mapped; use
    /// [`Hierarchy::remove_vertex`](crate::hierarchy::Hierarchy::remove_vertex)
    /// to drop its mappings in the same call.
    pub fn remove_vertex(&mut self, id: VertexId) -> GraphResult<V> {
        let vertex = self
            .vertices
            .get(id)
            .ok_or(GraphError::InvalidVertexHandle(id))?;
        if vertex.has_neighbors() {
            return Err(GraphError::NotEmpty {
                vertex: id,
                neighbors: vertex.degree(),
            });
        }
        if vertex.is_mapped() {
            return Err(GraphError::VertexStillMapped(id));
        }

        let removed = self
            .vertices
            .remove(id)
            .ok_or(GraphError::InvalidVertexHandle(id))?;
        log::trace!("removed vertex {}", id);
        Ok(removed.into_payload())
    }

    /// Remove every edge incident to a vertex, then the vertex itself.
    ///
    /// Nothing is removed if the vertex or any incident edge is mapped.
    pub fn remove_vertex_with_edges(&mut self, id: VertexId) -> GraphResult<V> {
        let vertex = self
            .vertices
            .get(id)
            .ok_or(GraphError::InvalidVertexHandle(id))?;
        if vertex.is_mapped() {
            return Err(GraphError::VertexStillMapped(id));
        }

        // Snapshot: a self-loop appears twice in the list.
        let mut incident: Vec<EdgeId> = vertex.out_edges().to_vec();
        incident.sort_unstable();
        incident.dedup();

        if let Some(&mapped) = incident
            .iter()
            .find(|&&edge| self.edges.get(edge).map_or(false, Edge::is_mapped))
        {
            return Err(GraphError::EdgeStillMapped(mapped));
        }

        for &edge in &incident {
            self.remove_edge(edge)?;
        }
        log::debug!(
            "cascading removal of vertex {} dropped {} edge(s)",
            id,
            incident.len()
        );

        self.remove_vertex(id)
    }

    /// Get a vertex by ID.
    pub fn vertex(&self, id: VertexId) -> GraphResult<&Vertex<V>> {
        self.vertices.get(id).ok_or(GraphError::VertexNotFound(id))
    }

    /// Get a vertex payload by ID (mutable).
    pub fn vertex_payload_mut(&mut self, id: VertexId) -> GraphResult<&mut V> {
        self.vertices
            .get_mut(id)
            .map(Vertex::payload_mut)
            .ok_or(GraphError::VertexNotFound(id))
    }

    pub fn has_vertex(&self, id: VertexId) -> bool {
        self.vertices.contains(id)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// All vertices in ascending id order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex<V>> + '_ {
        self.vertices.values()
    }

    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.ids()
    }

    /// Neighbor ids of a vertex, one entry per incident edge end.
    pub fn neighbors(&self, id: VertexId) -> GraphResult<&[VertexId]> {
        self.vertex(id).map(Vertex::neighbors)
    }

    pub fn degree(&self, id: VertexId) -> GraphResult<usize> {
        self.vertex(id).map(Vertex::degree)
    }

    // ==================== Edges ====================

    /// Add an edge between two existing vertices.
    ///
    /// Both endpoints must exist; nothing is changed otherwise.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, payload: E) -> GraphResult<EdgeId> {
        if !self.vertices.contains(from) {
            return Err(GraphError::VertexNotFound(from));
        }
        if !self.vertices.contains(to) {
            return Err(GraphError::VertexNotFound(to));
        }

        let id = self.edges.insert_with(|id| Edge::new(id, from, to, payload));
        self.attach(from, to, id);
        log::trace!("added edge {} ({} - {})", id, from, to);
        Ok(id)
    }

    /// Remove an edge and return its payload.
    ///
    /// Fails with [`GraphError::EdgeStillMapped`] while the edge is mapped.
    pub fn remove_edge(&mut self, id: EdgeId) -> GraphResult<E> {
        let edge = self
            .edges
            .get(id)
            .ok_or(GraphError::InvalidEdgeHandle(id))?;
        if edge.is_mapped() {
            return Err(GraphError::EdgeStillMapped(id));
        }

        let edge = self
            .edges
            .remove(id)
            .ok_or(GraphError::InvalidEdgeHandle(id))?;
        let (from, to) = edge.endpoints();
        self.detach(from, to, id);
        log::trace!("removed edge {} ({} - {})", id, from, to);
        Ok(edge.into_payload())
    }

    /// Get an edge by ID.
    pub fn edge(&self, id: EdgeId) -> GraphResult<&Edge<E>> {
        self.edges.get(id).ok_or(GraphError::EdgeNotFound(id))
    }

    /// Get an edge payload by ID (mutable).
    pub fn edge_payload_mut(&mut self, id: EdgeId) -> GraphResult<&mut E> {
        self.edges
            .get_mut(id)
            .map(Edge::payload_mut)
            .ok_or(GraphError::EdgeNotFound(id))
    }

    pub fn has_edge(&self, id: EdgeId) -> bool {
        self.edges.contains(id)
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All edges in ascending id order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge<E>> + '_ {
        self.edges.values()
    }

    pub fn edge_ids(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges.ids()
    }

    /// First edge (lowest id) whose unordered endpoints are `{a, b}`.
    ///
    /// Linear in the number of edges.
    pub fn between(&self, a: VertexId, b: VertexId) -> GraphResult<EdgeId> {
        self.edges
            .values()
            .find(|edge| edge.connects(a, b))
            .map(Edge::id)
            .ok_or(GraphError::NoEdgeBetween(a, b))
    }

    /// Every edge connecting `a` and `b`, in ascending id order.
    pub fn edges_between(&self, a: VertexId, b: VertexId) -> Vec<EdgeId> {
        self.edges
            .values()
            .filter(|edge| edge.connects(a, b))
            .map(Edge::id)
            .collect()
    }

    // ==================== Graph relations ====================

    pub fn supergraph(&self) -> Option<GraphId> {
        self.supergraph
    }

    pub fn subgraphs(&self) -> &[GraphId] {
        &self.subgraphs
    }

    pub fn has_subgraph(&self, child: GraphId) -> bool {
        self.subgraphs.contains(&child)
    }

    pub fn has_subgraphs(&self) -> bool {
        !self.subgraphs.is_empty()
    }

    /// Whether this graph, or any vertex or edge in it, takes part in a mapping.
    pub fn is_mapped(&self) -> bool {
        self.supergraph.is_some()
            || self.has_subgraphs()
            || self.vertices.values().any(Vertex::is_mapped)
            || self.edges.values().any(Edge::is_mapped)
    }

    pub(crate) fn set_supergraph(&mut self, parent: Option<GraphId>) {
        self.supergraph = parent;
    }

    pub(crate) fn push_subgraph(&mut self, child: GraphId) {
        self.subgraphs.push(child);
    }

    pub(crate) fn remove_subgraph(&mut self, child: GraphId) -> bool {
        remove_first(&mut self.subgraphs, &child)
    }

    /// Drop the graph-level relations and every element mapping.
    pub(crate) fn clear_mappings(&mut self) {
        self.supergraph = None;
        self.subgraphs.clear();
        for vertex in self.vertices.values_mut() {
            vertex.set_super_vertex(None);
            vertex.take_sub_vertices();
        }
        for edge in self.edges.values_mut() {
            edge.take_super_edges();
            edge.take_sub_edges();
        }
    }

    pub(crate) fn vertex_entry_mut(&mut self, id: VertexId) -> GraphResult<&mut Vertex<V>> {
        self.vertices.get_mut(id).ok_or(GraphError::VertexNotFound(id))
    }

    pub(crate) fn edge_entry_mut(&mut self, id: EdgeId) -> GraphResult<&mut Edge<E>> {
        self.edges.get_mut(id).ok_or(GraphError::EdgeNotFound(id))
    }

    /// Two distinct vertices of this graph, both mutable.
    pub(crate) fn vertex_pair_mut(
        &mut self,
        a: VertexId,
        b: VertexId,
    ) -> GraphResult<(&mut Vertex<V>, &mut Vertex<V>)> {
        self.vertex(a)?;
        self.vertex(b)?;
        self.vertices
            .get_pair_mut(a, b)
            .ok_or(GraphError::InvalidVertexHandle(b))
    }

    /// Two distinct edges of this graph, both mutable.
    pub(crate) fn edge_pair_mut(
        &mut self,
        a: EdgeId,
        b: EdgeId,
    ) -> GraphResult<(&mut Edge<E>, &mut Edge<E>)> {
        self.edge(a)?;
        self.edge(b)?;
        self.edges
            .get_pair_mut(a, b)
            .ok_or(GraphError::InvalidEdgeHandle(b))
    }

    // ==================== Adjacency ====================

    fn attach(&mut self, from: VertexId, to: VertexId, edge: EdgeId) {
        if let Some(vertex) = self.vertices.get_mut(from) {
            vertex.attach_edge(to, edge);
        }
        if let Some(vertex) = self.vertices.get_mut(to) {
            vertex.attach_edge(from, edge);
        }
    }

    fn detach(&mut self, from: VertexId, to: VertexId, edge: EdgeId) {
        if let Some(vertex) = self.vertices.get_mut(from) {
            vertex.detach_edge(to, edge);
        }
        if let Some(vertex) = self.vertices.get_mut(to) {
            vertex.detach_edge(from, edge);
        }
    }
}

impl<V, E> Default for Graph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Diagnostic adjacency listing. Not a stable format.
impl<V: fmt::Display, E> fmt::Display for Graph<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Graph(n={}, m={})", self.vertex_count(), self.edge_count())?;
        for vertex in self.vertices() {
            write!(f, " {} -> [ ", vertex.payload())?;
            for (i, neighbor) in vertex.neighbors().iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                match self.vertices.get(*neighbor) {
                    Some(n) => write!(f, "{}", n.payload())?,
                    None => write!(f, "{}", neighbor)?,
                }
            }
            if vertex.has_neighbors() {
                write!(f, " ")?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
