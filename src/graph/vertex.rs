//! Vertex record: payload plus adjacency and mapping bookkeeping.

use serde::Serialize;

use crate::types::{EdgeId, VertexId, VertexRef};

use super::store::remove_first;

/// A stored vertex.
///
/// Every incident edge appears in both `in_edges` and `out_edges`: adjacency is
/// undirected, while the edge itself records its creation direction.
#[derive(Debug, Clone, Serialize)]
pub struct Vertex<V> {
    id: VertexId,
    payload: V,
    /// One entry per incident edge end; parallel edges repeat the neighbor.
    neighbors: Vec<VertexId>,
    in_edges: Vec<EdgeId>,
    out_edges: Vec<EdgeId>,
    super_vertex: Option<VertexRef>,
    sub_vertices: Vec<VertexRef>,
}

impl<V> Vertex<V> {
    pub(crate) fn new(id: VertexId, payload: V) -> Self {
        Self {
            id,
            payload,
            neighbors: Vec::new(),
            in_edges: Vec::new(),
            out_edges: Vec::new(),
            super_vertex: None,
            sub_vertices: Vec::new(),
        }
    }

    pub fn id(&self) -> VertexId {
        self.id
    }

    pub fn payload(&self) -> &V {
        &self.payload
    }

    pub(crate) fn payload_mut(&mut self) -> &mut V {
        &mut self.payload
    }

    pub(crate) fn into_payload(self) -> V {
        self.payload
    }

    /// Neighbor ids in edge insertion order.
    pub fn neighbors(&self) -> &[VertexId] {
        &self.neighbors
    }

    pub fn has_neighbors(&self) -> bool {
        !self.neighbors.is_empty()
    }

    pub fn in_edges(&self) -> &[EdgeId] {
        &self.in_edges
    }

    pub fn out_edges(&self) -> &[EdgeId] {
        &self.out_edges
    }

    /// Number of incident edge ends (a self-loop counts twice).
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    pub fn super_vertex(&self) -> Option<VertexRef> {
        self.super_vertex
    }

    pub fn has_super_vertex(&self) -> bool {
        self.super_vertex.is_some()
    }

    pub fn sub_vertices(&self) -> &[VertexRef] {
        &self.sub_vertices
    }

    pub fn has_sub_vertices(&self) -> bool {
        !self.sub_vertices.is_empty()
    }

    pub fn has_sub_vertex(&self, sub: VertexRef) -> bool {
        self.sub_vertices.contains(&sub)
    }

    /// Whether this vertex takes part in any mapping relation.
    pub fn is_mapped(&self) -> bool {
        self.has_super_vertex() || self.has_sub_vertices()
    }

    pub(crate) fn attach_edge(&mut self, neighbor: VertexId, edge: EdgeId) {
        self.neighbors.push(neighbor);
        self.in_edges.push(edge);
        self.out_edges.push(edge);
    }

    pub(crate) fn detach_edge(&mut self, neighbor: VertexId, edge: EdgeId) {
        remove_first(&mut self.neighbors, &neighbor);
        remove_first(&mut self.in_edges, &edge);
        remove_first(&mut self.out_edges, &edge);
    }

    pub(crate) fn push_sub_vertex(&mut self, sub: VertexRef) {
        self.sub_vertices.push(sub);
    }

    pub(crate) fn remove_sub_vertex(&mut self, sub: VertexRef) -> bool {
        remove_first(&mut self.sub_vertices, &sub)
    }

    pub(crate) fn take_sub_vertices(&mut self) -> Vec<VertexRef> {
        std::mem::take(&mut self.sub_vertices)
    }

    pub(crate) fn set_super_vertex(&mut self, superior: Option<VertexRef>) {
        self.super_vertex = superior;
    }
}
