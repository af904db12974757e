//! Edge record: payload, fixed endpoints and mapping bookkeeping.

use serde::Serialize;

use crate::types::{EdgeId, EdgeRef, VertexId};

use super::store::remove_first;

/// A stored edge.
///
/// `from`/`to` record creation direction and never change. Traversal treats
/// the edge as undirected.
#[derive(Debug, Clone, Serialize)]
pub struct Edge<E> {
    id: EdgeId,
    payload: E,
    from: VertexId,
    to: VertexId,
    /// One entry after a link mapping, any number after path mappings.
    super_edges: Vec<EdgeRef>,
    sub_edges: Vec<EdgeRef>,
}

impl<E> Edge<E> {
    pub(crate) fn new(id: EdgeId, from: VertexId, to: VertexId, payload: E) -> Self {
        Self {
            id,
            payload,
            from,
            to,
            super_edges: Vec::new(),
            sub_edges: Vec::new(),
        }
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    pub fn payload(&self) -> &E {
        &self.payload
    }

    pub(crate) fn payload_mut(&mut self) -> &mut E {
        &mut self.payload
    }

    pub(crate) fn into_payload(self) -> E {
        self.payload
    }

    /// Endpoint recorded as the origin at creation time.
    pub fn from(&self) -> VertexId {
        self.from
    }

    /// Endpoint recorded as the destination at creation time.
    pub fn to(&self) -> VertexId {
        self.to
    }

    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.from, self.to)
    }

    /// The endpoint across from `vertex`, or `None` if `vertex` is not an endpoint.
    pub fn opposite(&self, vertex: VertexId) -> Option<VertexId> {
        if vertex == self.from {
            Some(self.to)
        } else if vertex == self.to {
            Some(self.from)
        } else {
            None
        }
    }

    /// Whether the unordered endpoint pair equals `{a, b}`.
    pub fn connects(&self, a: VertexId, b: VertexId) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }

    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }

    pub fn super_edges(&self) -> &[EdgeRef] {
        &self.super_edges
    }

    pub fn has_super_edge(&self) -> bool {
        !self.super_edges.is_empty()
    }

    pub fn sub_edges(&self) -> &[EdgeRef] {
        &self.sub_edges
    }

    pub fn has_sub_edges(&self) -> bool {
        !self.sub_edges.is_empty()
    }

    pub fn has_sub_edge(&self, sub: EdgeRef) -> bool {
        self.sub_edges.contains(&sub)
    }

    /// Whether this edge takes part in any mapping relation.
    pub fn is_mapped(&self) -> bool {
        self.has_super_edge() || self.has_sub_edges()
    }

    pub(crate) fn push_sub_edge(&mut self, sub: EdgeRef) {
        self.sub_edges.push(sub);
    }

    pub(crate) fn remove_sub_edge(&mut self, sub: EdgeRef) -> bool {
        remove_first(&mut self.sub_edges, &sub)
    }

    pub(crate) fn take_sub_edges(&mut self) -> Vec<EdgeRef> {
        std::mem::take(&mut self.sub_edges)
    }

    pub(crate) fn push_super_edge(&mut self, superior: EdgeRef) {
        self.super_edges.push(superior);
    }

    pub(crate) fn remove_super_edge(&mut self, superior: EdgeRef) -> bool {
        remove_first(&mut self.super_edges, &superior)
    }

    pub(crate) fn take_super_edges(&mut self) -> Vec<EdgeRef> {
        std::mem::take(&mut self.super_edges)
    }
}
