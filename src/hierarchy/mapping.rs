//! Vertex-to-vertex and edge-to-edge mapping across graphs of a hierarchy.

use crate::graph::{Edge, Vertex};
use crate::types::{EdgeRef, GraphError, GraphId, GraphResult, VertexRef};

use super::Hierarchy;

impl<V, E> Hierarchy<V, E> {
    // ==================== Vertices ====================

    /// Map `sub` onto `superior`.
    ///
    /// A vertex holds at most one super vertex; mapping a vertex that already
    /// has one fails with [`GraphError::VertexAlreadyMapped`].
    pub fn map_vertex(&mut self, superior: VertexRef, sub: VertexRef) -> GraphResult<()> {
        self.vertex(superior)?;
        if superior == sub {
            return Err(GraphError::VertexSelfMapped(sub));
        }
        if let Some(existing) = self.vertex(sub)?.super_vertex() {
            return Err(GraphError::VertexAlreadyMapped {
                sub,
                superior: existing,
            });
        }

        self.vertex_mut(superior)?.push_sub_vertex(sub);
        self.vertex_mut(sub)?.set_super_vertex(Some(superior));
        log::debug!("mapped vertex {} onto {}", sub, superior);
        Ok(())
    }

    /// Remove `sub` from `superior`'s sub vertices and clear its super vertex.
    pub fn unmap_vertex(&mut self, superior: VertexRef, sub: VertexRef) -> GraphResult<()> {
        self.vertex(sub)?;
        if !self.vertex(superior)?.has_sub_vertex(sub) {
            return Err(GraphError::VertexNotMapped { superior, sub });
        }

        self.vertex_mut(superior)?.remove_sub_vertex(sub);
        let vertex = self.vertex_mut(sub)?;
        if vertex.super_vertex() == Some(superior) {
            vertex.set_super_vertex(None);
        }
        log::debug!("unmapped vertex {} from {}", sub, superior);
        Ok(())
    }

    /// The super vertex of `at`, if any.
    pub fn super_vertex_of(&self, at: VertexRef) -> GraphResult<Option<&Vertex<V>>> {
        match self.vertex(at)?.super_vertex() {
            Some(superior) => self.vertex(superior).map(Some),
            None => Ok(None),
        }
    }

    /// The sub vertices of `at`, in mapping order.
    pub fn sub_vertices_of(&self, at: VertexRef) -> GraphResult<Vec<&Vertex<V>>> {
        self.vertex(at)?
            .sub_vertices()
            .iter()
            .map(|&sub| self.vertex(sub))
            .collect()
    }

    /// Drop every vertex mapping `at` takes part in, on both sides.
    pub fn detach_vertex(&mut self, at: VertexRef) -> GraphResult<()> {
        let vertex = self.vertex_mut(at)?;
        let superior = vertex.super_vertex();
        vertex.set_super_vertex(None);
        let subs = vertex.take_sub_vertices();

        if let Some(superior) = superior {
            if let Ok(parent) = self.vertex_mut(superior) {
                parent.remove_sub_vertex(at);
            }
        }
        for sub in subs {
            if let Ok(child) = self.vertex_mut(sub) {
                if child.super_vertex() == Some(at) {
                    child.set_super_vertex(None);
                }
            }
        }
        log::debug!("detached vertex {} from all mappings", at);
        Ok(())
    }

    // ==================== Edges ====================

    /// Link-map `sub` onto `superior`: `sub` ends up with exactly one super
    /// edge. Previous super edges lose `sub` from their sub-edge lists.
    pub fn map_edge_link(&mut self, superior: EdgeRef, sub: EdgeRef) -> GraphResult<()> {
        self.edge(superior)?;
        let previous = self.edge(sub)?.super_edges().to_vec();
        if superior == sub {
            return Err(GraphError::EdgeSelfMapped(sub));
        }

        for old in previous {
            // stale super edges have nothing left to update
            if let Ok(edge) = self.edge_mut(old) {
                edge.remove_sub_edge(sub);
            }
        }
        self.edge_mut(sub)?.take_super_edges();

        self.edge_mut(superior)?.push_sub_edge(sub);
        self.edge_mut(sub)?.push_super_edge(superior);
        log::debug!("link-mapped edge {} onto {}", sub, superior);
        Ok(())
    }

    /// Path-map `sub` onto `superior`: `sub` keeps its other super edges.
    pub fn map_edge_path(&mut self, superior: EdgeRef, sub: EdgeRef) -> GraphResult<()> {
        self.edge(superior)?;
        self.edge(sub)?;
        if superior == sub {
            return Err(GraphError::EdgeSelfMapped(sub));
        }

        self.edge_mut(superior)?.push_sub_edge(sub);
        self.edge_mut(sub)?.push_super_edge(superior);
        log::debug!("path-mapped edge {} onto {}", sub, superior);
        Ok(())
    }

    /// Remove one `sub` entry from `superior`'s sub edges and one `superior`
    /// entry from `sub`'s super edges. Other path mappings of `sub` survive.
    pub fn unmap_edge(&mut self, superior: EdgeRef, sub: EdgeRef) -> GraphResult<()> {
        self.edge(sub)?;
        if !self.edge(superior)?.has_sub_edge(sub) {
            return Err(GraphError::EdgeNotMapped { superior, sub });
        }

        self.edge_mut(superior)?.remove_sub_edge(sub);
        self.edge_mut(sub)?.remove_super_edge(superior);
        log::debug!("unmapped edge {} from {}", sub, superior);
        Ok(())
    }

    /// The super edges of `at`, in mapping order.
    pub fn super_edges_of(&self, at: EdgeRef) -> GraphResult<Vec<&Edge<E>>> {
        self.edge(at)?
            .super_edges()
            .iter()
            .map(|&superior| self.edge(superior))
            .collect()
    }

    /// The sub edges of `at`, in mapping order.
    pub fn sub_edges_of(&self, at: EdgeRef) -> GraphResult<Vec<&Edge<E>>> {
        self.edge(at)?
            .sub_edges()
            .iter()
            .map(|&sub| self.edge(sub))
            .collect()
    }

    /// Drop every edge mapping `at` takes part in, on both sides.
    pub fn detach_edge(&mut self, at: EdgeRef) -> GraphResult<()> {
        let edge = self.edge_mut(at)?;
        let supers = edge.take_super_edges();
        let subs = edge.take_sub_edges();

        for superior in supers {
            if let Ok(parent) = self.edge_mut(superior) {
                parent.remove_sub_edge(at);
            }
        }
        for sub in subs {
            if let Ok(child) = self.edge_mut(sub) {
                child.remove_super_edge(at);
            }
        }
        log::debug!("detached edge {} from all mappings", at);
        Ok(())
    }

    // ==================== Graphs ====================

    /// Drop the graph-level relations of `id`: its supergraph link and all of
    /// its subgraphs. Element mappings are left alone.
    pub fn detach_graph(&mut self, id: GraphId) -> GraphResult<()> {
        let graph = self.graph(id)?;
        let parent = graph.supergraph();
        let children = graph.subgraphs().to_vec();

        if let Some(parent) = parent {
            self.unmap_graph(parent, id)?;
        }
        for child in children {
            if self.graph(id)?.has_subgraph(child) {
                self.unmap_graph(id, child)?;
            }
        }
        Ok(())
    }

    // ==================== Callback forms ====================
    //
    // `sync` receives the super payload first and the sub payload second, both
    // mutable, and runs only after the structural change succeeded.

    /// [`map_vertex`](Self::map_vertex) followed by `sync`.
    pub fn map_vertex_with<F>(
        &mut self,
        superior: VertexRef,
        sub: VertexRef,
        sync: F,
    ) -> GraphResult<()>
    where
        F: FnOnce(&mut V, &mut V),
    {
        self.map_vertex(superior, sub)?;
        self.sync_vertex(superior, sub, sync)
    }

    /// [`unmap_vertex`](Self::unmap_vertex) followed by `sync`.
    pub fn unmap_vertex_with<F>(
        &mut self,
        superior: VertexRef,
        sub: VertexRef,
        sync: F,
    ) -> GraphResult<()>
    where
        F: FnOnce(&mut V, &mut V),
    {
        self.unmap_vertex(superior, sub)?;
        self.sync_vertex(superior, sub, sync)
    }

    /// [`map_edge_link`](Self::map_edge_link) followed by `sync`.
    pub fn map_edge_link_with<F>(
        &mut self,
        superior: EdgeRef,
        sub: EdgeRef,
        sync: F,
    ) -> GraphResult<()>
    where
        F: FnOnce(&mut E, &mut E),
    {
        self.map_edge_link(superior, sub)?;
        self.sync_edge(superior, sub, sync)
    }

    /// [`map_edge_path`](Self::map_edge_path) followed by `sync`.
    pub fn map_edge_path_with<F>(
        &mut self,
        superior: EdgeRef,
        sub: EdgeRef,
        sync: F,
    ) -> GraphResult<()>
    where
        F: FnOnce(&mut E, &mut E),
    {
        self.map_edge_path(superior, sub)?;
        self.sync_edge(superior, sub, sync)
    }

    /// [`unmap_edge`](Self::unmap_edge) followed by `sync`.
    pub fn unmap_edge_with<F>(
        &mut self,
        superior: EdgeRef,
        sub: EdgeRef,
        sync: F,
    ) -> GraphResult<()>
    where
        F: FnOnce(&mut E, &mut E),
    {
        self.unmap_edge(superior, sub)?;
        self.sync_edge(superior, sub, sync)
    }

    fn sync_vertex<F>(&mut self, superior: VertexRef, sub: VertexRef, sync: F) -> GraphResult<()>
    where
        F: FnOnce(&mut V, &mut V),
    {
        let (upper, lower) = self.vertex_pair_mut(superior, sub)?;
        sync(upper.payload_mut(), lower.payload_mut());
        Ok(())
    }

    fn sync_edge<F>(&mut self, superior: EdgeRef, sub: EdgeRef, sync: F) -> GraphResult<()>
    where
        F: FnOnce(&mut E, &mut E),
    {
        let (upper, lower) = self.edge_pair_mut(superior, sub)?;
        sync(upper.payload_mut(), lower.payload_mut());
        Ok(())
    }
}
