//! Arena of graphs and the graph-to-graph mapping.

use crate::graph::{Edge, Graph, Store, Vertex};
use crate::types::{EdgeRef, GraphError, GraphId, GraphResult, VertexRef};

/// Owns a set of graphs and the super/sub relations between them and their
/// elements.
///
/// Every relation is stored as ids on both sides; each mapping call updates
/// both sides before returning, and validates everything before mutating.
#[derive(Debug, Clone)]
pub struct Hierarchy<V, E> {
    graphs: Store<GraphId, Graph<V, E>>,
}

impl<V, E> Hierarchy<V, E> {
    /// Create an empty hierarchy.
    pub fn new() -> Self {
        Self {
            graphs: Store::new(),
        }
    }

    /// Take ownership of a graph and return its id.
    ///
    /// Mapping relations the graph carried from elsewhere do not resolve here
    /// and are cleared.
    pub fn add_graph(&mut self, mut graph: Graph<V, E>) -> GraphId {
        graph.clear_mappings();
        let id = self.graphs.insert_with(|_| graph);
        log::trace!("added graph {}", id);
        id
    }

    /// Add a new empty graph.
    pub fn create_graph(&mut self) -> GraphId {
        self.add_graph(Graph::new())
    }

    /// Remove a graph that no longer takes part in any mapping.
    pub fn remove_graph(&mut self, id: GraphId) -> GraphResult<Graph<V, E>> {
        if self.graph(id)?.is_mapped() {
            return Err(GraphError::GraphStillMapped(id));
        }
        self.graphs.remove(id).ok_or(GraphError::GraphNotFound(id))
    }

    pub fn graph(&self, id: GraphId) -> GraphResult<&Graph<V, E>> {
        self.graphs.get(id).ok_or(GraphError::GraphNotFound(id))
    }

    pub fn graph_mut(&mut self, id: GraphId) -> GraphResult<&mut Graph<V, E>> {
        self.graphs.get_mut(id).ok_or(GraphError::GraphNotFound(id))
    }

    pub fn has_graph(&self, id: GraphId) -> bool {
        self.graphs.contains(id)
    }

    /// Number of graphs.
    pub fn graph_count(&self) -> usize {
        self.graphs.len()
    }

    /// `(id, graph)` pairs in ascending id order.
    pub fn graphs(&self) -> impl Iterator<Item = (GraphId, &Graph<V, E>)> + '_ {
        self.graphs.iter()
    }

    /// Map `child` onto `parent` as a subgraph.
    ///
    /// Fails with [`GraphError::GraphAlreadyMapped`] if `child` already has a
    /// supergraph; unmap it first.
    pub fn map_graph(&mut self, parent: GraphId, child: GraphId) -> GraphResult<()> {
        self.graph(parent)?;
        if let Some(existing) = self.graph(child)?.supergraph() {
            return Err(GraphError::GraphAlreadyMapped {
                child,
                parent: existing,
            });
        }

        self.graph_mut(parent)?.push_subgraph(child);
        self.graph_mut(child)?.set_supergraph(Some(parent));
        log::debug!("mapped graph {} onto {}", child, parent);
        Ok(())
    }

    /// Remove `child` from `parent`'s subgraphs and clear its supergraph.
    pub fn unmap_graph(&mut self, parent: GraphId, child: GraphId) -> GraphResult<()> {
        self.graph(child)?;
        if !self.graph(parent)?.has_subgraph(child) {
            return Err(GraphError::GraphNotMapped { parent, child });
        }

        self.graph_mut(parent)?.remove_subgraph(child);
        self.graph_mut(child)?.set_supergraph(None);
        log::debug!("unmapped graph {} from {}", child, parent);
        Ok(())
    }

    // ==================== Element removal ====================

    /// Remove an isolated vertex, dropping every mapping it takes part in.
    ///
    /// Fails with [`GraphError::NotEmpty`] while any edge is incident; nothing
    /// is changed in that case.
    pub fn remove_vertex(&mut self, at: VertexRef) -> GraphResult<V> {
        match self.graph(at.graph)?.vertex(at.vertex) {
            Ok(vertex) if vertex.has_neighbors() => {
                return Err(GraphError::NotEmpty {
                    vertex: at.vertex,
                    neighbors: vertex.degree(),
                })
            }
            Ok(_) => {}
            Err(_) => return Err(GraphError::InvalidVertexHandle(at.vertex)),
        }

        self.detach_vertex(at)?;
        self.graph_mut(at.graph)?.remove_vertex(at.vertex)
    }

    /// Remove a vertex and its incident edges, dropping the mappings of the
    /// vertex and of every removed edge.
    pub fn remove_vertex_with_edges(&mut self, at: VertexRef) -> GraphResult<V> {
        let incident = self
            .graph(at.graph)?
            .vertex(at.vertex)
            .map_err(|_| GraphError::InvalidVertexHandle(at.vertex))?
            .out_edges()
            .to_vec();

        for edge in incident {
            self.detach_edge(EdgeRef::new(at.graph, edge))?;
        }
        self.detach_vertex(at)?;
        self.graph_mut(at.graph)?.remove_vertex_with_edges(at.vertex)
    }

    /// Remove an edge, dropping every mapping it takes part in.
    pub fn remove_edge(&mut self, at: EdgeRef) -> GraphResult<E> {
        if !self.graph(at.graph)?.has_edge(at.edge) {
            return Err(GraphError::InvalidEdgeHandle(at.edge));
        }

        self.detach_edge(at)?;
        self.graph_mut(at.graph)?.remove_edge(at.edge)
    }

    // ==================== Element resolution ====================

    /// Resolve a cross-graph vertex reference.
    pub fn vertex(&self, at: VertexRef) -> GraphResult<&Vertex<V>> {
        self.graph(at.graph)?.vertex(at.vertex)
    }

    /// Resolve a cross-graph edge reference.
    pub fn edge(&self, at: EdgeRef) -> GraphResult<&Edge<E>> {
        self.graph(at.graph)?.edge(at.edge)
    }

    pub(crate) fn vertex_mut(&mut self, at: VertexRef) -> GraphResult<&mut Vertex<V>> {
        self.graph_mut(at.graph)?.vertex_entry_mut(at.vertex)
    }

    pub(crate) fn edge_mut(&mut self, at: EdgeRef) -> GraphResult<&mut Edge<E>> {
        self.graph_mut(at.graph)?.edge_entry_mut(at.edge)
    }

    /// Two distinct vertices, both mutable, possibly in different graphs.
    pub(crate) fn vertex_pair_mut(
        &mut self,
        first: VertexRef,
        second: VertexRef,
    ) -> GraphResult<(&mut Vertex<V>, &mut Vertex<V>)> {
        if first == second {
            return Err(GraphError::VertexSelfMapped(first));
        }
        if first.graph == second.graph {
            self.graph_mut(first.graph)?
                .vertex_pair_mut(first.vertex, second.vertex)
        } else {
            let (a, b) = self.graph_pair_mut(first.graph, second.graph)?;
            Ok((
                a.vertex_entry_mut(first.vertex)?,
                b.vertex_entry_mut(second.vertex)?,
            ))
        }
    }

    /// Two distinct edges, both mutable, possibly in different graphs.
    pub(crate) fn edge_pair_mut(
        &mut self,
        first: EdgeRef,
        second: EdgeRef,
    ) -> GraphResult<(&mut Edge<E>, &mut Edge<E>)> {
        if first == second {
            return Err(GraphError::EdgeSelfMapped(first));
        }
        if first.graph == second.graph {
            self.graph_mut(first.graph)?
                .edge_pair_mut(first.edge, second.edge)
        } else {
            let (a, b) = self.graph_pair_mut(first.graph, second.graph)?;
            Ok((a.edge_entry_mut(first.edge)?, b.edge_entry_mut(second.edge)?))
        }
    }

    fn graph_pair_mut(
        &mut self,
        first: GraphId,
        second: GraphId,
    ) -> GraphResult<(&mut Graph<V, E>, &mut Graph<V, E>)> {
        self.graph(first)?;
        self.graph(second)?;
        self.graphs
            .get_pair_mut(first, second)
            .ok_or(GraphError::GraphNotFound(second))
    }
}

impl<V, E> Default for Hierarchy<V, E> {
    fn default() -> Self {
        Self::new()
    }
}
