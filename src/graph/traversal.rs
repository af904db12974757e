//! Constrained breadth-first path search.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::types::{EdgeId, GraphError, GraphResult, VertexId};

use super::Graph;

/// Fewest-hops path between two vertices, over any edge.
pub fn find_path<V, E>(
    graph: &Graph<V, E>,
    source: VertexId,
    target: VertexId,
) -> GraphResult<Vec<EdgeId>> {
    find_path_by(graph, source, target, |_| true)
}

/// Fewest-hops path between two vertices, traversing only edges whose payload
/// satisfies `admissible`.
///
/// Edges are returned ordered from `source` to `target`. Each edge keeps its
/// creation direction, so consecutive edges need not chain `to` -> `from`.
/// Ties resolve to the first-discovered path, scanning each vertex's incident
/// edges in insertion order.
pub fn find_path_by<V, E, F>(
    graph: &Graph<V, E>,
    source: VertexId,
    target: VertexId,
    admissible: F,
) -> GraphResult<Vec<EdgeId>>
where
    F: Fn(&E) -> bool,
{
    graph.vertex(source)?;
    graph.vertex(target)?;

    if source == target {
        return Ok(Vec::new());
    }

    let mut visited: HashSet<VertexId> = HashSet::new();
    let mut parents: HashMap<VertexId, EdgeId> = HashMap::new();
    let mut queue: VecDeque<VertexId> = VecDeque::new();

    visited.insert(source);
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        for &edge_id in graph.vertex(current)?.out_edges() {
            let edge = graph.edge(edge_id)?;
            let next = match edge.opposite(current) {
                Some(next) => next,
                None => continue,
            };
            if visited.contains(&next) || !admissible(edge.payload()) {
                continue;
            }

            visited.insert(next);
            parents.insert(next, edge_id);

            if next == target {
                let path = reconstruct_path(graph, &parents, source, target)?;
                log::debug!(
                    "path {} -> {} found with {} hop(s), {} vertices visited",
                    source,
                    target,
                    path.len(),
                    visited.len()
                );
                return Ok(path);
            }

            queue.push_back(next);
        }
    }

    log::debug!(
        "no path {} -> {} after visiting {} vertices",
        source,
        target,
        visited.len()
    );
    Err(GraphError::NoPathFound {
        start: source,
        target,
    })
}

fn reconstruct_path<V, E>(
    graph: &Graph<V, E>,
    parents: &HashMap<VertexId, EdgeId>,
    source: VertexId,
    target: VertexId,
) -> GraphResult<Vec<EdgeId>> {
    let mut path = Vec::new();
    let mut current = target;

    while current != source {
        let edge_id = *parents
            .get(&current)
            .ok_or(GraphError::VertexNotFound(current))?;
        path.push(edge_id);
        current = graph
            .edge(edge_id)?
            .opposite(current)
            .ok_or(GraphError::EdgeNotFound(edge_id))?;
    }

    path.reverse();
    Ok(path)
}

impl<V, E> Graph<V, E> {
    /// See [`find_path`].
    pub fn find_path(&self, source: VertexId, target: VertexId) -> GraphResult<Vec<EdgeId>> {
        find_path(self, source, target)
    }

    /// See [`find_path_by`].
    pub fn find_path_by<F>(
        &self,
        source: VertexId,
        target: VertexId,
        admissible: F,
    ) -> GraphResult<Vec<EdgeId>>
    where
        F: Fn(&E) -> bool,
    {
        find_path_by(self, source, target, admissible)
    }
}
