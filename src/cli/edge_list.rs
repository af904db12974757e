//! Edge-list text input for the CLI.
//!
//! One declaration per line, `#` starts a comment:
//!
//! ```text
//! # isolated vertex
//! d
//! # edge with weight (defaults to 1.0)
//! a b 2.5
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::Serialize;

use crate::graph::Graph;
use crate::types::{EdgeId, GraphError, GraphResult, VertexId, DEFAULT_EDGE_WEIGHT};

/// A graph of string-labelled vertices and weighted edges.
pub struct LabeledGraph {
    graph: Graph<String, f64>,
    labels: HashMap<String, VertexId>,
}

/// Serializable view of one edge, endpoints shown by label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeSummary {
    pub id: EdgeId,
    pub from: String,
    pub to: String,
    pub weight: f64,
}

impl LabeledGraph {
    /// Create an empty labelled graph.
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
            labels: HashMap::new(),
        }
    }

    pub fn graph(&self) -> &Graph<String, f64> {
        &self.graph
    }

    /// Id of the vertex with `label`, creating it on first use.
    pub fn intern(&mut self, label: &str) -> VertexId {
        if let Some(&id) = self.labels.get(label) {
            return id;
        }
        let id = self.graph.add_vertex(label.to_string());
        self.labels.insert(label.to_string(), id);
        id
    }

    /// Add a weighted edge between two labels.
    pub fn link(&mut self, from: &str, to: &str, weight: f64) -> GraphResult<EdgeId> {
        let from = self.intern(from);
        let to = self.intern(to);
        self.graph.add_edge(from, to, weight)
    }

    /// Look up a vertex id by label.
    pub fn vertex_id(&self, label: &str) -> GraphResult<VertexId> {
        self.labels
            .get(label)
            .copied()
            .ok_or_else(|| GraphError::LabelNotFound(label.to_string()))
    }

    /// Label of a vertex.
    pub fn label(&self, id: VertexId) -> GraphResult<&str> {
        self.graph.vertex(id).map(|v| v.payload().as_str())
    }

    /// Describe an edge by its endpoint labels.
    pub fn summarize(&self, id: EdgeId) -> GraphResult<EdgeSummary> {
        let edge = self.graph.edge(id)?;
        Ok(EdgeSummary {
            id,
            from: self.label(edge.from())?.to_string(),
            to: self.label(edge.to())?.to_string(),
            weight: *edge.payload(),
        })
    }

    /// BFS path between two labels, admitting only edges with weight at
    /// least `min_weight` when given.
    pub fn path(
        &self,
        from: &str,
        to: &str,
        min_weight: Option<f64>,
    ) -> GraphResult<Vec<EdgeId>> {
        let source = self.vertex_id(from)?;
        let target = self.vertex_id(to)?;
        match min_weight {
            Some(min) => self.graph.find_path_by(source, target, |weight| *weight >= min),
            None => self.graph.find_path(source, target),
        }
    }
}

impl Default for LabeledGraph {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse edge-list text into a labelled graph.
pub fn parse_edge_list(text: &str) -> GraphResult<LabeledGraph> {
    let mut labeled = LabeledGraph::new();

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let content = match raw.find('#') {
            Some(pos) => &raw[..pos],
            None => raw,
        };
        let tokens: Vec<&str> = content.split_whitespace().collect();

        match tokens.as_slice() {
            [] => {}
            [label] => {
                labeled.intern(label);
            }
            [from, to] => {
                labeled.link(from, to, DEFAULT_EDGE_WEIGHT)?;
            }
            [from, to, weight] => {
                let weight: f64 = weight.parse().map_err(|_| GraphError::Parse {
                    line,
                    message: format!("invalid weight '{}'", weight),
                })?;
                labeled.link(from, to, weight)?;
            }
            _ => {
                return Err(GraphError::Parse {
                    line,
                    message: format!(
                        "expected '<vertex>' or '<from> <to> [weight]', got {} tokens",
                        tokens.len()
                    ),
                });
            }
        }
    }

    log::debug!(
        "parsed edge list: {} vertices, {} edges",
        labeled.graph.vertex_count(),
        labeled.graph.edge_count()
    );
    Ok(labeled)
}

/// Read and parse an edge-list file.
pub fn load_edge_list(path: &Path) -> GraphResult<LabeledGraph> {
    let text = std::fs::read_to_string(path)?;
    parse_edge_list(&text)
}
