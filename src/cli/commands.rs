//! CLI command implementations.

use std::path::Path;

use crate::types::GraphResult;

use super::edge_list::{load_edge_list, EdgeSummary};

/// Display vertex and edge counts of an edge-list file.
pub fn cmd_info(path: &Path, json: bool) -> GraphResult<()> {
    let labeled = load_edge_list(path)?;
    let graph = labeled.graph();

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "vertices": graph.vertex_count(),
            "edges": graph.edge_count(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Vertices: {}", graph.vertex_count());
        println!("Edges: {}", graph.edge_count());
    }
    Ok(())
}

/// Print the adjacency listing.
pub fn cmd_dump(path: &Path, json: bool) -> GraphResult<()> {
    let labeled = load_edge_list(path)?;
    let graph = labeled.graph();

    if json {
        let mut vertices = Vec::with_capacity(graph.vertex_count());
        for vertex in graph.vertices() {
            let neighbors = vertex
                .neighbors()
                .iter()
                .map(|&n| labeled.label(n).map(str::to_string))
                .collect::<GraphResult<Vec<String>>>()?;
            vertices.push(serde_json::json!({
                "id": vertex.id(),
                "label": vertex.payload(),
                "neighbors": neighbors,
            }));
        }
        let edges = graph
            .edge_ids()
            .map(|id| labeled.summarize(id))
            .collect::<GraphResult<Vec<EdgeSummary>>>()?;
        let dump = serde_json::json!({ "vertices": vertices, "edges": edges });
        println!(
            "{}",
            serde_json::to_string_pretty(&dump).unwrap_or_default()
        );
    } else {
        print!("{}", graph);
    }
    Ok(())
}

/// Show the first edge connecting two labels.
pub fn cmd_between(path: &Path, a: &str, b: &str, json: bool) -> GraphResult<()> {
    let labeled = load_edge_list(path)?;
    let edge = labeled
        .graph()
        .between(labeled.vertex_id(a)?, labeled.vertex_id(b)?)?;
    let summary = labeled.summarize(edge)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&summary).unwrap_or_default()
        );
    } else {
        println!(
            "{}: {} - {} (weight {})",
            summary.id, summary.from, summary.to, summary.weight
        );
    }
    Ok(())
}

/// Find a fewest-hops path between two labels.
pub fn cmd_path(
    path: &Path,
    from: &str,
    to: &str,
    min_weight: Option<f64>,
    json: bool,
) -> GraphResult<()> {
    let labeled = load_edge_list(path)?;
    let edges = labeled.path(from, to, min_weight)?;
    let steps = edges
        .iter()
        .map(|&id| labeled.summarize(id))
        .collect::<GraphResult<Vec<EdgeSummary>>>()?;

    if json {
        let result = serde_json::json!({
            "from": from,
            "to": to,
            "min_weight": min_weight,
            "hops": steps.len(),
            "edges": steps,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&result).unwrap_or_default()
        );
    } else {
        println!("Path {} -> {} ({} hops):", from, to, steps.len());
        for step in &steps {
            println!(
                "  {}: {} - {} (weight {})",
                step.id, step.from, step.to, step.weight
            );
        }
    }
    Ok(())
}
