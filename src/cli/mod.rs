//! Debugging CLI over edge-list text files.

pub mod commands;
pub mod edge_list;

pub use edge_list::{load_edge_list, parse_edge_list, EdgeSummary, LabeledGraph};
