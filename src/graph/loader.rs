// src/graph/loader.rs

use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::errors::Result;
use crate::fs::{FileSystem, RealFileSystem};
use crate::graph::model::Graph;

/// On-disk encodings a graph file may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFormat {
    Json,
    Toml,
}

impl GraphFormat {
    /// Pick the format from the file extension; anything that is not
    /// `.toml` is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => GraphFormat::Toml,
            _ => GraphFormat::Json,
        }
    }
}

/// Load a graph from disk.
pub fn load_graph(path: impl AsRef<Path>) -> Result<Graph> {
    load_graph_with(&RealFileSystem, path)
}

/// Load a graph through the given filesystem.
///
/// This only deserializes the file into a [`Graph`]; node contents are
/// validated later, as the walk reaches them.
pub fn load_graph_with(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<Graph> {
    let path = path.as_ref();
    let contents = fs.read_to_string(path)?;
    let format = GraphFormat::from_path(path);

    let graph = parse_graph(&contents, format)?;
    debug!(path = ?path, ?format, nodes = graph.len(), "loaded graph");

    Ok(graph)
}

/// Parse graph text in the given format.
pub fn parse_graph(contents: &str, format: GraphFormat) -> Result<Graph> {
    let value: Value = match format {
        GraphFormat::Json => serde_json::from_str(contents)?,
        GraphFormat::Toml => toml::from_str(contents)?,
    };
    Graph::from_value(value)
}
