// src/graph/model.rs

use std::time::Duration;

use serde_json::{Map, Value};

use crate::errors::{GraphwalkError, Result};

/// Canonical node name type used throughout the walker.
pub type NodeName = String;

/// Keys that flag a node as the walk's start node.
///
/// `start` is what graph files use; `isRoot` is accepted as an alias.
const ROOT_FLAG_KEYS: [&str; 2] = ["start", "isRoot"];

/// Key holding a node's outgoing edges.
const EDGES_KEY: &str = "edges";

/// A weighted, directed graph as read from a graph file.
///
/// The graph is kept in its generic, already-deserialized form. Nothing
/// about individual nodes is checked up front; the walker validates each
/// node lazily the first time it reaches it.
///
/// ```json
/// {
///   "A": { "start": true, "edges": { "B": 5, "C": 7 } },
///   "B": { "edges": {} },
///   "C": { "edges": {} }
/// }
/// ```
///
/// Node order is the order of the source document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    nodes: Map<String, Value>,
}

impl Graph {
    /// Build a graph from a generic value whose top level must be a mapping.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(nodes) => Ok(Self { nodes }),
            other => Err(GraphwalkError::GraphFormat(format!(
                "top level of a graph must be a mapping of node names, found {}",
                json_kind(&other)
            ))),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Look up a node by name.
    pub fn node(&self, name: &str) -> Option<GraphNode<'_>> {
        self.nodes
            .get_key_value(name)
            .map(|(name, value)| GraphNode { name, value })
    }

    /// All nodes, in document order.
    pub fn nodes(&self) -> impl Iterator<Item = GraphNode<'_>> {
        self.nodes
            .iter()
            .map(|(name, value)| GraphNode { name, value })
    }
}

/// Borrowed view of a single node entry.
#[derive(Debug, Clone, Copy)]
pub struct GraphNode<'g> {
    name: &'g str,
    value: &'g Value,
}

impl<'g> GraphNode<'g> {
    pub fn name(&self) -> &'g str {
        self.name
    }

    /// Whether the node carries the start flag.
    ///
    /// Only a literal boolean `true` counts.
    pub fn is_root(&self) -> bool {
        ROOT_FLAG_KEYS
            .iter()
            .any(|key| matches!(self.value.get(key), Some(Value::Bool(true))))
    }

    /// The raw `edges` field, if the node has one.
    pub fn raw_edges(&self) -> Option<&'g Value> {
        self.value.get(EDGES_KEY)
    }
}

/// A validated outgoing edge: target name plus the delay its weight stands for.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub target: NodeName,
    pub delay: Duration,
}

/// Human-readable name of a JSON value's kind, for error messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a mapping",
    }
}
