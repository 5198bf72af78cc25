#![allow(dead_code)]

use graphwalk::graph::Graph;
use serde_json::{json, Map, Value};

/// Builder for `Graph` to simplify test setup.
///
/// Nodes keep insertion order, like a graph file does.
pub struct GraphBuilder {
    nodes: Map<String, Value>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self { nodes: Map::new() }
    }

    /// Add the start node.
    pub fn root(self, name: &str, edges: &[(&str, f64)]) -> Self {
        let value = json!({ "start": true, "edges": edge_map(edges) });
        self.raw(name, value)
    }

    /// Add a plain node.
    pub fn node(self, name: &str, edges: &[(&str, f64)]) -> Self {
        let value = json!({ "edges": edge_map(edges) });
        self.raw(name, value)
    }

    /// Add a node with an arbitrary JSON body.
    pub fn raw(mut self, name: &str, value: Value) -> Self {
        self.nodes.insert(name.to_string(), value);
        self
    }

    pub fn build(self) -> Graph {
        Graph::from_value(Value::Object(self.nodes)).expect("builder always produces a mapping")
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn edge_map(edges: &[(&str, f64)]) -> Value {
    let mut map = Map::new();
    for (target, weight) in edges {
        map.insert(target.to_string(), json!(weight));
    }
    Value::Object(map)
}
