// src/walk/validator.rs

//! Lazy node validation.
//!
//! Nothing is checked across the whole graph up front. A node is checked
//! in two phases, each at most once per node name:
//!
//! - **discovery**, when the walk first reaches the node (as the root, or as
//!   the target of an edge): the node must exist, and a start-flagged node
//!   must not be reached through an edge.
//! - **edges**, when the node's own visit is due: its `edges` field must be
//!   a mapping and every numeric weight must be a usable, non-negative
//!   delay. Non-numeric weights are dropped from the walk.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::WalkError;
use crate::graph::model::json_kind;
use crate::graph::{Edge, Graph, GraphNode};

/// How the walk reached a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discovery<'a> {
    /// The node is the walk's start node.
    Root,
    /// The node is the target of an edge leaving `from`.
    EdgeTarget { from: &'a str },
}

/// Validates nodes of a borrowed graph as the walk reaches them.
#[derive(Debug)]
pub struct NodeValidator<'g> {
    graph: &'g Graph,
    /// Nodes that already passed the discovery check as an edge target.
    reached: HashSet<&'g str>,
    /// Validated edge lists, by node name.
    edges: HashMap<&'g str, Arc<[Edge]>>,
}

impl<'g> NodeValidator<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            reached: HashSet::new(),
            edges: HashMap::new(),
        }
    }

    /// Find the start node.
    ///
    /// Returns `Ok(None)` for an empty graph. If several nodes carry the
    /// start flag, the first in document order wins; the others are only
    /// rejected if the walk ever reaches them.
    pub fn find_root(&self) -> Result<Option<&'g str>, WalkError> {
        if self.graph.is_empty() {
            return Ok(None);
        }

        match self.graph.nodes().find(|node| node.is_root()) {
            Some(node) => Ok(Some(node.name())),
            None => Err(WalkError::NoRoot {
                node_count: self.graph.len(),
            }),
        }
    }

    /// Discovery check for a node the walk has just reached.
    pub fn discover(&mut self, name: &str, how: Discovery<'_>) -> Result<GraphNode<'g>, WalkError> {
        let node = match self.graph.node(name) {
            Some(node) => node,
            None => {
                let from = match how {
                    Discovery::EdgeTarget { from } => from,
                    Discovery::Root => name,
                };
                return Err(WalkError::NodeNotFound {
                    node: name.to_string(),
                    from: from.to_string(),
                });
            }
        };

        if let Discovery::EdgeTarget { from } = how {
            if self.reached.contains(node.name()) {
                return Ok(node);
            }
            if node.is_root() {
                return Err(WalkError::DuplicateRoot {
                    node: name.to_string(),
                    from: from.to_string(),
                });
            }
            self.reached.insert(node.name());
            debug!(node = %name, from = %from, "discovered node");
        }

        Ok(node)
    }

    /// The node's outgoing edges, in declaration order, validated on first use.
    pub fn validated_edges(&mut self, name: &str) -> Result<Arc<[Edge]>, WalkError> {
        if let Some(edges) = self.edges.get(name) {
            return Ok(Arc::clone(edges));
        }

        let node = self.graph.node(name).ok_or_else(|| WalkError::NodeNotFound {
            node: name.to_string(),
            from: name.to_string(),
        })?;

        let edges: Arc<[Edge]> = parse_edges(node)?.into();
        self.edges.insert(node.name(), Arc::clone(&edges));
        Ok(edges)
    }
}

fn parse_edges(node: GraphNode<'_>) -> Result<Vec<Edge>, WalkError> {
    let raw = match node.raw_edges() {
        Some(Value::Object(raw)) => raw,
        Some(other) => {
            return Err(WalkError::InvalidEdges {
                node: node.name().to_string(),
                found: json_kind(other),
            });
        }
        None => {
            return Err(WalkError::InvalidEdges {
                node: node.name().to_string(),
                found: "no edges field",
            });
        }
    };

    let mut edges = Vec::with_capacity(raw.len());

    for (target, weight) in raw {
        let Some(weight) = weight.as_f64() else {
            warn!(
                node = %node.name(),
                target = %target,
                value = %weight,
                "edge weight is not a number; leaving edge out of the walk"
            );
            continue;
        };

        if weight < 0.0 {
            return Err(WalkError::NegativeWeight {
                node: node.name().to_string(),
                target: target.clone(),
                weight,
            });
        }

        // Covers -0.0 as well.
        let delay = if weight == 0.0 {
            Duration::ZERO
        } else {
            Duration::try_from_secs_f64(weight).map_err(|_| WalkError::WeightOutOfRange {
                node: node.name().to_string(),
                target: target.clone(),
                weight,
            })?
        };

        edges.push(Edge {
            target: target.clone(),
            delay,
        });
    }

    Ok(edges)
}
