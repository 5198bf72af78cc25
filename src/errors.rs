// src/errors.rs

//! Crate-wide error types.
//!
//! [`WalkError`] covers the conditions that abort a walk; every one of them is
//! fatal. [`GraphwalkError`] wraps it together with everything that can go
//! wrong around the walk (loading files, parsing, configuration, the sink).

use thiserror::Error;

use crate::graph::NodeName;

#[derive(Error, Debug)]
pub enum GraphwalkError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Graph format error: {0}")]
    GraphFormat(String),

    #[error(transparent)]
    Walk(#[from] WalkError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Fatal conditions detected while walking a graph.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WalkError {
    #[error("graph has {node_count} node(s) but none is flagged as the start node")]
    NoRoot { node_count: usize },

    #[error("node '{node}' is flagged as a start node but is reached through an edge from '{from}'")]
    DuplicateRoot { node: NodeName, from: NodeName },

    #[error("node '{from}' has an edge to '{node}', which does not exist in the graph")]
    NodeNotFound { node: NodeName, from: NodeName },

    #[error("node '{node}' has invalid edges: expected a mapping, found {found}")]
    InvalidEdges { node: NodeName, found: &'static str },

    #[error("edge '{node}' -> '{target}' has negative weight {weight}")]
    NegativeWeight {
        node: NodeName,
        target: NodeName,
        weight: f64,
    },

    #[error("edge '{node}' -> '{target}' has weight {weight}, which is out of range")]
    WeightOutOfRange {
        node: NodeName,
        target: NodeName,
        weight: f64,
    },
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, GraphwalkError>;
