// src/graph/mod.rs

//! Graph input.
//!
//! - [`model`] holds the generic, lazily validated graph representation.
//! - [`loader`] reads graph files (JSON, or TOML by extension) through the
//!   [`crate::fs::FileSystem`] abstraction.

pub mod loader;
pub mod model;

pub use loader::{load_graph, load_graph_with};
pub use model::{Edge, Graph, GraphNode, NodeName};
