// src/config/mod.rs

//! Configuration loading and validation for graphwalk.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate it (`validate.rs`).
//! - Merge it with command-line overrides into runtime [`Settings`]
//!   (`settings.rs`).

pub mod loader;
pub mod model;
pub mod settings;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_and_validate_with, load_from_path};
pub use model::{ConfigFile, OutputSection, RawConfigFile, WalkSection};
pub use settings::{Overrides, Settings};
