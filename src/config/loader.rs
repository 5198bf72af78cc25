// src/config/loader.rs

use std::path::{Path, PathBuf};

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::Result;
use crate::fs::{FileSystem, RealFileSystem};

/// Load a configuration file from a given path and return the raw `RawConfigFile`.
///
/// This only performs TOML deserialization; use [`load_and_validate`] for a
/// checked [`ConfigFile`].
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    load_from_path_with(&RealFileSystem, path)
}

/// Like [`load_from_path`], reading through the given filesystem.
pub fn load_from_path_with(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let contents = fs.read_to_string(path.as_ref())?;
    let config: RawConfigFile = toml::from_str(&contents)?;
    Ok(config)
}

/// Load a configuration file from path and validate it.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    load_and_validate_with(&RealFileSystem, path)
}

/// Like [`load_and_validate`], reading through the given filesystem.
pub fn load_and_validate_with(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<ConfigFile> {
    let raw_config = load_from_path_with(fs, path)?;
    let config = ConfigFile::try_from(raw_config)?;
    Ok(config)
}

/// Config file picked up from the working directory when `--config` is not
/// given, if it exists.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Graphwalk.toml")
}
