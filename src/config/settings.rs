// src/config/settings.rs

//! Effective runtime settings: config file values with command-line
//! overrides applied on top.

use std::path::Path;
use std::time::Duration;

use chrono::FixedOffset;
use tracing::debug;

use crate::config::loader::{default_config_path, load_and_validate_with};
use crate::config::model::ConfigFile;
use crate::config::validate::validate_tick_ms;
use crate::errors::Result;
use crate::fs::FileSystem;
use crate::types::{PacingMode, TimeZoneSetting};
use crate::walk::{Pacing, WalkOptions};

/// Values given on the command line; `None` keeps the config file value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub time_zone: Option<TimeZoneSetting>,
    pub pacing: Option<PacingMode>,
    pub tick_ms: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub time_zone: TimeZoneSetting,
    /// `time_zone` resolved to a concrete offset for timestamp rendering.
    pub offset: FixedOffset,
    pub walk: WalkOptions,
}

impl Settings {
    /// Load the config file and apply overrides.
    ///
    /// - an explicit `config_path` must exist and be valid
    /// - otherwise `Graphwalk.toml` is used if present
    /// - otherwise built-in defaults apply
    pub fn load(
        fs: &dyn FileSystem,
        config_path: Option<&Path>,
        overrides: &Overrides,
    ) -> Result<Self> {
        let cfg = match config_path {
            Some(path) => load_and_validate_with(fs, path)?,
            None => {
                let path = default_config_path();
                if fs.is_file(&path) {
                    debug!(path = ?path, "using config file from working directory");
                    load_and_validate_with(fs, &path)?
                } else {
                    ConfigFile::default()
                }
            }
        };

        Self::resolve(&cfg, overrides)
    }

    /// Combine a validated config with overrides.
    pub fn resolve(cfg: &ConfigFile, overrides: &Overrides) -> Result<Self> {
        let time_zone = overrides.time_zone.unwrap_or(cfg.output.time_zone);
        let mode = overrides.pacing.unwrap_or(cfg.walk.pacing);
        let tick_ms = overrides.tick_ms.unwrap_or(cfg.walk.tick_ms);

        validate_tick_ms(tick_ms)?;

        let pacing = match mode {
            PacingMode::Deadline => Pacing::NextDeadline,
            PacingMode::Tick => Pacing::Tick(Duration::from_millis(tick_ms)),
        };

        Ok(Self {
            time_zone,
            offset: time_zone.offset(),
            walk: WalkOptions { pacing },
        })
    }
}
