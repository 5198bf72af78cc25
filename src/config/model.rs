// src/config/model.rs

use serde::Deserialize;

use crate::types::{PacingMode, TimeZoneSetting};

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [output]
/// time_zone = "-07:00"
///
/// [walk]
/// pacing = "tick"
/// tick_ms = 5
/// ```
///
/// All sections are optional and have reasonable defaults. Use
/// [`ConfigFile::try_from`] to get a validated configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawConfigFile {
    #[serde(default)]
    pub output: OutputSection,

    #[serde(default)]
    pub walk: WalkSection,
}

/// Validated configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfigFile {
    pub output: OutputSection,
    pub walk: WalkSection,
}

impl ConfigFile {
    /// Assemble a config without validation. Prefer `ConfigFile::try_from`.
    pub(crate) fn new_unchecked(output: OutputSection, walk: WalkSection) -> Self {
        Self { output, walk }
    }
}

/// `[output]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputSection {
    /// `"local"` (default), `"utc"`, or a fixed offset such as `"-07:00"`.
    #[serde(default)]
    pub time_zone: TimeZoneSetting,
}

/// `[walk]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct WalkSection {
    /// `"deadline"` (default) or `"tick"`.
    #[serde(default)]
    pub pacing: PacingMode,

    /// Tick length in milliseconds when `pacing = "tick"`.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

fn default_tick_ms() -> u64 {
    1
}

impl Default for WalkSection {
    fn default() -> Self {
        Self {
            pacing: PacingMode::default(),
            tick_ms: default_tick_ms(),
        }
    }
}
