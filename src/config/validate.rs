// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{GraphwalkError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::GraphwalkError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.output, raw.walk))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    // pacing and time_zone are strongly typed and validated during
    // deserialization.
    validate_walk_section(cfg)?;
    Ok(())
}

fn validate_walk_section(cfg: &RawConfigFile) -> Result<()> {
    validate_tick_ms(cfg.walk.tick_ms)
}

/// Tick length check shared by file validation and override merging.
pub(crate) fn validate_tick_ms(tick_ms: u64) -> Result<()> {
    if tick_ms == 0 {
        return Err(GraphwalkError::ConfigError(
            "[walk].tick_ms must be >= 1 (got 0)".to_string(),
        ));
    }
    Ok(())
}
