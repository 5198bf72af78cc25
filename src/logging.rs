// src/logging.rs

//! Diagnostics for `graphwalk`, via `tracing` + `tracing-subscriber`.
//!
//! Everything is written to STDERR; stdout carries only announcement lines.
//!
//! The filter is taken from, in order:
//! 1. `--log-level`
//! 2. `GRAPHWALK_LOG`, any `EnvFilter` directive string such as `debug` or
//!    `graphwalk::walk=trace`
//! 3. `info`

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

use crate::cli::LogLevel;

/// Environment variable read when `--log-level` is not given.
pub const LOG_ENV_VAR: &str = "GRAPHWALK_LOG";

const DEFAULT_DIRECTIVE: &str = "info";

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let env = std::env::var(LOG_ENV_VAR).ok();
    let filter = build_filter(cli_level, env.as_deref());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))
}

/// Pick the filter from the CLI level or the environment value.
///
/// A blank or unparsable environment value falls back to `info`.
pub fn build_filter(cli_level: Option<LogLevel>, env: Option<&str>) -> EnvFilter {
    if let Some(level) = cli_level {
        return EnvFilter::new(level.as_directive());
    }

    env.map(str::trim)
        .filter(|directives| !directives.is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

impl LogLevel {
    fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}
