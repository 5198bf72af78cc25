// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, ValueEnum};

use crate::config::Overrides;
use crate::types::{PacingMode, TimeZoneSetting};

/// Command-line arguments for `graphwalk`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "graphwalk",
    version,
    about = "Walk a weighted graph from its start node, announcing each visit after its edge delay.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the graph file (JSON, or TOML with a `.toml` extension).
    #[arg(value_name = "GRAPH")]
    pub graph: PathBuf,

    /// Path to a config file (TOML).
    ///
    /// Default: `Graphwalk.toml` in the current working directory, if present.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Time zone for timestamps: `local`, `utc`, or an offset like `-07:00`.
    #[arg(long, value_name = "ZONE", value_parser = TimeZoneSetting::from_str)]
    pub time_zone: Option<TimeZoneSetting>,

    /// How to wait while nothing is due: `deadline` or `tick`.
    #[arg(long, value_name = "MODE", value_parser = PacingMode::from_str)]
    pub pacing: Option<PacingMode>,

    /// Tick length in milliseconds for `--pacing tick`.
    #[arg(long, value_name = "MS", value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: Option<u64>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `GRAPHWALK_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Load the graph and print it, but don't walk it.
    #[arg(long)]
    pub dry_run: bool,
}

impl CliArgs {
    /// Settings given on the command line that override the config file.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            time_zone: self.time_zone,
            pacing: self.pacing,
            tick_ms: self.tick_ms,
        }
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
