// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs;
pub mod graph;
pub mod logging;
pub mod types;
pub mod walk;

use std::path::Path;

use chrono::Utc;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::cli::CliArgs;
use crate::config::Settings;
use crate::errors::Result;
use crate::fs::RealFileSystem;
use crate::graph::{load_graph_with, Graph};
use crate::walk::{Timestamper, TokioTimer, Walker, WriterSink};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - graph loading
/// - the walker, with a Tokio timer and a stdout sink
/// - Ctrl-C handling
pub async fn run(args: CliArgs) -> Result<()> {
    let fs = RealFileSystem;
    let settings = Settings::load(&fs, args.config.as_deref(), &args.overrides())?;
    debug!(?settings, "resolved settings");

    let graph = load_graph_with(&fs, &args.graph)?;

    if args.dry_run {
        print_dry_run(&args.graph, &graph, &settings);
        return Ok(());
    }

    // Ctrl-C → exit. A zero-weight cycle never yields back to this task, so
    // the handler runs on its own task and exits the process directly.
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("failed to listen for Ctrl+C: {e}");
            return;
        }
        warn!("interrupted; stopping walk");
        std::process::exit(130);
    });

    let timestamper = Timestamper::new(Utc::now(), settings.offset);
    let sink = WriterSink::new(std::io::stdout(), timestamper);
    let mut walker = Walker::new(TokioTimer, sink, settings.walk);

    let summary = walker.walk(&graph).await?;
    info!(
        visits = summary.visits,
        elapsed_ms = summary.elapsed.as_millis() as u64,
        graph = ?args.graph,
        "done"
    );

    Ok(())
}

/// Simple dry-run output: print settings, nodes and their raw edges.
///
/// Nothing is validated here; the walk checks nodes only when it reaches
/// them.
fn print_dry_run(path: &Path, graph: &Graph, settings: &Settings) {
    println!("graphwalk dry-run");
    println!("  graph = {}", path.display());
    println!("  output.time_zone = {} ({})", settings.time_zone, settings.offset);
    println!("  walk.pacing = {:?}", settings.walk.pacing);
    println!();

    println!("nodes ({}):", graph.len());
    for node in graph.nodes() {
        if node.is_root() {
            println!("  - {} (start)", node.name());
        } else {
            println!("  - {}", node.name());
        }

        match node.raw_edges() {
            Some(Value::Object(edges)) => {
                for (target, weight) in edges {
                    println!("      -> {target}: {weight}");
                }
            }
            Some(other) => println!("      edges: {other}"),
            None => println!("      edges: (missing)"),
        }
    }

    debug!("dry-run complete (no walk)");
}
