// src/walk/walker.rs

use std::fmt;
use std::time::Duration;

use tracing::{debug, info};

use crate::errors::Result;
use crate::graph::Graph;
use crate::walk::core::{WalkCore, WalkStep};
use crate::walk::sink::{Announcement, AnnouncementSink};
use crate::walk::timer::{Pacing, Timer};

/// Options for a single walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkOptions {
    pub pacing: Pacing,
}

/// What a completed walk did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkSummary {
    /// Number of announcements made.
    pub visits: u64,
    /// Time from start until the queue ran empty.
    pub elapsed: Duration,
}

/// Drives a [`WalkCore`] against a clock and an announcement sink.
///
/// This is the IO shell around the core: it reads the time, suspends when
/// nothing is due and reports due visits. All ordering and validation
/// semantics live in the core.
pub struct Walker<T: Timer, S: AnnouncementSink> {
    timer: T,
    sink: S,
    options: WalkOptions,
}

impl<T: Timer, S: AnnouncementSink> fmt::Debug for Walker<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Walker")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl<T: Timer, S: AnnouncementSink> Walker<T, S> {
    pub fn new(timer: T, sink: S, options: WalkOptions) -> Self {
        Self {
            timer,
            sink,
            options,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_parts(self) -> (T, S) {
        (self.timer, self.sink)
    }

    /// Walk `graph` from its start node until no visits remain.
    ///
    /// The first validation or sink error ends the walk; anything announced
    /// before it stays announced. A graph with a reachable cycle never
    /// finishes.
    pub async fn walk(&mut self, graph: &Graph) -> Result<WalkSummary> {
        let started = self.timer.now();
        info!(nodes = graph.len(), pacing = ?self.options.pacing, "walk started");

        let mut core = WalkCore::seed(graph, started)?;
        let mut visits: u64 = 0;

        loop {
            let now = self.timer.now();

            match core.step(now) {
                WalkStep::Finished => break,
                WalkStep::Postponed { next_deadline } => {
                    let pause = self.options.pacing.suspension(now, next_deadline);
                    self.timer.sleep(pause).await;
                }
                WalkStep::Due(visit) => {
                    let announcement = Announcement {
                        node: visit.node.clone(),
                        at: now,
                        elapsed: now.saturating_duration_since(started),
                    };
                    debug!(
                        node = %announcement.node,
                        elapsed_ms = announcement.elapsed.as_millis() as u64,
                        "announcing visit"
                    );
                    self.sink.announce(&announcement)?;
                    visits += 1;

                    core.expand(&visit, now)?;
                }
            }
        }

        let summary = WalkSummary {
            visits,
            elapsed: self.timer.now().saturating_duration_since(started),
        };
        info!(
            visits = summary.visits,
            elapsed_ms = summary.elapsed.as_millis() as u64,
            "walk finished"
        );

        Ok(summary)
    }
}
