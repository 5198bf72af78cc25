// src/walk/core.rs

//! Pure walk state machine.
//!
//! [`WalkCore`] owns the validator and the visit queue and is driven with
//! explicit instants. It never reads a clock, sleeps, or writes output; the
//! async shell in [`crate::walk::walker`] does that and feeds the core the
//! current time on every step.
//!
//! A walk is driven as:
//!
//! ```text
//! seed(now)
//! loop {
//!     match step(now) {
//!         Due(visit)     => announce visit, then expand(visit, now)
//!         Postponed {..} => suspend, then continue
//!         Finished       => break
//!     }
//! }
//! ```

use tokio::time::Instant;
use tracing::{debug, trace};

use crate::errors::WalkError;
use crate::graph::Graph;
use crate::walk::queue::{PendingVisit, VisitQueue};
use crate::walk::validator::{Discovery, NodeValidator};

/// Result of examining the tail of the queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkStep {
    /// The examined visit is due and has been removed from the queue. The
    /// caller announces it and then hands it back to [`WalkCore::expand`].
    Due(PendingVisit),
    /// The examined visit is not due yet and went back to the head.
    /// `next_deadline` is the earliest instant at which any queued visit
    /// becomes due.
    Postponed { next_deadline: Instant },
    /// The queue is empty; the walk is complete.
    Finished,
}

#[derive(Debug)]
pub struct WalkCore<'g> {
    validator: NodeValidator<'g>,
    queue: VisitQueue,
}

impl<'g> WalkCore<'g> {
    /// Find and discover the start node and queue its visit, due at `now`.
    ///
    /// An empty graph yields a core whose first step is `Finished`.
    pub fn seed(graph: &'g Graph, now: Instant) -> Result<Self, WalkError> {
        let mut validator = NodeValidator::new(graph);
        let mut queue = VisitQueue::new();

        if let Some(root) = validator.find_root()? {
            validator.discover(root, Discovery::Root)?;
            debug!(root = %root, "seeding walk with start node");
            queue.push_head(PendingVisit {
                node: root.to_string(),
                ready_at: now,
            });
        }

        Ok(Self { validator, queue })
    }

    /// Number of visits still waiting.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn queue(&self) -> &VisitQueue {
        &self.queue
    }

    /// Examine the oldest queued visit.
    pub fn step(&mut self, now: Instant) -> WalkStep {
        let Some(visit) = self.queue.pop_tail() else {
            return WalkStep::Finished;
        };

        if now < visit.ready_at {
            trace!(node = %visit.node, "visit not due yet; rotating");
            let ready_at = visit.ready_at;
            self.queue.push_head(visit);
            let next_deadline = self.queue.earliest_ready_at().unwrap_or(ready_at);
            return WalkStep::Postponed { next_deadline };
        }

        WalkStep::Due(visit)
    }

    /// Schedule the successors of a visit that was announced at `now`.
    ///
    /// Each successor is discovered and queued at the head in edge
    /// declaration order, due `now + weight`. Returns the number of visits
    /// scheduled.
    pub fn expand(&mut self, visit: &PendingVisit, now: Instant) -> Result<usize, WalkError> {
        let edges = self.validator.validated_edges(&visit.node)?;

        for edge in edges.iter() {
            self.validator.discover(
                &edge.target,
                Discovery::EdgeTarget { from: &visit.node },
            )?;

            let ready_at = now
                .checked_add(edge.delay)
                .ok_or_else(|| WalkError::WeightOutOfRange {
                    node: visit.node.clone(),
                    target: edge.target.clone(),
                    weight: edge.delay.as_secs_f64(),
                })?;

            self.queue.push_head(PendingVisit {
                node: edge.target.clone(),
                ready_at,
            });
        }

        debug!(
            node = %visit.node,
            scheduled = edges.len(),
            pending = self.queue.len(),
            "expanded visit"
        );

        Ok(edges.len())
    }
}
