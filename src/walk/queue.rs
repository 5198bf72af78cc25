// src/walk/queue.rs

use std::collections::VecDeque;

use tokio::time::Instant;

use crate::graph::NodeName;

/// A visit that has been scheduled but not announced yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingVisit {
    pub node: NodeName,
    /// Instant at which the visit becomes due.
    pub ready_at: Instant,
}

/// Round-robin queue of pending visits.
///
/// Access is fixed at both ends:
/// - new and postponed entries go in at the head (front)
/// - entries are examined and removed at the tail (back)
///
/// The tail therefore always holds the oldest entry, so entries discovered
/// earlier are examined before entries discovered later, while a postponed
/// entry moves out of the way and the scan continues with the next one.
///
/// Not a priority queue: announcement order falls out of the rotation, not
/// out of sorting by `ready_at`.
#[derive(Debug, Default)]
pub struct VisitQueue {
    entries: VecDeque<PendingVisit>,
}

impl VisitQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Insert an entry at the head.
    pub fn push_head(&mut self, visit: PendingVisit) {
        self.entries.push_front(visit);
    }

    /// Remove the entry at the tail, i.e. the oldest one.
    pub fn pop_tail(&mut self) -> Option<PendingVisit> {
        self.entries.pop_back()
    }

    /// Earliest `ready_at` of all queued entries.
    ///
    /// Only used to decide how long the walker may sleep; it has no effect
    /// on which entry is examined next.
    pub fn earliest_ready_at(&self) -> Option<Instant> {
        self.entries.iter().map(|visit| visit.ready_at).min()
    }

    /// Node names from tail to head, i.e. in examination order.
    pub fn examination_order(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().rev().map(|visit| visit.node.as_str())
    }
}
