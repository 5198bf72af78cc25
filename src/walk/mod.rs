// src/walk/mod.rs

//! Delayed-propagation walk over a [`crate::graph::Graph`].
//!
//! - [`validator`] checks nodes lazily as the walk reaches them.
//! - [`queue`] is the round-robin queue of pending visits.
//! - [`core`] is the pure state machine deciding what is due and what gets
//!   scheduled next.
//! - [`walker`] is the async shell that reads the clock, suspends, and
//!   reports visits to a [`sink::AnnouncementSink`].
//! - [`timer`] abstracts "now" and suspension so tests can control time.

pub mod core;
pub mod queue;
pub mod sink;
pub mod timer;
pub mod validator;
pub mod walker;

pub use self::core::{WalkCore, WalkStep};
pub use queue::{PendingVisit, VisitQueue};
pub use sink::{Announcement, AnnouncementSink, Timestamper, WriterSink};
pub use timer::{Pacing, Timer, TokioTimer};
pub use validator::{Discovery, NodeValidator};
pub use walker::{WalkOptions, WalkSummary, Walker};
