// src/walk/sink.rs

//! Announcement output.

use std::io::Write;
use std::time::Duration;

use chrono::{DateTime, FixedOffset, TimeDelta, Utc};
use tokio::time::Instant;

use crate::errors::Result;
use crate::graph::NodeName;

/// A visit being reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub node: NodeName,
    /// Instant at which the visit was found due.
    pub at: Instant,
    /// Time since the walk started.
    pub elapsed: Duration,
}

/// Receives announcements, one call per visit, in announcement order.
///
/// An error aborts the walk.
pub trait AnnouncementSink {
    fn announce(&mut self, announcement: &Announcement) -> Result<()>;
}

/// Renders walk-relative times as wall-clock `[HH:MM:SS.mmm]` stamps.
///
/// The time zone is fixed when the timestamper is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamper {
    wall_start: DateTime<Utc>,
    offset: FixedOffset,
}

impl Timestamper {
    pub fn new(wall_start: DateTime<Utc>, offset: FixedOffset) -> Self {
        Self { wall_start, offset }
    }

    pub fn render(&self, elapsed: Duration) -> String {
        let at = TimeDelta::from_std(elapsed)
            .ok()
            .and_then(|delta| self.wall_start.checked_add_signed(delta))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        at.with_timezone(&self.offset)
            .format("[%H:%M:%S%.3f]")
            .to_string()
    }
}

/// Writes one `[HH:MM:SS.mmm] NODE` line per announcement.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
    timestamper: Timestamper,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W, timestamper: Timestamper) -> Self {
        Self {
            writer,
            timestamper,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> AnnouncementSink for WriterSink<W> {
    fn announce(&mut self, announcement: &Announcement) -> Result<()> {
        writeln!(
            self.writer,
            "{} {}",
            self.timestamper.render(announcement.elapsed),
            announcement.node
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
