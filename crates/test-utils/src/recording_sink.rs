use std::time::Duration;

use anyhow::anyhow;
use chrono::{DateTime, FixedOffset, Utc};
use graphwalk::errors::Result;
use graphwalk::walk::{Announcement, AnnouncementSink, Timestamper};

/// Timestamper starting at 2023-05-21 16:00:00.000 in a fixed -07:00 zone.
pub fn fixed_timestamper() -> Timestamper {
    let offset = FixedOffset::west_opt(7 * 3600).expect("valid offset");
    let start = DateTime::parse_from_rfc3339("2023-05-21T16:00:00.000-07:00")
        .expect("valid timestamp")
        .with_timezone(&Utc);
    Timestamper::new(start, offset)
}

/// A sink that records every announcement.
///
/// Optionally fails once a limit is reached, which is the only way to stop
/// a walk over a cyclic graph.
#[derive(Debug)]
pub struct RecordingSink {
    timestamper: Timestamper,
    announced: Vec<(String, Duration)>,
    fail_after: Option<usize>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self {
            timestamper: fixed_timestamper(),
            announced: Vec::new(),
            fail_after: None,
        }
    }

    /// Accept `limit` announcements, then return an error for the next one.
    pub fn failing_after(limit: usize) -> Self {
        Self {
            fail_after: Some(limit),
            ..Self::new()
        }
    }

    /// `(node, elapsed)` pairs in announcement order.
    pub fn announced(&self) -> &[(String, Duration)] {
        &self.announced
    }

    /// Node names in announcement order.
    pub fn nodes(&self) -> Vec<&str> {
        self.announced.iter().map(|(node, _)| node.as_str()).collect()
    }

    /// Elapsed times for one node, in announcement order.
    pub fn times_of(&self, node: &str) -> Vec<Duration> {
        self.announced
            .iter()
            .filter(|(name, _)| name == node)
            .map(|(_, elapsed)| *elapsed)
            .collect()
    }

    /// Rendered `(timestamp, node)` pairs, as the stdout sink prints them.
    pub fn lines(&self) -> Vec<(String, String)> {
        self.announced
            .iter()
            .map(|(node, elapsed)| (self.timestamper.render(*elapsed), node.clone()))
            .collect()
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl AnnouncementSink for RecordingSink {
    fn announce(&mut self, announcement: &Announcement) -> Result<()> {
        if let Some(limit) = self.fail_after {
            if self.announced.len() >= limit {
                return Err(anyhow!("recording sink limit of {limit} announcements reached").into());
            }
        }
        self.announced
            .push((announcement.node.clone(), announcement.elapsed));
        Ok(())
    }
}
