use std::fmt;
use std::str::FromStr;

use chrono::{FixedOffset, Local, Offset, Utc};
use serde::Deserialize;

/// How the walker waits while no pending visit is due.
///
/// - `Deadline`: sleep until the earliest pending visit becomes due
///   (default behaviour).
/// - `Tick`: busy-poll, sleeping one fixed tick per postponed visit.
///
/// `Tick` may announce late by up to a tick for every visit it rotates
/// past, which can also change the order of visits that fall due at the
/// same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PacingMode {
    #[default]
    Deadline,
    Tick,
}

impl FromStr for PacingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "deadline" => Ok(PacingMode::Deadline),
            "tick" => Ok(PacingMode::Tick),
            other => Err(format!(
                "invalid pacing: {other} (expected \"deadline\" or \"tick\")"
            )),
        }
    }
}

/// Time zone used to render announcement timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum TimeZoneSetting {
    /// The machine's local offset, read once when settings are resolved.
    #[default]
    Local,
    Utc,
    Fixed(FixedOffset),
}

impl TimeZoneSetting {
    /// Resolve to a concrete offset.
    pub fn offset(&self) -> FixedOffset {
        match self {
            TimeZoneSetting::Local => Local::now().offset().fix(),
            TimeZoneSetting::Utc => Utc.fix(),
            TimeZoneSetting::Fixed(offset) => *offset,
        }
    }
}

impl FromStr for TimeZoneSetting {
    type Err = String;

    /// Accepts `local`, `utc` / `z`, or an offset like `+02:00`, `-0700`, `+5`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_lowercase().as_str() {
            "local" => return Ok(TimeZoneSetting::Local),
            "utc" | "z" => return Ok(TimeZoneSetting::Utc),
            _ => {}
        }

        parse_offset(s).map(TimeZoneSetting::Fixed).ok_or_else(|| {
            format!(
                "invalid time zone: {s} (expected \"local\", \"utc\", or an offset like \"-07:00\")"
            )
        })
    }
}

impl TryFrom<String> for TimeZoneSetting {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for TimeZoneSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeZoneSetting::Local => write!(f, "local"),
            TimeZoneSetting::Utc => write!(f, "utc"),
            TimeZoneSetting::Fixed(offset) => write!(f, "{offset}"),
        }
    }
}

fn parse_offset(s: &str) -> Option<FixedOffset> {
    let (sign, rest) = match s.as_bytes().first()? {
        b'+' => (1, &s[1..]),
        b'-' => (-1, &s[1..]),
        _ => return None,
    };
    if !rest.is_ascii() {
        return None;
    }

    let (hours, minutes) = match rest.split_once(':') {
        Some((h, m)) => (h, m),
        None if rest.len() == 4 => rest.split_at(2),
        None => (rest, "0"),
    };

    if hours.is_empty() || hours.len() > 2 || minutes.is_empty() || minutes.len() > 2 {
        return None;
    }

    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}
